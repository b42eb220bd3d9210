// src/qa/mod.rs
pub mod client;
