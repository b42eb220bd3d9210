// src/extract/mod.rs
pub mod financial;

// Re-export key extraction types for convenience
pub use financial::{extract_financial_data, FinancialData};
