// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application.
// Note the extractor itself has no error type: malformed input degrades to
// empty or shorter result sequences, never to a failure.

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to extract text from PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),
}

#[derive(Error, Debug)]
pub enum QaError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // e.g., 429 Too Many Requests, 403 Forbidden

    #[error("GOOGLE_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("Failed to parse analysis response: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Insufficient data for generating the revenue comparison chart")]
    InsufficientData,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Document decoding failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("Analysis query failed: {0}")]
    Qa(#[from] QaError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Chart rendering failed: {0}")]
    Chart(#[from] ChartError),
}
