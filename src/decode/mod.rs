// src/decode/mod.rs
use std::fs;
use std::path::Path;

use crate::utils::error::DecodeError;

/// Decodes an uploaded document into a flat text string.
///
/// Files with a `.pdf` extension go through pdf-extract; anything else is
/// read as UTF-8 text. Page boundaries and layout are not preserved, line
/// breaks are the only structure the downstream extractor consumes.
pub fn decode_document(path: &Path) -> Result<String, DecodeError> {
    if is_pdf(path) {
        tracing::info!("Decoding PDF document: {}", path.display());
        let text = pdf_extract::extract_text(path)?;
        tracing::debug!("Decoded {} characters of PDF text", text.len());
        Ok(text)
    } else {
        tracing::info!("Reading plain text document: {}", path.display());
        let text = fs::read_to_string(path)?;
        Ok(text)
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_pdf_detection_by_extension() {
        assert!(is_pdf(&PathBuf::from("report.pdf")));
        assert!(is_pdf(&PathBuf::from("report.PDF")));
        assert!(!is_pdf(&PathBuf::from("report.txt")));
        assert!(!is_pdf(&PathBuf::from("report")));
    }

    #[test]
    fn test_plain_text_passthrough() {
        let dir = std::env::temp_dir().join("findoc_decode_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("report.txt");
        fs::write(&path, "Total Revenue\n$1,000\nQ1 2024").unwrap();

        let text = decode_document(&path).unwrap();
        assert_eq!(text, "Total Revenue\n$1,000\nQ1 2024");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = decode_document(&PathBuf::from("/nonexistent/report.txt"));
        assert!(matches!(result, Err(DecodeError::Io(_))));
    }
}
