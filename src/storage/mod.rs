// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::extract::FinancialData;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Persists a copy of the uploaded document under `<base_dir>/uploads/`.
    pub fn save_document_copy(&self, source: &Path) -> Result<PathBuf, StorageError> {
        let uploads_dir = self.base_dir.join("uploads");
        if !uploads_dir.exists() {
            fs::create_dir_all(&uploads_dir).map_err(StorageError::IoError)?;
        }

        let file_name = source
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("uploaded_document");

        let file_path = uploads_dir.join(file_name);
        fs::copy(source, &file_path).map_err(StorageError::IoError)?;

        tracing::info!("Saved document copy to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves the decoded document text for inspection (debug mode).
    pub fn save_decoded_text(&self, stem: &str, text: &str) -> Result<PathBuf, StorageError> {
        let debug_dir = self.base_dir.join("debug");
        if !debug_dir.exists() {
            fs::create_dir_all(&debug_dir).map_err(StorageError::IoError)?;
        }

        let file_path = debug_dir.join(format!("{}_decoded.txt", stem));
        fs::write(&file_path, text).map_err(StorageError::IoError)?;

        tracing::info!("Saved decoded text to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves the extraction result plus a metadata envelope in JSON format
    pub fn save_financial_data(
        &self,
        stem: &str,
        data: &FinancialData,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_financial_data.json", stem));

        let envelope = serde_json::json!({
            "source": stem,
            "periods": data.date.len(),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
            "financial_data": data,
        });

        let envelope_str = serde_json::to_string_pretty(&envelope)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, envelope_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved financial data to {}", file_path.display());

        Ok(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_financial_data;

    fn temp_storage(name: &str) -> (StorageManager, PathBuf) {
        let dir = std::env::temp_dir().join(format!("findoc_storage_test_{}", name));
        fs::remove_dir_all(&dir).ok();
        (StorageManager::new(&dir).unwrap(), dir)
    }

    #[test]
    fn test_save_financial_data_round_trip() {
        let (storage, dir) = temp_storage("json");
        let data = extract_financial_data("Revenue\n$1,200,000\nQ1 2023 Results");

        let path = storage.save_financial_data("report", &data).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(written["periods"], 1);
        assert_eq!(written["financial_data"]["Revenue"][0], 1_200_000.0);
        assert_eq!(written["financial_data"]["Date"][0], "Q1 2023 Results");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_document_copy() {
        let (storage, dir) = temp_storage("copy");
        let source = dir.join("input.txt");
        fs::write(&source, "some document").unwrap();

        let copy = storage.save_document_copy(&source).unwrap();
        assert_eq!(fs::read_to_string(&copy).unwrap(), "some document");
        assert!(copy.starts_with(dir.join("uploads")));

        fs::remove_dir_all(&dir).ok();
    }
}
