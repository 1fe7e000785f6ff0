// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::BatchOutcome;
use crate::utils::error::StorageError;

/// Writes run outputs to disk.
pub struct StorageManager {
    report_path: PathBuf,
}

impl StorageManager {
    /// Creates the report's parent directory if it doesn't exist.
    pub fn new<P: AsRef<Path>>(report_path: P) -> Result<Self, StorageError> {
        let report_path = report_path.as_ref().to_path_buf();
        ensure_parent(&report_path)?;
        Ok(Self { report_path })
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    /// Saves the rendered report, replacing any previous one.
    pub fn save_report(&self, html: &str) -> Result<PathBuf, StorageError> {
        fs::write(&self.report_path, html)?;
        tracing::info!("Saved report to {}", self.report_path.display());
        Ok(self.report_path.clone())
    }

    /// Saves records and failures as JSON, with a generation timestamp.
    pub fn save_json_export(
        &self,
        path: &Path,
        input_dir: &Path,
        outcome: &BatchOutcome,
    ) -> Result<PathBuf, StorageError> {
        ensure_parent(path)?;

        let documents: Vec<serde_json::Value> = outcome
            .records
            .iter()
            .map(|record| -> Result<serde_json::Value, StorageError> {
                let mut value = serde_json::to_value(record)
                    .map_err(|e| StorageError::SerializationError(e.to_string()))?;
                if let Some(obj) = value.as_object_mut() {
                    obj.insert("countMismatch".to_string(), record.count_mismatch().into());
                }
                Ok(value)
            })
            .collect::<Result<_, StorageError>>()?;

        let export = serde_json::json!({
            "generatedAt": chrono::Utc::now().to_rfc3339(),
            "inputDirectory": input_dir.display().to_string(),
            "documentCount": outcome.records.len(),
            "documents": documents,
            "failures": outcome.failures,
        });

        let export_str = serde_json::to_string_pretty(&export)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(path, export_str)?;

        tracing::info!("Saved JSON export to {}", path.display());
        Ok(path.to_path_buf())
    }
}

fn ensure_parent(path: &Path) -> Result<(), StorageError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent)?;
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DetailRecord, DocumentFailure, DocumentRecord};

    fn outcome() -> BatchOutcome {
        BatchOutcome {
            records: vec![DocumentRecord {
                file_name: "a.html".to_string(),
                tax_id: Some("12345678901234".to_string()),
                result_count: 3,
                details: vec![DetailRecord {
                    request_number: "BR 1".to_string(),
                    filing_date: "01/01/2001".to_string(),
                    title: "T".to_string(),
                    classification_code: "A01B".to_string(),
                }],
            }],
            failures: vec![DocumentFailure {
                file_name: "b.html".to_string(),
                reason: "not valid UTF-8".to_string(),
            }],
        }
    }

    #[test]
    fn test_save_report_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saida").join("PATENTES.HTML");
        let storage = StorageManager::new(&path).unwrap();
        storage.save_report("<p>ok</p>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>ok</p>");
    }

    #[test]
    fn test_save_report_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path().join("r.html")).unwrap();
        storage.save_report("first").unwrap();
        storage.save_report("second").unwrap();
        assert_eq!(fs::read_to_string(storage.report_path()).unwrap(), "second");
    }

    #[test]
    fn test_json_export_shape() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path().join("r.html")).unwrap();
        let json_path = dir.path().join("export").join("r.json");
        storage.save_json_export(&json_path, Path::new("./PATENTES"), &outcome()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(value["documentCount"], 1);
        assert_eq!(value["inputDirectory"], "./PATENTES");
        assert_eq!(value["documents"][0]["taxId"], "12345678901234");
        assert_eq!(value["documents"][0]["countMismatch"], true);
        assert_eq!(value["failures"][0]["fileName"], "b.html");
        assert!(value["generatedAt"].as_str().is_some());
    }
}
