// src/config.rs
use std::path::{Path, PathBuf};

use crate::utils::error::AppError;

pub const DEFAULT_INPUT_DIR: &str = "./PATENTES";
pub const DEFAULT_OUTPUT_PATH: &str = "PATENTES.HTML";
pub const DEFAULT_EXTENSION: &str = "html";

/// What the batch does when a document cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the failure, record it in the outcome and keep going.
    #[default]
    SkipAndRecord,
    /// Stop the batch and return the first read error.
    Abort,
}

/// Everything a run needs; passed into the batch at construction.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub extension: String,
    pub failure_policy: FailurePolicy,
    pub jobs: usize,
    pub json_path: Option<PathBuf>,
    pub debug: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            extension: DEFAULT_EXTENSION.to_string(),
            failure_policy: FailurePolicy::default(),
            jobs: 1,
            json_path: None,
            debug: false,
        }
    }
}

impl ReportConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.jobs == 0 {
            return Err(AppError::Config("jobs must be at least 1".to_string()));
        }
        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(AppError::Config("document extension must not be empty".to_string()));
        }
        Ok(())
    }

    /// Name-suffix check; case-sensitive, so `.HTML` does not match `html`.
    pub fn is_document(&self, path: &Path) -> bool {
        let suffix = format!(".{}", self.extension.trim_start_matches('.'));
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.ends_with(&suffix))
            .unwrap_or(false)
    }

    /// Where annotated copies of the inputs go in debug mode.
    pub fn debug_dir(&self) -> PathBuf {
        self.output_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .join("debug")
    }
}
