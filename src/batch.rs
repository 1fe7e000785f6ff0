// src/batch.rs
use std::path::PathBuf;
use std::sync::Arc;

use tokio::task::{JoinError, JoinSet};

use crate::config::{FailurePolicy, ReportConfig};
use crate::extractors::document::{file_name_of, DocumentProcessor};
use crate::models::{BatchOutcome, DocumentFailure, DocumentRecord};
use crate::utils::error::{AppError, DocumentReadError};

type IndexedResult = (usize, Result<DocumentRecord, DocumentReadError>);
type DocumentTask = Result<IndexedResult, AppError>;

/// Runs the document processor over every qualifying file of the input directory.
pub struct BatchAggregator {
    config: ReportConfig,
    processor: Arc<DocumentProcessor>,
}

impl BatchAggregator {
    pub fn new(config: ReportConfig) -> Result<Self, AppError> {
        config.validate()?;
        let mut processor = DocumentProcessor::new()?;
        if config.debug {
            processor = processor.with_debug_dir(config.debug_dir());
        }
        Ok(Self { config, processor: Arc::new(processor) })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Qualifying documents, sorted by name so repeated runs see the same order.
    pub async fn enumerate(&self) -> Result<Vec<PathBuf>, AppError> {
        let input_dir = &self.config.input_dir;
        let mut entries = tokio::fs::read_dir(input_dir).await.map_err(|e| {
            AppError::Config(format!("Cannot read input directory '{}': {}", input_dir.display(), e))
        })?;

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !self.config.is_document(&path) {
                tracing::trace!("Ignoring {}", path.display());
                continue;
            }
            if entry.file_type().await?.is_dir() {
                tracing::debug!("Ignoring directory {}", path.display());
                continue;
            }
            paths.push(path);
        }
        paths.sort();

        tracing::info!("Found {} documents in {}", paths.len(), input_dir.display());
        Ok(paths)
    }

    /// Enumerates the input directory and processes everything in it.
    pub async fn run(&self) -> Result<BatchOutcome, AppError> {
        let paths = self.enumerate().await?;
        self.process_all(paths).await
    }

    /// Processes `paths` with at most `jobs` documents in flight.
    /// Records come back in the order of `paths`, whatever order tasks finish in.
    pub async fn process_all(&self, paths: Vec<PathBuf>) -> Result<BatchOutcome, AppError> {
        let total = paths.len();
        let mut slots: Vec<Option<Result<DocumentRecord, DocumentReadError>>> =
            (0..total).map(|_| None).collect();

        let mut pending = paths.into_iter().enumerate();
        let mut tasks: JoinSet<DocumentTask> = JoinSet::new();

        loop {
            while tasks.len() < self.config.jobs {
                let Some((index, path)) = pending.next() else { break };
                tasks.spawn(process_one(Arc::clone(&self.processor), index, path));
            }

            let Some(joined) = tasks.join_next().await else { break };
            let (index, result) = joined
                .map_err(|e| AppError::Processing(format!("Document task failed: {}", e)))??;

            match result {
                Ok(record) => {
                    tracing::info!(
                        "Processed {} ({}/{}): {} results",
                        record.file_name,
                        index + 1,
                        total,
                        record.result_count
                    );
                    slots[index] = Some(Ok(record));
                }
                Err(err) => {
                    tracing::error!("Failed to process {}: {}", err.file_name(), err);
                    if self.config.failure_policy == FailurePolicy::Abort {
                        tasks.abort_all();
                        return Err(AppError::Read(err));
                    }
                    slots[index] = Some(Err(err));
                }
            }
        }

        let mut outcome = BatchOutcome::default();
        for result in slots.into_iter().flatten() {
            match result {
                Ok(record) => outcome.records.push(record),
                Err(err) => outcome.failures.push(DocumentFailure {
                    file_name: err.file_name().to_string(),
                    reason: err.to_string(),
                }),
            }
        }

        tracing::info!(
            "Batch finished. Processed: {}, Failed: {}",
            outcome.records.len(),
            outcome.failures.len()
        );
        Ok(outcome)
    }
}

async fn process_one(processor: Arc<DocumentProcessor>, index: usize, path: PathBuf) -> DocumentTask {
    let file_name = file_name_of(&path);
    tracing::debug!("Reading {}", path.display());

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(source) => return Ok((index, Err(DocumentReadError::Io { file: file_name, source }))),
    };

    // The parsed tree is not Send, so parsing stays inside the blocking task
    let task_name = file_name.clone();
    let joined = tokio::task::spawn_blocking(move || processor.process(file_name, bytes)).await;
    let result = parse_task_result(&task_name, joined)?;

    Ok((index, result))
}

/// A panicking parse is a bug, not an unreadable document, so it fails the batch.
fn parse_task_result(
    file_name: &str,
    joined: Result<Result<DocumentRecord, DocumentReadError>, JoinError>,
) -> Result<Result<DocumentRecord, DocumentReadError>, AppError> {
    joined.map_err(|e| AppError::Processing(format!("Processing {} failed: {}", file_name, e)))
}
