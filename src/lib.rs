// src/lib.rs
//! Builds a searchable HTML report from a directory of patent search result pages.
//!
//! Each page yields the depositor's tax id, the reported number of results and,
//! when that number is positive, the rows of the results table.

pub mod batch;
pub mod config;
pub mod extractors;
pub mod models;
pub mod report;
pub mod storage;
pub mod utils;

use batch::BatchAggregator;
use config::ReportConfig;
use models::BatchOutcome;
use storage::StorageManager;
use utils::AppError;

// Exit codes. clap exits with 2 on usage errors, so partial runs use 3.
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_PARTIAL: u8 = 3;

/// Processes the input directory and writes the report (and the JSON export, if configured).
pub async fn run(config: ReportConfig) -> Result<BatchOutcome, AppError> {
    let batch = BatchAggregator::new(config)?;

    let outcome = batch.run().await?;

    // Nothing is created on disk until the batch has succeeded
    let storage = StorageManager::new(&batch.config().output_path)?;
    let html = report::render_report(&outcome.records);
    storage.save_report(&html)?;

    if let Some(json_path) = &batch.config().json_path {
        storage.save_json_export(json_path, &batch.config().input_dir, &outcome)?;
    }

    Ok(outcome)
}

/// Process exit code for the result of `run`.
pub fn exit_code(result: &Result<BatchOutcome, AppError>) -> u8 {
    match result {
        Ok(outcome) if outcome.is_complete() => EXIT_SUCCESS,
        Ok(_) => EXIT_PARTIAL,
        Err(_) => EXIT_FAILURE,
    }
}
