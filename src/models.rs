// src/models.rs
use serde::{Deserialize, Serialize};

/// One row of the patent results table.
/// Every field is kept as the trimmed cell text; dates and numbers are not parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRecord {
    pub request_number: String,
    pub filing_date: String,
    pub title: String,
    pub classification_code: String,
}

/// Aggregate extracted from one search-result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub file_name: String,
    pub tax_id: Option<String>,  // None when the depositor label is missing
    pub result_count: u32,       // As reported by the page, not cross-checked against `details`
    pub details: Vec<DetailRecord>,
}

impl DocumentRecord {
    /// True when the page reports results and the extracted rows disagree with that count.
    /// The mismatch is surfaced, never corrected.
    pub fn count_mismatch(&self) -> bool {
        self.result_count > 0 && self.details.len() != self.result_count as usize
    }

    /// Whether the rendered summary row gets a collapsible details section.
    pub fn has_details_section(&self) -> bool {
        self.result_count > 0
    }
}

/// Records in the order their files were enumerated.
pub type ReportModel = Vec<DocumentRecord>;

/// A document skipped by the batch, with the reason shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFailure {
    pub file_name: String,
    pub reason: String,
}

/// Result of one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub records: ReportModel,
    pub failures: Vec<DocumentFailure>,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
