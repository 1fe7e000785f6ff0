// src/extractors/table.rs
use crate::extractors::parsed::ParsedDocument;
use crate::models::DetailRecord;
use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

/// Body of the search results table.
pub const DETAILS_REGION: &str = "tbody#tituloContext";

const MIN_CELLS: usize = 4;

static CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("td").expect("Failed to compile CELL_SELECTOR")
});

/// Converts rows of the results table into `DetailRecord`s.
pub struct DetailTableExtractor {
    region: Selector,
}

impl DetailTableExtractor {
    pub fn new() -> Result<Self, ExtractError> {
        Self::with_region(DETAILS_REGION)
    }

    pub fn with_region(region: &str) -> Result<Self, ExtractError> {
        let region = Selector::parse(region)
            .map_err(|_| ExtractError::InvalidSelector(region.to_string()))?;
        Ok(Self { region })
    }

    /// Rows in source order. Empty when the region is missing; rows with fewer than
    /// four cells are dropped without affecting their siblings.
    pub fn extract_details(&self, doc: &ParsedDocument) -> Vec<DetailRecord> {
        let Some(rows) = doc.region_rows(&self.region) else {
            tracing::debug!("Details table region not found");
            return Vec::new();
        };

        rows.into_iter()
            .enumerate()
            .filter_map(|(index, row)| {
                let record = row_to_record(row);
                if record.is_none() {
                    tracing::trace!("Skipping row {}: fewer than {} cells", index, MIN_CELLS);
                }
                record
            })
            .collect()
    }
}

fn row_to_record(row: ElementRef) -> Option<DetailRecord> {
    let cells: Vec<String> = row.select(&CELL_SELECTOR).map(cell_text).collect();
    if cells.len() < MIN_CELLS {
        return None;
    }

    // Cells past the fourth are ignored
    let mut cells = cells.into_iter();
    Some(DetailRecord {
        request_number: cells.next()?,
        filing_date: cells.next()?,
        title: cells.next()?,
        classification_code: cells.next()?,
    })
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}
