// src/extractors/parsed.rs
use scraper::{ElementRef, Html, Selector};

/// A parsed result page. Scoped to a single document's processing and dropped afterwards.
///
/// Extraction only needs two views of the tree: the flattened text, and the direct
/// child rows of one structural region.
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    /// Parses markup leniently; malformed markup still yields a tree.
    pub fn parse(content: &str) -> Self {
        Self { html: Html::parse_document(content) }
    }

    /// All text nodes concatenated in document order, with tag structure discarded.
    pub fn flatten_text(&self) -> String {
        self.html.root_element().text().collect()
    }

    /// Direct `<tr>` children of the first element matching `region`.
    /// Returns `None` when the region is absent. Rows of nested tables are not included.
    pub fn region_rows(&self, region: &Selector) -> Option<Vec<ElementRef<'_>>> {
        let container = self.html.select(region).next()?;
        let rows = container
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "tr")
            .collect();
        Some(rows)
    }
}
