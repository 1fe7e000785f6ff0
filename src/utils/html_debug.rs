// src/utils/html_debug.rs
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::utils::error::StorageError;

const HIGHLIGHT_STYLE: &str = "\
.highlight-tax_id { background-color: #90EE90; }
.highlight-result_count { background-color: #ADD8E6; }
.highlight-custom { background-color: #FFC0CB; }
";

/// Wraps each highlighted byte range of `html` in a span carrying its rule name.
/// Ranges overlapping an earlier one are dropped.
pub fn annotate_html(html: &str, highlights: &[(usize, usize, &str)]) -> String {
    let mut debug_html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<style>\n");
    debug_html.push_str(HIGHLIGHT_STYLE);
    debug_html.push_str("</style>\n</head>\n<body>\n");

    let mut sorted_highlights = highlights.to_vec();
    sorted_highlights.sort_by_key(|h| h.0);

    let mut last_pos = 0;
    for (start, end, rule) in sorted_highlights {
        if start < last_pos || end > html.len() {
            continue;
        }
        debug_html.push_str(&html[last_pos..start]);

        let css_class = match rule {
            "tax_id" | "result_count" => format!("highlight-{}", rule),
            _ => "highlight-custom".to_string(),
        };
        debug_html.push_str(&format!(
            "<span class=\"{}\" title=\"Position: {}-{}, Rule: {}\">",
            css_class, start, end, rule
        ));
        debug_html.push_str(&html[start..end]);
        debug_html.push_str("</span>");

        last_pos = end;
    }
    debug_html.push_str(&html[last_pos..]);

    debug_html.push_str("\n</body>\n</html>");
    debug_html
}

/// Highlights every match of each named pattern in `html`.
pub fn annotate_matches(html: &str, patterns: &[(&str, &Regex)]) -> String {
    let mut highlights = Vec::new();
    for (rule, re) in patterns {
        for mat in re.find_iter(html) {
            highlights.push((mat.start(), mat.end(), *rule));
        }
    }
    annotate_html(html, &highlights)
}

/// Writes an annotated copy of a source document to `path`.
pub fn create_debug_html(html: &str, path: &Path, patterns: &[(&str, &Regex)]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, annotate_matches(html, patterns))?;
    tracing::debug!("Saved debug HTML to {}", path.display());
    Ok(())
}
