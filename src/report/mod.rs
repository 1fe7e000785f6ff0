// src/report/mod.rs
pub mod template;

use std::fmt::Write;

use crate::models::DocumentRecord;

/// Renders the searchable report. Pure function of `records`: the same input always
/// yields the same bytes.
pub fn render_report(records: &[DocumentRecord]) -> String {
    let mut html = String::with_capacity(8 * 1024 + records.len() * 512);

    html.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", template::TITLE);
    html.push_str(template::STYLE);
    html.push('\n');
    html.push_str(template::SCRIPT);
    html.push_str("\n</head>\n<body>\n<div class=\"container\">\n");

    let _ = writeln!(html, "<h1>{}</h1>", template::TITLE);
    let _ = writeln!(
        html,
        "<input type=\"text\" id=\"search-bar\" class=\"search-bar\" oninput=\"filterResults()\" placeholder=\"{}\">",
        template::SEARCH_PLACEHOLDER
    );
    let _ = writeln!(html, "<p id=\"no-results\">{}</p>", template::NO_RESULTS);

    for (index, record) in records.iter().enumerate() {
        render_record(&mut html, index, record);
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_record(html: &mut String, index: usize, record: &DocumentRecord) {
    let tax_id = record.tax_id.as_deref().unwrap_or(template::TAX_ID_PLACEHOLDER);
    let summary = format!(
        "<b>Arquivo:</b> {} &nbsp;|&nbsp; <b>CNPJ:</b> {} &nbsp;|&nbsp; <b>RESULTADO:</b> {}",
        escape_html(&record.file_name),
        escape_html(tax_id),
        record.result_count
    );

    if !record.has_details_section() {
        let _ = writeln!(html, "<div class=\"file-item\">\n  <div>{}</div>\n</div>", summary);
        return;
    }

    let dropdown_id = format!("dropdown-{}", index);
    let icon_id = format!("icon-{}", index);
    let _ = writeln!(
        html,
        "<div class=\"file-item expandable\" data-details=\"{d}\" onclick=\"toggleDropdown('{d}', '{i}')\">\n  <div>{s}</div>\n  <div id=\"{i}\" class=\"dropdown-icon\">&#9660;</div>\n</div>",
        d = dropdown_id,
        i = icon_id,
        s = summary
    );

    let _ = writeln!(html, "<div id=\"{}\" class=\"dropdown-content\">", dropdown_id);
    html.push_str("<table>\n<thead>\n<tr>");
    for header in template::DETAIL_HEADERS {
        let _ = write!(html, "<th>{}</th>", header);
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for detail in &record.details {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&detail.request_number),
            escape_html(&detail.filing_date),
            escape_html(&detail.title),
            escape_html(&detail.classification_code)
        );
    }
    html.push_str("</tbody>\n</table>\n</div>\n");
}

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
