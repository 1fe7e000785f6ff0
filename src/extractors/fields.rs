// src/extractors/fields.rs

// --- Imports ---
use crate::extractors::parsed::ParsedDocument;
use crate::utils::error::ExtractError;
use regex::Regex;

// --- Rule Definitions ---
// Each scalar field is a literal label followed by a value pattern with one capture group.
// Labels are escaped, so only the value pattern is a regex.
const TAX_ID_LABEL: &str = "CPF ou CNPJ do Depositante:";
const TAX_ID_VALUE: &str = r"\s*'([0-9]{14})'";

const RESULT_COUNT_LABEL: &str = "Foram encontrados";
const RESULT_COUNT_VALUE: &str = r"\s+([0-9]+)\s+processos";

/// A `label -> value` micro-parser over flattened document text.
pub struct FieldRule<T> {
    name: &'static str,
    regex: Regex,
    convert: fn(&str) -> Option<T>,
}

impl<T> FieldRule<T> {
    pub fn new(
        name: &'static str,
        label: &str,
        value_pattern: &str,
        convert: fn(&str) -> Option<T>,
    ) -> Result<Self, ExtractError> {
        let pattern = format!("{}{}", regex::escape(label), value_pattern);
        let regex = Regex::new(&pattern).map_err(|e| ExtractError::InvalidRule {
            rule: name.to_string(),
            reason: e.to_string(),
        })?;

        if regex.captures_len() < 2 {
            return Err(ExtractError::InvalidRule {
                rule: name.to_string(),
                reason: "value pattern must contain a capture group".to_string(),
            });
        }

        Ok(Self { name, regex, convert })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Full pattern (label and value), used to highlight matches in debug output.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// First match in `text`, converted. `None` when the label is missing, the value
    /// does not follow the expected shape, or conversion fails.
    pub fn apply(&self, text: &str) -> Option<T> {
        let captures = self.regex.captures(text)?;
        let raw = captures.get(1)?.as_str();
        let value = (self.convert)(raw);
        if value.is_none() {
            tracing::debug!("Rule '{}' matched '{}' but conversion failed", self.name, raw);
        }
        value
    }
}

/// Scalar fields read from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarFields {
    pub tax_id: Option<String>,
    pub result_count: u32,
}

/// Extracts the depositor's tax id and the reported result count.
pub struct FieldExtractor {
    tax_id: FieldRule<String>,
    result_count: FieldRule<u32>,
}

impl FieldExtractor {
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            tax_id: FieldRule::new("tax_id", TAX_ID_LABEL, TAX_ID_VALUE, |s| Some(s.to_string()))?,
            result_count: FieldRule::new("result_count", RESULT_COUNT_LABEL, RESULT_COUNT_VALUE, |s| {
                s.parse::<u32>().ok()
            })?,
        })
    }

    pub fn extract_tax_id(&self, doc: &ParsedDocument) -> Option<String> {
        self.tax_id_from_text(&doc.flatten_text())
    }

    /// 0 when the phrase is absent, which cannot be told apart from a real zero.
    pub fn extract_result_count(&self, doc: &ParsedDocument) -> u32 {
        self.result_count_from_text(&doc.flatten_text())
    }

    /// Both scalars from a single flattening of the document.
    pub fn extract_scalars(&self, doc: &ParsedDocument) -> ScalarFields {
        let text = doc.flatten_text();
        ScalarFields {
            tax_id: self.tax_id_from_text(&text),
            result_count: self.result_count_from_text(&text),
        }
    }

    pub fn tax_id_from_text(&self, text: &str) -> Option<String> {
        let tax_id = self.tax_id.apply(text);
        if tax_id.is_none() {
            tracing::debug!("Field '{}' not found", self.tax_id.name());
        }
        tax_id
    }

    pub fn result_count_from_text(&self, text: &str) -> u32 {
        self.result_count.apply(text).unwrap_or_else(|| {
            tracing::debug!("Field '{}' not found, defaulting to 0", self.result_count.name());
            0
        })
    }

    /// Rule name and pattern pairs, in a fixed order.
    pub fn patterns(&self) -> Vec<(&'static str, &Regex)> {
        vec![
            (self.tax_id.name(), self.tax_id.regex()),
            (self.result_count.name(), self.result_count.regex()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> FieldExtractor {
        FieldExtractor::new().expect("default rules compile")
    }

    #[test]
    fn test_tax_id_found() {
        let text = "Pesquisa\nCPF ou CNPJ do Depositante: '12345678901234'\nmais texto";
        assert_eq!(extractor().tax_id_from_text(text), Some("12345678901234".to_string()));
    }

    #[test]
    fn test_tax_id_from_parsed_markup() {
        let doc = ParsedDocument::parse(
            "<html><body><font>CPF ou CNPJ do Depositante: <b>'98765432109876'</b></font></body></html>",
        );
        assert_eq!(extractor().extract_tax_id(&doc), Some("98765432109876".to_string()));
    }

    #[test]
    fn test_tax_id_misses() {
        let ex = extractor();
        // Label missing
        assert_eq!(ex.tax_id_from_text("'12345678901234'"), None);
        // Too few digits
        assert_eq!(ex.tax_id_from_text("CPF ou CNPJ do Depositante: '1234567890123'"), None);
        // Too many digits
        assert_eq!(ex.tax_id_from_text("CPF ou CNPJ do Depositante: '123456789012345'"), None);
        // Different quoting convention
        assert_eq!(ex.tax_id_from_text("CPF ou CNPJ do Depositante: \"12345678901234\""), None);
        assert_eq!(ex.tax_id_from_text("CPF ou CNPJ do Depositante: 12345678901234"), None);
        // Formatted value is not a bare 14-digit token
        assert_eq!(ex.tax_id_from_text("CPF ou CNPJ do Depositante: '12.345.678/0001-34'"), None);
    }

    #[test]
    fn test_result_count() {
        let ex = extractor();
        assert_eq!(ex.result_count_from_text("Foram encontrados 2 processos"), 2);
        assert_eq!(ex.result_count_from_text("Foram encontrados 137 processos para a pesquisa"), 137);
        assert_eq!(ex.result_count_from_text("Foram encontrados 0 processos"), 0);
    }

    #[test]
    fn test_result_count_defaults_to_zero() {
        let ex = extractor();
        assert_eq!(ex.result_count_from_text("Nenhum resultado foi encontrado"), 0);
        assert_eq!(ex.result_count_from_text("Foram encontrados muitos processos"), 0);
        // Does not fit in u32
        assert_eq!(ex.result_count_from_text("Foram encontrados 99999999999 processos"), 0);
    }

    #[test]
    fn test_extract_scalars_from_document() {
        let doc = ParsedDocument::parse(
            r#"<html><body>
                <div>CPF ou CNPJ do Depositante: '12345678901234'</div>
                <div>Foram encontrados <b>5</b> processos que satisfazem a pesquisa.</div>
            </body></html>"#,
        );
        let scalars = extractor().extract_scalars(&doc);
        assert_eq!(scalars.tax_id.as_deref(), Some("12345678901234"));
        assert_eq!(scalars.result_count, 5);
    }

    #[test]
    fn test_rule_without_capture_group_is_rejected() {
        let result = FieldRule::new("bad", "Label:", r"\s*[0-9]+", |s| Some(s.to_string()));
        assert!(matches!(result, Err(ExtractError::InvalidRule { .. })));
    }

    #[test]
    fn test_rule_with_invalid_pattern_is_rejected() {
        let result = FieldRule::new("bad", "Label:", r"([0-9]+", |s| Some(s.to_string()));
        assert!(matches!(result, Err(ExtractError::InvalidRule { .. })));
    }

    #[test]
    fn test_label_is_literal() {
        // The '?' in the label must not act as a regex quantifier
        let rule = FieldRule::new("q", "Total?", r"\s*([0-9]+)", |s| s.parse::<u32>().ok()).unwrap();
        assert_eq!(rule.apply("Total? 7"), Some(7));
        assert_eq!(rule.apply("Tota 7"), None);
    }
}
