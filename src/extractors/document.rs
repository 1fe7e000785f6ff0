// src/extractors/document.rs
use std::path::{Path, PathBuf};

use crate::extractors::fields::FieldExtractor;
use crate::extractors::parsed::ParsedDocument;
use crate::extractors::table::DetailTableExtractor;
use crate::models::DocumentRecord;
use crate::utils::error::{DocumentReadError, ExtractError};
use crate::utils::html_debug;

/// Turns one result page into a `DocumentRecord`.
pub struct DocumentProcessor {
    fields: FieldExtractor,
    table: DetailTableExtractor,
    debug_dir: Option<PathBuf>,
}

impl DocumentProcessor {
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            fields: FieldExtractor::new()?,
            table: DetailTableExtractor::new()?,
            debug_dir: None,
        })
    }

    /// Also write an annotated copy of every processed source into `dir`.
    pub fn with_debug_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.debug_dir = Some(dir.into());
        self
    }

    /// Decodes raw bytes as UTF-8 text and processes them.
    pub fn process(&self, file_name: String, bytes: Vec<u8>) -> Result<DocumentRecord, DocumentReadError> {
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(source) => return Err(DocumentReadError::Decode { file: file_name, source }),
        };

        if let Some(dir) = &self.debug_dir {
            let path = dir.join(format!("{}.annotated.html", file_name));
            if let Err(e) = html_debug::create_debug_html(&content, &path, &self.fields.patterns()) {
                tracing::warn!("Failed to create debug HTML for {}: {}", file_name, e);
            }
        }

        Ok(self.process_str(file_name, &content))
    }

    /// Extraction itself never fails: missing fields degrade to `None`, `0` or no rows.
    pub fn process_str(&self, file_name: String, content: &str) -> DocumentRecord {
        let doc = ParsedDocument::parse(content);
        let scalars = self.fields.extract_scalars(&doc);

        // The reported count gates detail extraction, even if a table is present
        let details = if scalars.result_count > 0 {
            self.table.extract_details(&doc)
        } else {
            Vec::new()
        };

        let record = DocumentRecord {
            file_name,
            tax_id: scalars.tax_id,
            result_count: scalars.result_count,
            details,
        };

        if record.count_mismatch() {
            tracing::warn!(
                "{}: page reports {} results but {} rows were extracted",
                record.file_name,
                record.result_count,
                record.details.len()
            );
        }

        tracing::debug!(
            "Processed {}: tax id {:?}, {} results, {} rows",
            record.file_name,
            record.tax_id,
            record.result_count,
            record.details.len()
        );

        record
    }
}

/// Final path component, used as the record's identifying name.
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_A: &str = r#"
        <html><body>
        <div>CPF ou CNPJ do Depositante: '12345678901234'</div>
        <div>Foram encontrados 2 processos que satisfazem a pesquisa.</div>
        <table>
          <tbody id="tituloContext">
            <tr><td>BR 10 2021 000001-0</td><td>05/01/2021</td><td>MÁQUINA</td><td>B65G 47/00</td></tr>
            <tr><td>BR 10 2021 000002-9</td><td>06/01/2021</td><td>SISTEMA</td><td>H04L 9/00</td></tr>
          </tbody>
        </table>
        </body></html>
    "#;

    fn processor() -> DocumentProcessor {
        DocumentProcessor::new().expect("default processor builds")
    }

    #[test]
    fn test_scenario_a_full_record() {
        let record = processor().process_str("empresa.html".to_string(), SCENARIO_A);
        assert_eq!(record.file_name, "empresa.html");
        assert_eq!(record.tax_id.as_deref(), Some("12345678901234"));
        assert_eq!(record.result_count, 2);
        assert_eq!(record.details.len(), 2);
        assert_eq!(record.details[1].title, "SISTEMA");
        assert!(!record.count_mismatch());
    }

    #[test]
    fn test_scenario_b_nothing_found() {
        let html = "<html><body><p>Nenhum resultado foi encontrado para a sua pesquisa.</p></body></html>";
        let record = processor().process_str("vazio.html".to_string(), html);
        assert_eq!(record.tax_id, None);
        assert_eq!(record.result_count, 0);
        assert!(record.details.is_empty());
        assert!(!record.has_details_section());
    }

    #[test]
    fn test_zero_count_gates_table() {
        let html = SCENARIO_A.replace("Foram encontrados 2 processos", "Foram encontrados 0 processos");
        let record = processor().process_str("zero.html".to_string(), &html);
        assert_eq!(record.result_count, 0);
        assert!(record.details.is_empty(), "Rows must not be surfaced when the page reports none");
    }

    #[test]
    fn test_missing_phrase_gates_table() {
        let html = SCENARIO_A.replace("Foram encontrados 2 processos", "");
        let record = processor().process_str("sem_frase.html".to_string(), &html);
        assert_eq!(record.result_count, 0);
        assert!(record.details.is_empty());
    }

    #[test]
    fn test_scenario_c_short_row_omitted() {
        let html = SCENARIO_A.replace(
            "<tr><td>BR 10 2021 000002-9</td>",
            "<tr><td>X</td><td>Y</td><td>Z</td></tr><tr><td>BR 10 2021 000002-9</td>",
        );
        let record = processor().process_str("curta.html".to_string(), &html);
        assert_eq!(record.details.len(), 2);
        assert_eq!(record.details[0].request_number, "BR 10 2021 000001-0");
        assert_eq!(record.details[1].request_number, "BR 10 2021 000002-9");
    }

    #[test]
    fn test_count_divergence_is_preserved() {
        let html = SCENARIO_A.replace("Foram encontrados 2 processos", "Foram encontrados 40 processos");
        let record = processor().process_str("paginado.html".to_string(), &html);
        assert_eq!(record.result_count, 40);
        assert_eq!(record.details.len(), 2);
        assert!(record.count_mismatch());
    }

    #[test]
    fn test_process_decodes_bytes() {
        let record = processor()
            .process("arquivo.html".to_string(), SCENARIO_A.as_bytes().to_vec())
            .unwrap();
        assert_eq!(record.file_name, "arquivo.html");
        assert_eq!(record.result_count, 2);
    }

    #[test]
    fn test_debug_dir_receives_annotated_copy() {
        let dir = tempfile::tempdir().unwrap();
        let processor = processor().with_debug_dir(dir.path());
        processor.process("a.html".to_string(), SCENARIO_A.as_bytes().to_vec()).unwrap();

        let annotated = std::fs::read_to_string(dir.path().join("a.html.annotated.html")).unwrap();
        assert!(annotated.contains("class=\"highlight-tax_id\""));
        assert!(annotated.contains("class=\"highlight-result_count\""));
    }

    #[test]
    fn test_file_name_of_path() {
        assert_eq!(file_name_of(Path::new("/tmp/PATENTES/empresa.html")), "empresa.html");
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let err = processor()
            .process("latin1.html".to_string(), vec![0x3c, 0x70, 0x3e, 0xe9, 0xff])
            .unwrap_err();
        assert!(matches!(err, DocumentReadError::Decode { .. }));
        assert!(err.to_string().contains("latin1.html"));
    }
}
