//! Assembly of the full import script and the file-to-file pipeline.
//!
//! `Read -> Parse -> Convert (x5) -> Assemble -> Write`. The script is built
//! completely in memory before the single write, so a failure at any step
//! leaves no output file behind.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

use crate::config::ConverterConfig;
use crate::converter::convert_collection;
use crate::document::ExportDocument;
use crate::error::ConvertError;
use crate::fs_utils::{read_input, write_output, write_output_creating_dirs};
use crate::sql::comment_text;
use crate::statistics::ConversionSummary;

/// Substring replaced in the input path to name the output
pub const INPUT_SUFFIX: &str = ".json";
pub const OUTPUT_SUFFIX: &str = "_converted.sql";

/// Metadata written at the top of a script.
#[derive(Debug, Clone)]
pub struct ScriptHeader {
    pub source: String,
    pub generated_at: DateTime<Local>,
}

impl ScriptHeader {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            generated_at: Local::now(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "-- AWARDS DATA IMPORT SCRIPT\n\
             -- Generated at: {}\n\
             -- Source file: {}\n\
             \n\
             -- ========================================\n\
             -- DATA IMPORT\n\
             -- ========================================\n\
             \n",
            self.generated_at.format("%Y-%m-%dT%H:%M:%S%.6f"),
            comment_text(&self.source)
        )
    }
}

/// Render the complete import script for a decoded export.
pub fn render_script(
    doc: &ExportDocument,
    header: &ScriptHeader,
    summary: &ConversionSummary,
    config: &ConverterConfig,
) -> String {
    let mut sql = header.render();

    // Only collections present in the input get a block (or placeholder).
    for (kind, records) in doc.present() {
        sql.push_str(&convert_collection(kind, Some(records)));
    }

    sql.push_str(&summary.render(&config.target, config.breakdown));
    sql
}

/// Output path for an input path.
///
/// Every `.json` in the path is replaced, not only a trailing extension, so
/// `exports.json.d/data.json` maps to `exports_converted.sql.d/data_converted.sql`.
/// A path without `.json` gets the suffix appended so the input is never
/// overwritten. The renamed directory is not created: writing to it fails.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let raw = input.to_string_lossy();
    if raw.contains(INPUT_SUFFIX) {
        PathBuf::from(raw.replace(INPUT_SUFFIX, OUTPUT_SUFFIX))
    } else {
        PathBuf::from(format!("{}{}", raw, OUTPUT_SUFFIX))
    }
}

/// Outcome of a successful [`convert_file`] run.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub output: PathBuf,
    pub summary: ConversionSummary,
    pub bytes_written: usize,
}

/// Convert the configured input file and write the script.
pub fn convert_file(config: &ConverterConfig) -> Result<ConversionReport, ConvertError> {
    let input = &config.input;
    let output = config
        .output
        .clone()
        .unwrap_or_else(|| derive_output_path(input));

    let json = read_input(input)?;
    let doc = ExportDocument::from_json_str(&json)?;
    tracing::info!(
        "decoded {} with {} collections",
        input.display(),
        doc.present().count()
    );

    let summary = ConversionSummary::from_document(&doc);
    let header = ScriptHeader::new(input.display().to_string());
    let sql = render_script(&doc, &header, &summary, config);

    // Derived paths are written as-is; only an explicit output gets its
    // directories created.
    if config.output.is_some() {
        write_output_creating_dirs(&output, &sql)?;
    } else {
        write_output(&output, &sql)?;
    }
    tracing::info!(
        "wrote {} records to {} ({} bytes)",
        summary.record_count(),
        output.display(),
        sql.len()
    );

    Ok(ConversionReport {
        output,
        summary,
        bytes_written: sql.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_header() -> ScriptHeader {
        ScriptHeader {
            source: "backup.json".to_string(),
            generated_at: Local.with_ymd_and_hms(2026, 2, 6, 10, 30, 0).unwrap(),
        }
    }

    fn render(json: &str) -> String {
        let doc = ExportDocument::from_json_str(json).unwrap();
        let summary = ConversionSummary::from_document(&doc);
        let config = ConverterConfig::new("backup.json").with_target("Supabase");
        render_script(&doc, &fixed_header(), &summary, &config)
    }

    #[test]
    fn test_header_rendering() {
        let header = fixed_header().render();

        assert!(header.starts_with("-- AWARDS DATA IMPORT SCRIPT\n"));
        assert!(header.contains("-- Generated at: 2026-02-06T10:30:00.000000\n"));
        assert!(header.contains("-- Source file: backup.json\n"));
        assert!(header.ends_with("-- DATA IMPORT\n-- ========================================\n\n"));
    }

    #[test]
    fn test_single_category_script() {
        let sql = render(r#"{"categories":[{"id":"c1","name":"Best Song"}]}"#);

        assert!(sql.contains(
            "INSERT INTO categories (id, name, description, created_at, updated_at) VALUES\n\
             ('c1', 'Best Song', '', '', '');\n\n"
        ));
        assert!(sql.contains("-- Total Categories: 1\n"));
        for label in ["Users", "Candidates", "Votes", "Notifications"] {
            assert!(sql.contains(&format!("-- Total {}: 0\n", label)));
        }
        assert!(!sql.contains("No users to import"));
    }

    #[test]
    fn test_blocks_follow_dependency_order() {
        let sql = render(
            r#"{
                "notifications": [{"id": "n1"}],
                "votes": [{"id": "v1"}],
                "candidates": [],
                "users": [{"id": "u1"}],
                "categories": [{"id": "c1"}]
            }"#,
        );

        let positions: Vec<usize> = [
            "INSERT INTO categories",
            "INSERT INTO users",
            "-- No candidates to import",
            "INSERT INTO votes",
            "INSERT INTO notifications",
            "-- STATISTICS",
        ]
        .iter()
        .map(|needle| sql.find(needle).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!sql.contains("INSERT INTO candidates"));
    }

    #[test]
    fn test_derive_output_path_replaces_suffix() {
        assert_eq!(
            derive_output_path(Path::new("bankass_data_backup_2026-02-06.json")),
            PathBuf::from("bankass_data_backup_2026-02-06_converted.sql")
        );
        assert_eq!(
            derive_output_path(Path::new("/tmp/exports/data.json")),
            PathBuf::from("/tmp/exports/data_converted.sql")
        );
    }

    #[test]
    fn test_derive_output_path_replaces_every_occurrence() {
        assert_eq!(
            derive_output_path(Path::new("dumps.json.d/data.json")),
            PathBuf::from("dumps_converted.sql.d/data_converted.sql")
        );
    }

    #[test]
    fn test_derive_output_path_never_returns_input() {
        assert_eq!(
            derive_output_path(Path::new("export.txt")),
            PathBuf::from("export.txt_converted.sql")
        );
    }
}
