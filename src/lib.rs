//! # awards-import: JSON export to SQL import script
//!
//! Converts a JSON export of an awards/voting application (categories, users,
//! candidates, votes, notifications) into a single SQL script of multi-row
//! `INSERT` statements, ready to paste into a database SQL editor.
//!
//! ## Example
//!
//! ```
//! use awards_import::{convert_collection, EntityKind, ExportDocument};
//!
//! let doc = ExportDocument::from_json_str(
//!     r#"{"categories": [{"id": "c1", "name": "Best Song"}]}"#,
//! ).unwrap();
//!
//! let sql = convert_collection(
//!     EntityKind::Categories,
//!     doc.collection(EntityKind::Categories),
//! );
//! assert!(sql.contains("('c1', 'Best Song', '', '', '')"));
//! ```
//!
//! Records are read permissively: missing fields fall back to the per-table
//! defaults in [`schema`], and only the columns listed there are emitted.

// Core modules
pub mod entity;
pub mod schema;
pub mod sql;
pub mod converter;
pub mod document;
pub mod statistics;

// Pipeline
pub mod config;
pub mod error;
pub mod fs_utils;
pub mod script;

// Re-export key types
pub use entity::{EntityKind, Record};
pub use schema::{Column, ColumnKind};
pub use sql::{escape_sql_string, EscapedText, InsertStatement, SqlLiteral, ValueTuple};
pub use converter::{
    convert_candidates, convert_categories, convert_collection, convert_notifications,
    convert_users, convert_votes,
};
pub use document::ExportDocument;
pub use statistics::ConversionSummary;
pub use config::ConverterConfig;
pub use error::ConvertError;
pub use script::{convert_file, derive_output_path, render_script, ConversionReport, ScriptHeader};
