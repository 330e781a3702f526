//! SQL text building blocks.
//!
//! Values are never spliced into SQL text directly. A field becomes an
//! [`EscapedText`] through [`escape_sql_string`], is wrapped in a
//! [`SqlLiteral`], and literals are collected into [`ValueTuple`]s and an
//! [`InsertStatement`]. The escaper is the only way to obtain an
//! `EscapedText`, so every quoted fragment is escaped exactly once.

use serde_json::Value;
use std::fmt;

/// Text that has been through the SQL string escaper.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EscapedText(String);

impl EscapedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EscapedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a JSON value counts as "false" for the permissive field rules.
///
/// Missing, `null`, `false`, `""`, zero, `[]` and `{}` are all falsy.
pub fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
    }
}

/// Text form of a field value: strings verbatim, everything else as JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Escape a field value for embedding inside a single-quoted SQL literal.
///
/// Falsy values become the empty fragment. Anything else is converted to text
/// and every `'` is doubled; no other character is touched.
pub fn escape_sql_string(value: Option<&Value>) -> EscapedText {
    if is_falsy(value) {
        return EscapedText::default();
    }
    match value {
        Some(v) => escape_str(&value_text(v)),
        None => EscapedText::default(),
    }
}

/// Escape plain text (column defaults, configuration values).
pub fn escape_str(text: &str) -> EscapedText {
    EscapedText(text.replace('\'', "''"))
}

/// Flatten text for use after a `--` comment marker.
///
/// Line breaks would end the comment and let data leak into the script.
pub fn comment_text(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

/// One rendered value inside a value tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlLiteral {
    /// `'...'`
    Quoted(EscapedText),
    /// Bare `true` / `false`
    Bool(bool),
    /// Bare `NULL`
    Null,
}

impl fmt::Display for SqlLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlLiteral::Quoted(text) => write!(f, "'{}'", text),
            SqlLiteral::Bool(b) => write!(f, "{}", b),
            SqlLiteral::Null => f.write_str("NULL"),
        }
    }
}

/// A parenthesized, comma-separated list of literals for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueTuple(Vec<SqlLiteral>);

impl ValueTuple {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, literal: SqlLiteral) {
        self.0.push(literal);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<SqlLiteral> for ValueTuple {
    fn from_iter<I: IntoIterator<Item = SqlLiteral>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ValueTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, literal) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", literal)?;
        }
        f.write_str(")")
    }
}

/// A multi-row `INSERT INTO ... VALUES` statement.
///
/// Renders without a trailing newline; rows are separated by `,\n` and the
/// statement ends with `;`.
#[derive(Debug, Clone)]
pub struct InsertStatement<'a> {
    table: &'a str,
    columns: Vec<&'a str>,
    rows: Vec<ValueTuple>,
}

impl<'a> InsertStatement<'a> {
    pub fn new(table: &'a str, columns: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            table,
            columns: columns.into_iter().collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: ValueTuple) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for InsertStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "INSERT INTO {} ({}) VALUES",
            self.table,
            self.columns.join(", ")
        )?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(",\n")?;
            }
            write!(f, "{}", row)?;
        }
        f.write_str(";")
    }
}
