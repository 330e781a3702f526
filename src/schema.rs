//! Column tables for the five target tables.
//!
//! Each table is an ordered, fixed list of [`Column`]s. The column order is
//! the order of the `INSERT` column list and of every value tuple, and each
//! column carries the default used when a record lacks the field.

use crate::entity::{EntityKind, Record};
use crate::sql::{escape_sql_string, escape_str, is_falsy, SqlLiteral};

/// How a column is rendered and what it falls back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Quoted, escaped text; the default is used when the field is missing
    Text { default: &'static str },
    /// Bare `true`/`false` from a truthy check; missing is `false`
    Flag,
    /// Quoted, escaped text, or bare `NULL` when missing or falsy
    NullableText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn text(name: &'static str) -> Self {
        Self::text_or(name, "")
    }

    pub const fn text_or(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Text { default },
        }
    }

    pub const fn flag(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Flag,
        }
    }

    pub const fn nullable(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::NullableText,
        }
    }

    /// Render this column's value for one record.
    pub fn literal(&self, record: &Record) -> SqlLiteral {
        let value = record.get(self.name);
        match self.kind {
            ColumnKind::Text { default } => match value {
                Some(v) => SqlLiteral::Quoted(escape_sql_string(Some(v))),
                None => SqlLiteral::Quoted(escape_str(default)),
            },
            ColumnKind::Flag => SqlLiteral::Bool(!is_falsy(value)),
            ColumnKind::NullableText => {
                if is_falsy(value) {
                    SqlLiteral::Null
                } else {
                    SqlLiteral::Quoted(escape_sql_string(value))
                }
            }
        }
    }
}

pub const CATEGORIES: &[Column] = &[
    Column::text("id"),
    Column::text("name"),
    Column::text("description"),
    Column::text("created_at"),
    Column::text("updated_at"),
];

pub const USERS: &[Column] = &[
    Column::text("id"),
    Column::text("name"),
    Column::text("email"),
    Column::text_or("role", DEFAULT_ROLE),
    Column::text("phone"),
    Column::text("created_at"),
    Column::text("updated_at"),
];

pub const CANDIDATES: &[Column] = &[
    Column::text("id"),
    Column::text("name"),
    Column::text("bio"),
    Column::text("image_url"),
    Column::text("audio_file"),
    Column::text("candidate_song"),
    Column::text("category_id"),
    Column::text("created_at"),
    Column::text("updated_at"),
];

pub const VOTES: &[Column] = &[
    Column::text("id"),
    Column::text("user_id"),
    Column::text("category_id"),
    Column::text("candidate_id"),
    Column::text("created_at"),
    Column::text("updated_at"),
];

pub const NOTIFICATIONS: &[Column] = &[
    Column::text("id"),
    Column::text("user_id"),
    Column::text("title"),
    Column::text("message"),
    Column::text_or("type", DEFAULT_NOTIFICATION_TYPE),
    Column::flag("read"),
    Column::nullable("admin_message_id"),
    Column::text("created_at"),
    Column::text("updated_at"),
];

pub const DEFAULT_ROLE: &str = "VOTER";
pub const DEFAULT_NOTIFICATION_TYPE: &str = "info";

/// Column table for an entity kind
pub fn columns(kind: EntityKind) -> &'static [Column] {
    match kind {
        EntityKind::Categories => CATEGORIES,
        EntityKind::Users => USERS,
        EntityKind::Candidates => CANDIDATES,
        EntityKind::Votes => VOTES,
        EntityKind::Notifications => NOTIFICATIONS,
    }
}
