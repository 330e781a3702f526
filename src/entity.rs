//! Entity kinds and records of an awards export.
//!
//! An export holds up to five collections of records. Records are read
//! permissively: every field is optional and nothing is validated.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The five collections an export can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Categories,
    Users,
    Candidates,
    Votes,
    Notifications,
}

impl EntityKind {
    /// All kinds in foreign-key dependency order.
    ///
    /// Categories come before candidates and votes, users before votes and
    /// notifications.
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Categories,
        EntityKind::Users,
        EntityKind::Candidates,
        EntityKind::Votes,
        EntityKind::Notifications,
    ];

    /// Order of the totals in the statistics footer.
    pub const STATISTICS_ORDER: [EntityKind; 5] = [
        EntityKind::Users,
        EntityKind::Categories,
        EntityKind::Candidates,
        EntityKind::Votes,
        EntityKind::Notifications,
    ];

    /// Top-level key of this collection in the export document
    pub fn key(&self) -> &'static str {
        match self {
            EntityKind::Categories => "categories",
            EntityKind::Users => "users",
            EntityKind::Candidates => "candidates",
            EntityKind::Votes => "votes",
            EntityKind::Notifications => "notifications",
        }
    }

    /// Target table name
    pub fn table(&self) -> &'static str {
        // Collection keys and table names coincide for every kind.
        self.key()
    }

    /// Capitalized plural used in the statistics footer
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Categories => "Categories",
            EntityKind::Users => "Users",
            EntityKind::Candidates => "Candidates",
            EntityKind::Votes => "Votes",
            EntityKind::Notifications => "Notifications",
        }
    }

    /// Look a kind up by its collection key (case-sensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One exported row: field name to JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Field value, treating JSON `null` the same as a missing field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|v| !v.is_null())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
