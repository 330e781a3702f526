//! Per-entity conversion of a record collection into an SQL block.

use crate::entity::{EntityKind, Record};
use crate::schema;
use crate::sql::{InsertStatement, ValueTuple};

/// Comment emitted instead of an `INSERT` when there is nothing to load.
pub fn placeholder(kind: EntityKind) -> String {
    format!("-- No {} to import\n\n", kind.key())
}

/// Build the `INSERT` statement for a collection, one tuple per record.
pub fn insert_statement(kind: EntityKind, records: &[Record]) -> InsertStatement<'static> {
    let columns = schema::columns(kind);
    let mut stmt = InsertStatement::new(kind.table(), columns.iter().map(|c| c.name));

    for record in records {
        let row: ValueTuple = columns.iter().map(|c| c.literal(record)).collect();
        stmt.push_row(row);
    }

    stmt
}

/// Convert one collection into its SQL block.
///
/// `None` and an empty slice both yield the placeholder comment.
pub fn convert_collection(kind: EntityKind, records: Option<&[Record]>) -> String {
    let records = match records {
        Some(records) if !records.is_empty() => records,
        _ => {
            tracing::debug!("no {} records, emitting placeholder", kind);
            return placeholder(kind);
        }
    };

    let stmt = insert_statement(kind, records);
    tracing::debug!("converted {} {} records", stmt.row_count(), kind);

    format!("-- Import {}\n{}\n\n", kind.key(), stmt)
}

pub fn convert_categories(records: Option<&[Record]>) -> String {
    convert_collection(EntityKind::Categories, records)
}

pub fn convert_users(records: Option<&[Record]>) -> String {
    convert_collection(EntityKind::Users, records)
}

pub fn convert_candidates(records: Option<&[Record]>) -> String {
    convert_collection(EntityKind::Candidates, records)
}

pub fn convert_votes(records: Option<&[Record]>) -> String {
    convert_collection(EntityKind::Votes, records)
}

pub fn convert_notifications(records: Option<&[Record]>) -> String {
    convert_collection(EntityKind::Notifications, records)
}
