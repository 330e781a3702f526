//! Statistics footer of a generated script.

use indexmap::IndexMap;

use crate::document::ExportDocument;
use crate::entity::{EntityKind, Record};
use crate::schema::DEFAULT_ROLE;
use crate::sql::{comment_text, is_falsy, value_text};

/// Key used for votes without a category id
pub const NO_CATEGORY: &str = "(none)";

/// Record counts and breakdowns computed from an export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Records per collection, 0 for absent collections
    pub totals: IndexMap<EntityKind, usize>,
    /// Users per role, in first-seen order
    pub users_by_role: IndexMap<String, usize>,
    /// Votes per category id, in first-seen order
    pub votes_by_category: IndexMap<String, usize>,
}

impl ConversionSummary {
    pub fn from_document(doc: &ExportDocument) -> Self {
        let totals = EntityKind::STATISTICS_ORDER
            .into_iter()
            .map(|kind| (kind, doc.count(kind)))
            .collect();

        Self {
            totals,
            users_by_role: tally(doc.collection(EntityKind::Users), |r| {
                role_key(r).unwrap_or_else(|| DEFAULT_ROLE.to_string())
            }),
            votes_by_category: tally(doc.collection(EntityKind::Votes), |r| {
                field_key(r, "category_id").unwrap_or_else(|| NO_CATEGORY.to_string())
            }),
        }
    }

    pub fn total(&self, kind: EntityKind) -> usize {
        self.totals.get(&kind).copied().unwrap_or(0)
    }

    /// Total records across all collections.
    pub fn record_count(&self) -> usize {
        self.totals.values().sum()
    }

    /// Render the footer block, optionally with the role/category breakdowns.
    pub fn render(&self, target: &str, breakdown: bool) -> String {
        let mut out = String::new();

        out.push_str("-- ========================================\n");
        out.push_str("-- STATISTICS\n");
        out.push_str("-- ========================================\n");
        for kind in EntityKind::STATISTICS_ORDER {
            out.push_str(&format!("-- Total {}: {}\n", kind.label(), self.total(kind)));
        }

        if breakdown {
            render_breakdown(&mut out, "Users by role", &self.users_by_role);
            render_breakdown(&mut out, "Votes by category", &self.votes_by_category);
        }

        out.push('\n');
        out.push_str("-- Conversion completed successfully\n");
        out.push_str(&format!("-- Ready for import into {}\n", comment_text(target)));

        out
    }
}

fn render_breakdown(out: &mut String, title: &str, counts: &IndexMap<String, usize>) {
    if counts.is_empty() {
        return;
    }
    out.push_str(&format!("-- {}:\n", title));
    for (key, count) in counts {
        out.push_str(&format!("--   {}: {}\n", comment_text(key), count));
    }
}

fn tally<F>(records: Option<&[Record]>, key: F) -> IndexMap<String, usize>
where
    F: Fn(&Record) -> String,
{
    let mut counts = IndexMap::new();
    for record in records.unwrap_or_default() {
        *counts.entry(key(record)).or_insert(0) += 1;
    }
    counts
}

// Mirrors the users table: only a missing role falls back to the default.
fn role_key(record: &Record) -> Option<String> {
    record.get("role").map(|v| {
        if is_falsy(Some(v)) {
            String::new()
        } else {
            value_text(v)
        }
    })
}

fn field_key(record: &Record, field: &str) -> Option<String> {
    let value = record.get(field);
    if is_falsy(value) {
        None
    } else {
        value.map(value_text)
    }
}
