//! Row shape of the `categories` table and its two-way mapping to the domain.
//!
//! The aggregate never exposes a constructor for storage; rows are turned
//! back into categories through [`Category::restore`], which revalidates.
//! A row that fails restoration is corrupt storage, not bad input, so it is
//! reported as a persistence failure.

use crate::domain::{Category, CategoryId, CategoryState, DomainError, Entity};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;

/// Columns selected whenever a full row is read
pub(crate) const CATEGORY_COLUMNS: &str =
    "id, name, description, is_active, created_at, updated_at, deleted_at";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl CategoryRow {
    /// Read a row selected with [`CATEGORY_COLUMNS`]
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(CategoryRow {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            is_active: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
            deleted_at: row.get(6)?,
        })
    }
}

/// Fixed-width UTC timestamp, so text order matches time order
pub(crate) fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(column: &str, value: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| DomainError::Persistence(format!("invalid {} '{}': {}", column, value, e)))
}

impl From<&Category> for CategoryRow {
    fn from(category: &Category) -> Self {
        CategoryRow {
            id: category.id().to_string(),
            name: category.name().to_string(),
            description: category.description().unwrap_or_default().to_string(),
            is_active: category.is_active(),
            created_at: format_timestamp(category.created_at()),
            updated_at: format_timestamp(category.updated_at()),
            deleted_at: category.deleted_at().map(format_timestamp),
        }
    }
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        let id: CategoryId = row
            .id
            .parse()
            .map_err(|e| DomainError::Persistence(format!("invalid id '{}': {}", row.id, e)))?;

        let state = CategoryState {
            id,
            name: row.name,
            description: Some(row.description),
            is_active: row.is_active,
            created_at: parse_timestamp("created_at", &row.created_at)?,
            updated_at: parse_timestamp("updated_at", &row.updated_at)?,
            deleted_at: row
                .deleted_at
                .as_deref()
                .map(|value| parse_timestamp("deleted_at", value))
                .transpose()?,
        };

        Category::restore(state).map_err(corrupt_row)
    }
}

fn corrupt_row(error: DomainError) -> DomainError {
    match error {
        DomainError::Notification { message, errors } => {
            let reasons: Vec<&str> = errors.iter().map(|e| e.message()).collect();
            DomainError::Persistence(format!("{}: {}", message, reasons.join("; ")))
        }
        other => other,
    }
}
