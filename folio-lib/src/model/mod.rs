//! Dashboard table records.
//!
//! [`Row`] is the record shown in the dashboard table. Rows arrive from the
//! caller as JSON and are shape-checked once, at the boundary, by
//! [`parse_rows`]. After that the table engine trusts them.

mod options;
mod row;
mod status;

pub use options::{REVIEWERS, SECTION_TYPES, UNASSIGNED_REVIEWER};
pub use row::Row;
pub use status::{Status, UnknownStatus};

use crate::config::TableConfig;
use crate::error::{ShapeError, TableError};
use crate::table::TableState;

/// Parses a JSON array of rows.
///
/// Every element must carry all row fields with the right types. Extra fields
/// are ignored. The first malformed element fails the whole batch, so no
/// partial row set is ever returned.
///
/// # Example
///
/// ```
/// use folio_lib::model::parse_rows;
///
/// let rows = parse_rows(r#"[{
///     "id": 1, "header": "Cover page", "type": "Cover Page",
///     "status": "Done", "target": "18", "limit": "5",
///     "reviewer": "Eddie Lake"
/// }]"#).unwrap();
/// assert_eq!(rows[0].header, "Cover page");
/// ```
pub fn parse_rows(json: &str) -> Result<Vec<Row>, ShapeError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let serde_json::Value::Array(items) = value else {
        return Err(ShapeError::NotAnArray {
            actual: json_kind(&value),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| serde_json::from_value(item).map_err(|e| ShapeError::row(index, e)))
        .collect()
}

/// Creates the dashboard table over `rows` with the dashboard columns.
pub fn dashboard_table(rows: Vec<Row>, config: &TableConfig) -> Result<TableState<Row>, TableError> {
    TableState::with_config(Row::columns(), rows, config)
}

/// Returns the distinct assigned reviewers in first-seen order.
///
/// Rows still carrying the [`UNASSIGNED_REVIEWER`] placeholder are skipped.
pub fn assigned_reviewers<'a>(rows: impl IntoIterator<Item = &'a Row>) -> Vec<&'a str> {
    let mut names: Vec<&str> = Vec::new();
    for reviewer in rows.into_iter().filter_map(Row::assigned_reviewer) {
        if !names.contains(&reviewer) {
            names.push(reviewer);
        }
    }
    names
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
