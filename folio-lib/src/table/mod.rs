//! Interactive table engine.
//!
//! [`TableState`] is the single source of truth for one table: stored row
//! order, selection, sort, column filters, column visibility and the page
//! cursor. Everything the presentation layer draws is derived from it on
//! demand:
//!
//! ```text
//! rows (stored order) -> filter (AND) -> stable sort -> page slice
//! ```
//!
//! Rows are identified by [`TableRow::key`], never by position.

mod column;
mod selection;
mod state;

use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;

pub use column::Column;
pub use selection::{PageSelection, Selection};
pub use state::TableState;

/// Trait for records held by a [`TableState`].
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use folio_lib::table::TableRow;
///
/// #[derive(Clone)]
/// struct Account {
///     id: u32,
///     name: String,
/// }
///
/// impl TableRow for Account {
///     type Key = u32;
///
///     fn key(&self) -> u32 {
///         self.id
///     }
///
///     fn cell(&self, column_id: &str) -> Option<Cow<'_, str>> {
///         match column_id {
///             "name" => Some(Cow::Borrowed(&self.name)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRow: Clone {
    /// The key type used to identify this row.
    type Key: Clone + Eq + Hash + fmt::Display + fmt::Debug;

    /// Return the unique key for this row.
    fn key(&self) -> Self::Key;

    /// Return the text of a cell, or `None` if the row has no such column.
    ///
    /// Filtering and sorting both work on this text.
    fn cell(&self, column_id: &str) -> Option<Cow<'_, str>>;

    /// Human-readable name used in notifications.
    fn label(&self) -> String {
        self.key().to_string()
    }
}
