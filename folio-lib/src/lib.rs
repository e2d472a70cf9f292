//! Table engine for the folio dashboard
//!
//! Owns the state behind the dashboard's interactive table: row order,
//! selection, sorting, filtering, pagination, drag reordering and the
//! row detail drawer. Rendering is left to the caller.

pub mod config;
pub mod detail;
pub mod error;
pub mod model;
pub mod notify;
pub mod query;
pub mod reorder;
pub mod table;

pub use config::TableConfig;
pub use model::Row;
pub use table::TableState;
