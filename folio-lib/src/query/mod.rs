//! Query primitives for the table engine.
//!
//! - [`FilterValue`] / [`ColumnFilters`] - per-column filters, AND-combined
//! - [`SortSpec`] - ordered sort keys with alphanumeric comparison
//! - [`Pagination`] - page cursor with clamping

mod filter;
mod order;
mod page;

pub use filter::ColumnFilters;
pub use filter::FilterValue;
pub use order::Direction;
pub use order::SortKey;
pub use order::SortSpec;
pub use order::alphanumeric_cmp;
pub use page::Pagination;
