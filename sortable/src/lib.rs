//! # sortable-table
//!
//! Click-to-sort behavior for server-rendered HTML tables.
//!
//! This crate progressively enhances a `<table>` the server already
//! rendered: registered header cells get a `click` listener that re-orders
//! the existing body rows in place. The markup stays the source of the data;
//! the widget only supplies the ordering.
//!
//! ## Features
//!
//! - **Stable sorting** - rows with equal keys keep their document order in
//!   both directions
//! - **Server-aware** - a sort the server pre-marked with a class is picked
//!   up at construction and can be re-applied without a click
//! - **Live rows** - the row set is re-queried per sort, so rows added after
//!   construction are included
//! - **No clones** - existing row nodes are moved, never copied, so their
//!   listeners and state survive every sort
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sortable_table::{SortKey, SortableTable};
//!
//! let table = SortableTable::new("table#uploads").unwrap();
//! table
//!     .initialise_column_header("th.size", |row| {
//!         row.query_selector("td.size")
//!             .ok()
//!             .flatten()
//!             .and_then(|cell| cell.get_attribute("data-size"))
//!             .and_then(|raw| raw.parse::<f64>().ok())
//!             .map_or(SortKey::Missing, SortKey::Number)
//!     })
//!     .unwrap();
//!
//! // Re-apply a sort the server pre-marked with a `sort-descending` class.
//! if table.sorted_header().is_some() {
//!     table.re_sort_same_header();
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//!
//! - [`sort`] - the pure ordering model, natively testable
//! - [`header`] - one column header, its extractor and marker classes
//! - [`table`] - the widget itself: registration, clicks, row reordering
//! - [`error`] - structural failures of the expected markup

#![doc(html_root_url = "https://docs.rs/sortable-table/0.3.2")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod header;
pub mod sort;
pub mod table;

pub use error::TableError;
pub use header::{ColumnHeader, KeyFn, SORT_ASCENDING_CLASS, SORT_DESCENDING_CLASS};
pub use sort::{SortDirection, SortKey, SortState, next_direction, sorted_order};
pub use table::{HeaderId, SortableTable};
