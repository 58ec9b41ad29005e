//! Client-side table processing for the customer portal.
//!
//! Quotation, contract and vessel-schedule tables all run through the same
//! pipeline:
//! - [`filter`] — case-insensitive substring search over chosen fields
//! - [`sort`] — stable sort using [`compare`], typed as date, number or text
//! - [`paginate`] — 1-based page slicing with totals for the pager
//! - [`export_to_delimited_file`] — CSV export through a [`FileSink`]
//!
//! Records are plain `serde_json::Value`s as delivered by the backend and are
//! never modified. All state (query, sort, page) belongs to the caller;
//! [`TableState`] bundles it and keeps the "back to page 1 on change" rule.
//!
//! Nothing in the pipeline fails on messy data. Values that cannot be read as
//! the column's type sort after those that can, and text comparison is the
//! last resort.

mod column;
mod compare;
mod dates;
mod error;
mod export;
mod pipeline;
mod record;
mod state;

pub use column::{CellRenderer, ColumnDescriptor, searchable_keys};
pub use compare::{SortOrder, SortType, compare, locale_compare};
pub use dates::{date_of, format_date_short, parse_date, shaped_date};
pub use error::{TableError, TableResult};
pub use export::{DirectorySink, FileSink, MemorySink, export_to_delimited_file, to_csv};
pub use pipeline::{Page, SortState, filter, handle_sort_column_click, paginate, sort};
pub use record::{Record, ShapedValue, display_string, get_field};
pub use state::{TableState, TableView};
