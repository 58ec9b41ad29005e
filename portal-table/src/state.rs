use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::column::{ColumnDescriptor, searchable_keys};
use crate::pipeline::{SortState, filter, handle_sort_column_click, paginate, sort};
use crate::record::Record;

/// UI-held table state: search text, sort and current page.
///
/// Changing the query or the sort sends the table back to page 1, so a
/// caller that goes through these setters can never be left on a page that
/// no longer exists for the new result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    query: String,
    sort: SortState,
    page: usize,
    /// Overrides the searched fields; `None` searches every column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    search_keys: Option<Vec<String>>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: SortState::none(),
            page: 1,
            search_keys: None,
        }
    }
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Applies a header click and returns to page 1.
    ///
    /// Clicks on a key with no descriptor, or on an unsortable column, are
    /// ignored and leave both sort and page as they were.
    pub fn click_column(&mut self, column: &str, columns: &[ColumnDescriptor]) {
        if !columns.iter().any(|c| c.key == column && c.sortable) {
            debug!(column = %column, "ignoring click on unsortable column");
            return;
        }
        self.sort = handle_sort_column_click(&self.sort, column);
        self.page = 1;
    }

    /// Moves to `page`; pages below 1 are treated as 1.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_search_keys(&mut self, keys: Option<Vec<String>>) {
        self.search_keys = keys;
        self.page = 1;
    }

    /// Runs filter, sort and pagination for the current state.
    pub fn apply(
        &self,
        records: &[Record],
        columns: &[ColumnDescriptor],
        items_per_page: usize,
    ) -> TableView {
        let keys: Vec<&str> = match &self.search_keys {
            Some(keys) => keys.iter().map(String::as_str).collect(),
            None => searchable_keys(columns),
        };

        let filtered = filter(records, &self.query, &keys);
        let sorted = sort(&filtered, &self.sort, columns);
        let page = paginate(&sorted, self.page, items_per_page);

        TableView {
            rows: page.records.to_vec(),
            page: self.page,
            total: page.total,
            total_pages: page.total_pages,
        }
    }
}

/// The rows to draw for one render, with pager totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub rows: Vec<Record>,
    pub page: usize,
    /// Matching records across all pages.
    pub total: usize,
    pub total_pages: usize,
}
