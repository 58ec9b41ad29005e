//! Search, typed sort and pagination over in-memory records.
//!
//! Every function here is pure and reentrant. `filter` and `sort` hand back
//! the input slice itself (`Cow::Borrowed`) whenever they have nothing to do,
//! so callers can cheaply tell that a render changed nothing.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::column::ColumnDescriptor;
use crate::compare::{SortOrder, compare};
use crate::record::{Record, display_string, get_field};

/// Keeps the records where any of `keys` contains `query`, case-insensitively.
///
/// A blank query returns the input untouched. `null` and missing fields never
/// match.
pub fn filter<'a>(records: &'a [Record], query: &str, keys: &[&str]) -> Cow<'a, [Record]> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Cow::Borrowed(records);
    }

    let is_match = |record: &Record| {
        keys.iter().any(|key| {
            get_field(record, key)
                .is_some_and(|value| display_string(value).to_lowercase().contains(&needle))
        })
    };
    Cow::Owned(records.iter().filter(|r| is_match(*r)).cloned().collect())
}

/// The active sort column and direction, if any.
///
/// Column and order are set and cleared together; there is no way to hold a
/// column without an order or the reverse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SortStateRepr", into = "SortStateRepr")]
pub struct SortState {
    active: Option<(String, SortOrder)>,
}

#[derive(Serialize, Deserialize)]
struct SortStateRepr {
    column: Option<String>,
    order: Option<SortOrder>,
}

impl From<SortStateRepr> for SortState {
    fn from(repr: SortStateRepr) -> Self {
        match (repr.column, repr.order) {
            (Some(column), Some(order)) => Self::new(column, order),
            _ => Self::none(),
        }
    }
}

impl From<SortState> for SortStateRepr {
    fn from(state: SortState) -> Self {
        match state.active {
            Some((column, order)) => Self {
                column: Some(column),
                order: Some(order),
            },
            None => Self {
                column: None,
                order: None,
            },
        }
    }
}

impl SortState {
    /// No sorting.
    pub fn none() -> Self {
        Self { active: None }
    }

    pub fn new(column: impl Into<String>, order: SortOrder) -> Self {
        Self {
            active: Some((column.into(), order)),
        }
    }

    pub fn column(&self) -> Option<&str> {
        self.active.as_ref().map(|(column, _)| column.as_str())
    }

    pub fn order(&self) -> Option<SortOrder> {
        self.active.as_ref().map(|(_, order)| *order)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

/// Advances the sort state after a header click.
///
/// A column cycles `asc → desc → unsorted`; clicking any other column starts
/// it at `asc`. Whoever holds the page number must reset it to 1 whenever the
/// returned state differs from `current`.
pub fn handle_sort_column_click(current: &SortState, clicked: &str) -> SortState {
    match (current.column(), current.order()) {
        (Some(column), Some(SortOrder::Asc)) if column == clicked => {
            SortState::new(clicked, SortOrder::Desc)
        }
        (Some(column), Some(SortOrder::Desc)) if column == clicked => SortState::none(),
        _ => SortState::new(clicked, SortOrder::Asc),
    }
}

/// Sorts records by the column named in `state`.
///
/// Returns the input untouched when nothing is sorted or no descriptor has
/// the sort column's key. The sort is stable, so equal rows keep their
/// relative order across renders.
pub fn sort<'a>(
    records: &'a [Record],
    state: &SortState,
    columns: &[ColumnDescriptor],
) -> Cow<'a, [Record]> {
    let (Some(key), Some(order)) = (state.column(), state.order()) else {
        return Cow::Borrowed(records);
    };
    let Some(column) = columns.iter().find(|c| c.key == key) else {
        debug!(column = %key, "sort column has no descriptor, leaving order unchanged");
        return Cow::Borrowed(records);
    };

    let sort_type = column.resolved_sort_type();
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare(get_field(a, key), get_field(b, key), sort_type, order));
    Cow::Owned(sorted)
}

/// One page of records plus the totals needed to draw a pager.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a> {
    pub records: &'a [Record],
    pub total_pages: usize,
    pub total: usize,
}

/// Slices out 1-based page `page`.
///
/// Pages past the end (and page 0) are empty rather than an error. An
/// `items_per_page` of 0 yields no pages at all.
pub fn paginate(records: &[Record], page: usize, items_per_page: usize) -> Page<'_> {
    let total = records.len();
    if items_per_page == 0 {
        return Page {
            records: &[],
            total_pages: 0,
            total,
        };
    }

    let total_pages = total.div_ceil(items_per_page);
    let start = page.saturating_sub(1).saturating_mul(items_per_page);
    let slice = if page == 0 || start >= total {
        &records[..0]
    } else {
        let end = start.saturating_add(items_per_page).min(total);
        &records[start..end]
    };

    Page {
        records: slice,
        total_pages,
        total,
    }
}
