//! A single sortable column header and the marker classes that mirror it.

use web_sys::{Element, HtmlTableRowElement};

use crate::sort::{SortDirection, SortKey, SortState};

/// Class marking a header whose column is sorted ascending.
pub const SORT_ASCENDING_CLASS: &str = "sort-ascending";

/// Class marking a header whose column is sorted descending.
pub const SORT_DESCENDING_CLASS: &str = "sort-descending";

/// Extracts the sort key for one row of this header's column.
///
/// Extractors are trusted: they are never validated, and a misbehaving one
/// degrades the row order rather than raising an error. Rows without a
/// usable value should map to [`SortKey::Missing`].
pub type KeyFn = Box<dyn Fn(&HtmlTableRowElement) -> SortKey>;

/// A `<th>` cell wired into a sortable table.
///
/// The [`SortState`] field is the source of truth; the `sort-ascending` /
/// `sort-descending` classes on the cell are a presentational mirror,
/// rewritten on every state change and read exactly once, at construction.
/// Scripts or stylesheets fiddling with the classes afterwards cannot drift
/// the widget's state.
pub struct ColumnHeader {
    element: Element,
    key_fn: KeyFn,
    state: SortState,
}

impl ColumnHeader {
    /// Wraps `element`, taking the initial state from its marker classes.
    ///
    /// This is what lets the server pre-select a sort: render the header
    /// with `sort-descending` and the table reports it as already sorted.
    /// If markup erroneously carries both markers, ascending wins.
    pub fn new(element: Element, key_fn: KeyFn) -> Self {
        let classes = element.class_list();
        let state = if classes.contains(SORT_ASCENDING_CLASS) {
            SortState::Ascending
        } else if classes.contains(SORT_DESCENDING_CLASS) {
            SortState::Descending
        } else {
            SortState::Unsorted
        };
        Self { element, key_fn, state }
    }

    /// Current sort state of this column.
    pub fn sort_state(&self) -> SortState {
        self.state
    }

    /// Records `state` and rewrites the marker classes to match.
    ///
    /// At most one marker class is present afterwards; `Unsorted` clears
    /// both.
    pub fn set_sort_state(&mut self, state: SortState) {
        self.state = state;
        let classes = self.element.class_list();
        let _ = classes.remove_1(SORT_ASCENDING_CLASS);
        let _ = classes.remove_1(SORT_DESCENDING_CLASS);
        match state.direction() {
            Some(SortDirection::Ascending) => {
                let _ = classes.add_1(SORT_ASCENDING_CLASS);
            }
            Some(SortDirection::Descending) => {
                let _ = classes.add_1(SORT_DESCENDING_CLASS);
            }
            None => {}
        }
    }

    /// Applies this column's extractor to `row`.
    pub fn key_for(&self, row: &HtmlTableRowElement) -> SortKey {
        (self.key_fn)(row)
    }

    /// The underlying `<th>` element.
    pub fn element(&self) -> &Element {
        &self.element
    }
}
