//! The table widget: construction, column registration, the click protocol
//! and in-place row reordering.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlTableElement, HtmlTableRowElement, HtmlTableSectionElement};

use crate::error::TableError;
use crate::header::ColumnHeader;
use crate::sort::{SortDirection, SortKey, SortState, next_direction, sorted_order};

/// Handle to a header registered with
/// [`SortableTable::initialise_column_header`].
///
/// Ids are only meaningful for the table that issued them; using one on a
/// different table is a programmer error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderId(usize);

struct TableInner {
    table: HtmlTableElement,
    head: HtmlTableSectionElement,
    body: HtmlTableSectionElement,
    headers: Vec<ColumnHeader>,
}

impl TableInner {
    /// Index of the header currently driving the sort, if any. Derived from
    /// header state on every call, never cached.
    fn active_index(&self) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.sort_state() != SortState::Unsorted)
    }

    fn table_state(&self) -> SortState {
        self.active_index()
            .map_or(SortState::Unsorted, |index| self.headers[index].sort_state())
    }

    /// The rows currently in the body, re-queried from the DOM so rows added
    /// or removed since the last sort are always reflected.
    fn live_rows(&self) -> Vec<HtmlTableRowElement> {
        let rows = self.body.rows();
        (0..rows.length())
            .filter_map(|index| rows.item(index))
            .filter_map(|element| element.dyn_into::<HtmlTableRowElement>().ok())
            .collect()
    }
}

/// Click-to-sort behavior attached to one server-rendered `<table>`.
///
/// The handle is cheap to clone and clones share the same table; each click
/// listener holds one internally, which keeps the widget alive for the
/// lifetime of the page.
///
/// At most one header is sorted at a time. Clicking a header sorts its
/// column ascending, clicking it again inverts the direction, and clicking
/// a different header resets the previous one.
#[derive(Clone)]
pub struct SortableTable {
    inner: Rc<RefCell<TableInner>>,
}

impl SortableTable {
    /// Attaches to the first `<table>` matching `selector`.
    ///
    /// The table must already carry a `<thead>` and a `<tbody>`; rows are
    /// expected in the first body section. Missing pieces are structural
    /// errors, not conditions to recover from.
    pub fn new(selector: &str) -> Result<Self, TableError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| TableError::Dom("no global `document`".into()))?;
        let table: HtmlTableElement = document
            .query_selector(selector)
            .map_err(dom_error)?
            .ok_or_else(|| TableError::TableNotFound(selector.to_string()))?
            .dyn_into()
            .map_err(|_| TableError::TableNotFound(selector.to_string()))?;
        let head = table.t_head().ok_or(TableError::SectionMissing("thead"))?;
        let body = table
            .t_bodies()
            .item(0)
            .and_then(|element| element.dyn_into::<HtmlTableSectionElement>().ok())
            .ok_or(TableError::SectionMissing("tbody"))?;
        Ok(Self {
            inner: Rc::new(RefCell::new(TableInner {
                table,
                head,
                body,
                headers: Vec::new(),
            })),
        })
    }

    /// The underlying `<table>` element.
    pub fn element(&self) -> HtmlTableElement {
        self.inner.borrow().table.clone()
    }

    /// Registers the header cell matching `selector` (scoped to the
    /// `<thead>`) as a sortable column.
    ///
    /// `key_fn` extracts the comparable value from each row of the column.
    /// The cell gets a `click` listener driving [`Self::sort_by_new_header`],
    /// and its initial sort state is taken from any `sort-ascending` /
    /// `sort-descending` class the server rendered. Call once per sortable
    /// column, before the first sort.
    pub fn initialise_column_header<F>(
        &self,
        selector: &str,
        key_fn: F,
    ) -> Result<HeaderId, TableError>
    where
        F: Fn(&HtmlTableRowElement) -> SortKey + 'static,
    {
        let head = self.inner.borrow().head.clone();
        let cell = head
            .query_selector(selector)
            .map_err(dom_error)?
            .ok_or_else(|| TableError::HeaderCellNotFound(selector.to_string()))?;

        let id = HeaderId(self.inner.borrow().headers.len());
        let table = self.clone();
        let on_click = Closure::wrap(Box::new(move || {
            table.sort_by_new_header(id);
        }) as Box<dyn FnMut()>);
        cell.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        // Keep the closure alive for the lifetime of the page
        on_click.forget();

        self.inner
            .borrow_mut()
            .headers
            .push(ColumnHeader::new(cell, Box::new(key_fn)));
        Ok(id)
    }

    /// The header currently driving the sort, if any.
    pub fn sorted_header(&self) -> Option<HeaderId> {
        self.inner.borrow().active_index().map(HeaderId)
    }

    /// Sort state of the table as a whole: the active header's state, or
    /// `Unsorted` when no column is sorted.
    pub fn sort_state(&self) -> SortState {
        self.inner.borrow().table_state()
    }

    /// Sort state of one registered header.
    pub fn header_state(&self, id: HeaderId) -> SortState {
        self.inner.borrow().headers[id.0].sort_state()
    }

    /// Sorts the table by the given header, as a click on it would.
    ///
    /// The direction follows the toggle rule: if `id` is already the active
    /// header its direction inverts, otherwise the column starts ascending.
    /// Every other header resets to `Unsorted`, so exactly one header is
    /// sorted afterwards.
    pub fn sort_by_new_header(&self, id: HeaderId) {
        let direction = {
            let mut inner = self.inner.borrow_mut();
            let clicked_is_active = inner.active_index() == Some(id.0);
            let direction = next_direction(inner.table_state(), clicked_is_active);
            for header in &mut inner.headers {
                header.set_sort_state(SortState::Unsorted);
            }
            inner.headers[id.0].set_sort_state(direction.into());
            direction
        };
        self.reorder(id, direction);
    }

    /// Re-applies the sort of the already-active header without touching any
    /// header state.
    ///
    /// This is the page-load path for a server-pre-marked sort: the markup
    /// carries the marker class, construction picked it up, and this call
    /// orders the rows to match.
    ///
    /// # Panics
    ///
    /// Panics when no header is sorted; calling this on an unsorted table is
    /// a programmer error, not a condition to silently ignore.
    pub fn re_sort_same_header(&self) {
        let active = {
            let inner = self.inner.borrow();
            inner.active_index().and_then(|index| {
                inner.headers[index]
                    .sort_state()
                    .direction()
                    .map(|direction| (HeaderId(index), direction))
            })
        };
        let Some((id, direction)) = active else {
            panic!("re_sort_same_header: no header is currently sorted");
        };
        self.reorder(id, direction);
    }

    /// Reorders the live rows by the keys of header `id`.
    ///
    /// Each key is extracted once, the stable permutation is computed, and
    /// the existing row nodes are re-appended to the body in sorted order.
    /// Appending moves a live node, so rows keep their listeners and any
    /// state scripts hung off them.
    fn reorder(&self, id: HeaderId, direction: SortDirection) {
        let inner = self.inner.borrow();
        let rows = inner.live_rows();
        let keys: Vec<SortKey> = rows
            .iter()
            .map(|row| inner.headers[id.0].key_for(row))
            .collect();
        for index in sorted_order(&keys, direction) {
            inner
                .body
                .append_child(rows[index].as_ref())
                .expect("failed to re-append table row");
        }
    }
}

// Key extractors are opaque closures, so derive(Debug) is not available.
impl fmt::Debug for SortableTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SortableTable")
            .field("headers", &inner.headers.len())
            .field("state", &inner.table_state())
            .finish()
    }
}

fn dom_error(err: JsValue) -> TableError {
    TableError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
