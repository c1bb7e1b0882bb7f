//! Click-to-sort wiring for the uploads file table.
//!
//! The server renders `table#uploads` newest-first and pre-marks the
//! modified column `sort-descending`; this module registers the three
//! columns and re-applies that sort so the widget state and the row order
//! agree from the first paint.

use sortable_table::{SortKey, SortableTable, TableError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlTableRowElement};

/// Wires the uploads table, if this page has one.
pub fn enhance() {
    match build() {
        Ok(()) => {}
        // Not every page carries the uploads table.
        Err(TableError::TableNotFound(_)) => {
            web_sys::console::warn_1(&JsValue::from_str(
                "uploads: no table on this page, skipping sort",
            ));
        }
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&format!("uploads: {err}")));
            panic!("uploads table wiring failed");
        }
    }
}

fn build() -> Result<(), TableError> {
    let table = SortableTable::new("table#uploads")?;
    table.initialise_column_header("th.name", name_key)?;
    table.initialise_column_header("th.size", size_key)?;
    table.initialise_column_header("th.date-modified", modified_key)?;
    if table.sorted_header().is_some() {
        table.re_sort_same_header();
    }
    Ok(())
}

/// File name: the visible text of the cell's link.
fn name_key(row: &HtmlTableRowElement) -> SortKey {
    row.query_selector("td.name a")
        .ok()
        .flatten()
        .and_then(|link| link.dyn_into::<HtmlElement>().ok())
        .map_or(SortKey::Missing, |link| SortKey::Text(link.inner_text()))
}

/// File size: the numeric `data-size` attribute, not the human-readable
/// cell text.
fn size_key(row: &HtmlTableRowElement) -> SortKey {
    row.query_selector("td.size")
        .ok()
        .flatten()
        .and_then(|cell| cell.get_attribute("data-size"))
        .and_then(|raw| raw.parse::<f64>().ok())
        .map_or(SortKey::Missing, SortKey::Number)
}

/// Modification time: the ISO-8601 `datetime` attribute of the `<time>`
/// element, which sorts chronologically as text.
fn modified_key(row: &HtmlTableRowElement) -> SortKey {
    row.query_selector("td.date-modified time")
        .ok()
        .flatten()
        .and_then(|time| time.get_attribute("datetime"))
        .map_or(SortKey::Missing, SortKey::Text)
}
