//! Failure modes raised while attaching to server-rendered markup.

use thiserror::Error;

/// Errors from table construction and column registration.
///
/// All of these are structural preconditions on the markup the server
/// rendered. They are fatal for the table they concern: callers either skip
/// the enhancement (the page simply has no such table) or treat the page as
/// broken. A misbehaving key extractor is deliberately NOT an error; it can
/// only degrade the row order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// No `<table>` element matched the root selector.
    #[error("no `<table>` matches `{0}`")]
    TableNotFound(String),

    /// The table lacks a `<thead>` or `<tbody>` section.
    #[error("table has no `<{0}>` section")]
    SectionMissing(&'static str),

    /// No header cell matched the column selector.
    #[error("no header cell matches `{0}`")]
    HeaderCellNotFound(String),

    /// The DOM rejected an operation, e.g. a malformed selector.
    #[error("dom error: {0}")]
    Dom(String),
}
