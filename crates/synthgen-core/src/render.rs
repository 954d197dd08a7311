//! Projection of the result store into the table or raw view.
//!
//! Table headers come from the data itself, never from the authored
//! attribute list: the first row's keys, in that row's order. Each body row
//! then lists its own values in its own key order, so a row whose keys differ
//! from the first row renders a different number of cells. That mismatch is
//! preserved rather than reconciled; `TableView::mismatched_rows` reports it.

use crate::result::{ResultRow, ResultSet};
use crate::store::{ResultStore, ViewMode};

/// What the results panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// No generation has succeeded yet.
    Empty,
    Table(TableView),
    Raw(String),
}

/// Header plus body cells, already rendered to text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    keys: Vec<Vec<String>>,
}

impl TableView {
    /// Indices of rows whose key sequence differs from the header.
    pub fn mismatched_rows(&self) -> Vec<usize> {
        self.keys
            .iter()
            .enumerate()
            .filter(|(_, keys)| **keys != self.headers)
            .map(|(index, _)| index)
            .collect()
    }

    /// Widest of the header and every body row.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }
}

/// Projects the store according to its view mode.
pub fn project(store: &ResultStore) -> ResultView {
    let Some(rows) = store.current() else {
        return ResultView::Empty;
    };
    match store.view_mode() {
        ViewMode::Table => ResultView::Table(render_table(rows)),
        ViewMode::Raw => ResultView::Raw(render_raw(rows)),
    }
}

/// Header policy: the first row's keys; an empty result has no headers.
pub fn derive_headers(rows: &[ResultRow]) -> Vec<String> {
    rows.first()
        .map(|row| row.keys().map(str::to_string).collect())
        .unwrap_or_default()
}

pub fn render_table(rows: &[ResultRow]) -> TableView {
    TableView {
        headers: derive_headers(rows),
        rows: rows
            .iter()
            .map(|row| row.values().map(ToString::to_string).collect())
            .collect(),
        keys: rows
            .iter()
            .map(|row| row.keys().map(str::to_string).collect())
            .collect(),
    }
}

/// Pretty JSON with two-space indentation; shared with the export artifact.
pub fn render_raw(rows: &ResultSet) -> String {
    serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string())
}
