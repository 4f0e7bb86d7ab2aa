// src/gui/table_model.rs
//! What the table shows for the current tab.
//!
//! The canonical dataset stays untouched in `App::data`; the view holds the
//! rows that passed the side-panel filters plus the unfiltered row count.
//! Copy/Export and the summary read from here, so what you see is what you
//! export.

use crate::config::options::DatasetKind;
use crate::filter::ContactFilter;
use crate::store::DataSet;

#[derive(Clone, Debug, Default)]
pub struct TableView {
    pub data: DataSet,
    /// Rows in the canonical dataset before filtering.
    pub total: usize,
}

impl TableView {
    /// Header-only view for a tab with no data yet.
    pub fn placeholder(kind: DatasetKind) -> Self {
        let headers = kind.headers().iter().map(|h| s!(*h)).collect();
        Self { data: DataSet { headers: Some(headers), rows: Vec::new() }, total: 0 }
    }

    /// Contacts go through `filter`; pages are shown as they are.
    pub fn build(kind: DatasetKind, ds: &DataSet, filter: &ContactFilter) -> Self {
        let data = match kind {
            DatasetKind::Contacts if filter.is_active() => filter.apply(ds),
            _ => ds.clone(),
        };
        Self { data, total: ds.row_count() }
    }

    pub fn headers(&self) -> Option<&[String]> { self.data.headers.as_deref() }

    pub fn rows(&self) -> &[Vec<String>] { &self.data.rows }

    pub fn ncols(&self) -> usize {
        match self.data.header_count() {
            0 => self.data.rows.first().map(|r| r.len()).unwrap_or(0),
            n => n,
        }
    }

    pub fn nrows(&self) -> usize { self.data.row_count() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Some rows are hidden by the filters.
    pub fn is_filtered(&self) -> bool { self.nrows() < self.total }
}
