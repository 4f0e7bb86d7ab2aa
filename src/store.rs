// src/store.rs
//! Canonical table shape plus the local `.store/` cache.
//!
//! Both pipelines end in a `DataSet` (optional header row + string rows).
//! The dashboard keeps the last generated/scraped table per `DatasetKind`
//! in `.store/<stem>.csv` and reloads it on start.

use std::{ fs, io, path::{ Path, PathBuf } };

use crate::config::consts::STORE_DIR;
use crate::config::options::DatasetKind;
use crate::csv::{ self, parse_rows };
use crate::error::{ Error, Result };
use crate::record::{ CONTACT_HEADERS, PAGE_HEADERS, Tabular };

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    /// Assemble homogeneous records in the order given; columns follow
    /// `T::HEADERS`.
    pub fn from_records<'a, T, I>(records: I) -> Self
    where
        T: Tabular + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        Self {
            headers: Some(T::HEADERS.iter().map(|h| s!(*h)).collect()),
            rows: records.into_iter().map(Tabular::to_row).collect(),
        }
    }

    /// Parse delimited text. With `has_headers` the first row is the header.
    pub fn from_text(text: &str, sep: char, has_headers: bool) -> Self {
        let mut rows = parse_rows(text, sep);
        let headers = if has_headers && !rows.is_empty() { Some(rows.remove(0)) } else { None };
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Index of the column named `name`, if the table has headers.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.as_ref()?.iter().position(|h| h == name)
    }

    /// Every row has as many cells as the header.
    pub fn check_shape(&self) -> Result<()> {
        let width = match &self.headers {
            Some(h) => h.len(),
            None => match self.rows.first() { Some(r) => r.len(), None => return Ok(()) },
        };
        match self.rows.iter().position(|r| r.len() != width) {
            Some(i) => Err(Error::Shape(format!(
                "row {} has {} cells, expected {width}", i + 1, self.rows[i].len()
            ))),
            None => Ok(()),
        }
    }
}

impl DatasetKind {
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            DatasetKind::Contacts => CONTACT_HEADERS,
            DatasetKind::Pages => PAGE_HEADERS,
        }
    }

    /// Which kind a header row belongs to, if any.
    pub fn detect(headers: &[String]) -> Option<DatasetKind> {
        DatasetKind::ALL
            .into_iter()
            .find(|k| k.headers().iter().eq(headers.iter()))
    }
}

fn cache_path(kind: DatasetKind) -> PathBuf {
    cache_path_in(Path::new(STORE_DIR), kind)
}

fn cache_path_in(dir: &Path, kind: DatasetKind) -> PathBuf {
    dir.join(format!("{}.csv", kind.stem()))
}

pub fn save_dataset(kind: DatasetKind, ds: &DataSet) -> io::Result<PathBuf> {
    save_dataset_in(Path::new(STORE_DIR), kind, ds)
}

pub fn save_dataset_in(dir: &Path, kind: DatasetKind, ds: &DataSet) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = cache_path_in(dir, kind);
    let text = csv::to_export_string(&ds.headers, &ds.rows, true, ',');
    fs::write(&path, text)?;
    logd!("Cache: saved {:?} rows={} to {}", kind, ds.row_count(), path.display());
    Ok(path)
}

pub fn load_dataset(kind: DatasetKind) -> Result<DataSet> {
    load_dataset_from(&cache_path(kind), kind)
}

/// Read a cached or previously exported table of `kind`. The header row
/// must match the kind's columns.
pub fn load_dataset_from(path: &Path, kind: DatasetKind) -> Result<DataSet> {
    let text = fs::read_to_string(path)?;
    let ds = DataSet::from_text(&text, ',', true);
    match &ds.headers {
        Some(h) if DatasetKind::detect(h) == Some(kind) => {}
        _ => return Err(Error::Shape(format!("{} is not a {} table", path.display(), kind.title()))),
    }
    ds.check_shape()?;
    Ok(ds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ScrapedPage;

    fn page(t: &str) -> ScrapedPage {
        ScrapedPage { title: s!(t), content: format!("{t} body\n"), url: format!("https://x/{t}") }
    }

    #[test]
    fn assembles_in_input_order() {
        let pages = vec![page("B"), page("A"), page("B")];
        let ds = DataSet::from_records(&pages);
        assert_eq!(ds.header_count(), 3);
        assert_eq!(ds.row_count(), 3);
        let titles: Vec<&str> = ds.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(titles, ["B", "A", "B"]);
        assert_eq!(ds.column("url"), Some(2));
    }

    #[test]
    fn detects_kind_from_headers() {
        let h: Vec<String> = PAGE_HEADERS.iter().map(|s| s!(*s)).collect();
        assert_eq!(DatasetKind::detect(&h), Some(DatasetKind::Pages));
        assert_eq!(DatasetKind::detect(&[s!("x")]), None);
    }

    #[test]
    fn ragged_rows_fail_shape_check() {
        let ds = DataSet {
            headers: Some(vec![s!("a"), s!("b")]),
            rows: vec![vec![s!("1"), s!("2")], vec![s!("3")]],
        };
        assert!(matches!(ds.check_shape(), Err(Error::Shape(_))));
    }

    #[test]
    fn cache_roundtrip_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let ds = DataSet::from_records(&[page("Goa"), page("Assam")]);
        let path = save_dataset_in(dir.path(), DatasetKind::Pages, &ds).unwrap();
        assert!(path.ends_with("wikipedia_content.csv"));
        let back = load_dataset_from(&path, DatasetKind::Pages).unwrap();
        assert_eq!(back, ds);
        assert!(load_dataset_from(&path, DatasetKind::Contacts).is_err());
    }
}
