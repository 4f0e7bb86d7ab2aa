// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use std::time::Duration;

use chrono::NaiveDate;

use super::consts::*;
use crate::specs::wikipedia;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub generate: GenerateOptions,
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Which of the two datasets an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Contacts,
    Pages,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 2] = [DatasetKind::Contacts, DatasetKind::Pages];

    pub fn title(&self) -> &'static str {
        match self { DatasetKind::Contacts => "Contacts", DatasetKind::Pages => "Pages" }
    }

    /// File stem used by the cache and the default export name.
    pub fn stem(&self) -> &'static str {
        match self {
            DatasetKind::Contacts => "crm_synthetic_data",
            DatasetKind::Pages => "wikipedia_content",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    pub count: usize,
    pub seed: u64,
    /// Anchor for created/purchase dates. `None` → local date at run time.
    pub today: Option<NaiveDate>,
    /// Keep one phone registry for the whole run (redraw on collision).
    /// `false` reproduces the legacy per-call check, which never rejects.
    pub unique_phones: bool,
    pub out: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_RECORD_COUNT,
            seed: DEFAULT_SEED,
            today: None,
            unique_phones: true,
            out: PathBuf::from(CONTACTS_FILE),
        }
    }
}

/// What to do when one URL fails to fetch or extract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log, remember the URL, keep going.
    Skip,
    /// First failure aborts the batch; nothing is written.
    Abort,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub urls: Vec<String>,
    pub timeout: Duration,
    pub pause: Duration,
    pub on_error: FailurePolicy,
    pub out: PathBuf,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            urls: wikipedia::URLS.iter().map(|u| s!(*u)).collect(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
            on_error: FailurePolicy::Skip,
            out: PathBuf::from(PAGES_FILE),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// Final export path for `kind`: `<dir>/<stem>.<ext>`.
    /// Without a user-chosen stem the dataset's own stem is used.
    pub fn out_path(&self, kind: DatasetKind) -> PathBuf {
        let stem = self.out_path.file_stem
            .clone()
            .unwrap_or_else(|| OsString::from(kind.stem()));
        let mut name = stem;
        name.push(".");
        name.push(self.format.ext());
        self.out_path.dir.join(name)
    }

    /// Parse GUI text into dir + stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        self.out_path.dir = match p.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from(DEFAULT_OUT_DIR),
        };
        self.out_path.file_stem = p.file_stem().map(|s| s.to_os_string());
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: Option<OsString>, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_path_follows_format_and_kind() {
        let mut export = ExportOptions::default();
        assert_eq!(export.out_path(DatasetKind::Pages), Path::new(".").join("wikipedia_content.csv"));

        export.set_path("out/mine.txt");
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(DatasetKind::Contacts), Path::new("out").join("mine.tsv"));
    }

    #[test]
    fn scrape_defaults_cover_the_page_list() {
        let opts = ScrapeOptions::default();
        assert_eq!(opts.urls.len(), wikipedia::URLS.len());
        assert_eq!(opts.on_error, FailurePolicy::Skip);
    }
}
