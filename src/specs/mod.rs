// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific extraction rules. A spec knows *where the ground truth
//! lives in the HTML* of one kind of page and turns a fetched document into
//! a typed record.
//!
//! ## What lives here
//! - **Pure HTML parsing** over an already fetched document, using the
//!   `core::html` helpers (element by id, descendants by tag, plain text).
//! - The **page list** a pipeline walks, when it is fixed.
//!
//! ## What does **not** live here
//! - **Networking**: documents come in as `&str`; `scrape` owns the fetcher.
//! - **Failure policy**: a spec returns `ExtractError`; the pipeline decides
//!   whether to skip the page or abort.
//! - **Caching/persistence/export**: `store` and `file`.
//!
//! ## Typical call chain
//! ```text
//! CLI / GUI → scrape::collect_pages → PageFetcher::fetch(url)
//!                                   ↘ specs::wikipedia::extract(doc, url)
//!                                   → DataSet → file / store
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against literal HTML fixtures.
pub mod wikipedia;
