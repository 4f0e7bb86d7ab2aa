// src/error.rs
//! Error types for both pipelines.
//!
//! The generator only fails on a broken reference table (a configuration
//! defect). The scraper fails per URL, either fetching or extracting; the
//! pipeline decides whether that aborts the batch (see `scrape`).

use std::io;

use thiserror::Error;

/// A reference table is unusable for drawing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("reference table '{0}' is empty")]
    Empty(String),
    #[error("region '{region}' is missing from the {table} table")]
    MissingRegion { region: String, table: &'static str },
    #[error("category '{0}' has no price band")]
    MissingPriceBand(String),
    #[error("price band for '{category}' is inverted ({min} > {max})")]
    InvertedBand { category: String, min: u32, max: u32 },
    #[error("{0} class '{1}' has no entries")]
    MissingClass(&'static str, String),
    #[error("invalid weights for {0}")]
    Weights(&'static str),
}

/// The fetched document lacks an element the extractor relies on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no element with id \"{0}\"")]
    MissingElement(&'static str),
}

/// Transport or status failure while fetching one page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("{url}: {source}")]
    Extract { url: String, source: ExtractError },
    #[error("{url}: {source}")]
    Fetch { url: String, source: FetchError },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(String),
    #[error("table shape: {0}")]
    Shape(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
