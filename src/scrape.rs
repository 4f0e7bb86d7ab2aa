// src/scrape.rs
//! Scraper pipeline: walk the URL list one request at a time, extract each
//! page and collect what worked.

use std::thread;

use crate::{
    config::options::{ FailurePolicy, ScrapeOptions },
    core::net::PageFetcher,
    error::{ Error, Result },
    progress::Progress,
    record::ScrapedPage,
    specs::wikipedia,
    store::DataSet,
};

/// A URL that could not be scraped, with the reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    pub url: String,
    pub reason: String,
}

#[derive(Clone, Debug, Default)]
pub struct ScrapeOutcome {
    /// Successful pages, in URL-list order.
    pub pages: Vec<ScrapedPage>,
    pub failures: Vec<Failure>,
}

impl ScrapeOutcome {
    pub fn dataset(&self) -> DataSet {
        DataSet::from_records(&self.pages)
    }
}

fn scrape_one<F: PageFetcher + ?Sized>(fetcher: &F, url: &str) -> Result<ScrapedPage> {
    let doc = fetcher
        .fetch(url)
        .map_err(|source| Error::Fetch { url: s!(url), source })?;
    wikipedia::extract(&doc, url).map_err(|source| Error::Extract { url: s!(url), source })
}

/// Fetch and extract every URL in `opts.urls`, sequentially.
///
/// With `FailurePolicy::Skip` a failing URL is logged, reported through
/// `progress` and recorded in `failures`; the rest still run. With
/// `FailurePolicy::Abort` the first failure is returned as the error.
pub fn collect_pages<F: PageFetcher + ?Sized>(
    fetcher: &F,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScrapeOutcome> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.urls.len());
        p.log("Fetching pages…");
    }

    let mut out = ScrapeOutcome::default();

    for (i, url) in opts.urls.iter().enumerate() {
        if i > 0 && !opts.pause.is_zero() {
            thread::sleep(opts.pause); // be polite
        }
        match scrape_one(fetcher, url) {
            Ok(page) => {
                logd!("Scraped {url}: title={:?}, {} bytes", page.title, page.content.len());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&page.title);
                }
                out.pages.push(page);
            }
            Err(e) => {
                loge!("Scrape {url}: {e}");
                if opts.on_error == FailurePolicy::Abort {
                    if let Some(p) = progress.as_deref_mut() {
                        p.finish();
                    }
                    return Err(e);
                }
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(url, &e.to_string());
                }
                out.failures.push(Failure { url: url.clone(), reason: e.to_string() });
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("Scrape done: {} pages, {} failures", out.pages.len(), out.failures.len());
    Ok(out)
}
