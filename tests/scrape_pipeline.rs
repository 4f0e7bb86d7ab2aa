// tests/scrape_pipeline.rs
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crm_synth::config::options::{ FailurePolicy, ScrapeOptions };
use crm_synth::core::net::PageFetcher;
use crm_synth::error::{ Error, FetchError };
use crm_synth::progress::Progress;
use crm_synth::record::PAGE_HEADERS;
use crm_synth::scrape::collect_pages;

/// Serves canned documents; unknown URLs answer 404.
struct Canned {
    pages: HashMap<String, String>,
    asked: RefCell<Vec<String>>,
}

impl Canned {
    fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: pages.iter().map(|(u, d)| (u.to_string(), d.to_string())).collect(),
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl PageFetcher for Canned {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.asked.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status { status: 404, url: url.to_string() })
    }
}

#[derive(Default)]
struct Tally {
    total: usize,
    done: Vec<String>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Tally {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, label: &str) { self.done.push(label.to_string()); }
    fn item_failed(&mut self, label: &str, _reason: &str) { self.failed.push(label.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

fn article(title: &str, body: &str) -> String {
    format!(r#"<h1 id="firstHeading">{title}</h1><div id="mw-content-text"><p>{body}</p></div>"#)
}

fn options(urls: &[&str], on_error: FailurePolicy) -> ScrapeOptions {
    ScrapeOptions {
        urls: urls.iter().map(|u| u.to_string()).collect(),
        pause: Duration::ZERO,
        on_error,
        ..ScrapeOptions::default()
    }
}

const GOA: &str = "https://en.wikipedia.org/wiki/Goa";
const GONE: &str = "https://en.wikipedia.org/wiki/Gone";
const ODISHA: &str = "https://en.wikipedia.org/wiki/Odisha";
const BROKEN: &str = "https://en.wikipedia.org/wiki/Broken";

fn fetcher() -> Canned {
    let goa = article("Goa", "Beaches.");
    let odisha = article("Odisha", "Temples.");
    Canned::new(&[(GOA, goa.as_str()), (ODISHA, odisha.as_str()), (BROKEN, "<html><p>no heading</p></html>")])
}

#[test]
fn skip_keeps_going_and_reports_failures() {
    let f = fetcher();
    let mut tally = Tally::default();
    let out = collect_pages(&f, &options(&[GOA, GONE, ODISHA, BROKEN], FailurePolicy::Skip), Some(&mut tally))
        .unwrap();

    let titles: Vec<&str> = out.pages.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Goa", "Odisha"]);
    assert_eq!(out.pages[1].content, "Temples.\n");
    assert_eq!(out.pages[1].url, ODISHA);

    let failed: Vec<&str> = out.failures.iter().map(|f| f.url.as_str()).collect();
    assert_eq!(failed, [GONE, BROKEN]);
    assert!(out.failures[0].reason.contains("404"));

    assert_eq!(tally.total, 4);
    assert_eq!(tally.done, ["Goa", "Odisha"]);
    assert_eq!(tally.failed, [GONE, BROKEN]);
    assert!(tally.finished);

    let ds = out.dataset();
    assert_eq!(ds.headers.as_deref().unwrap(), PAGE_HEADERS);
    assert_eq!(ds.row_count(), 2);
}

#[test]
fn abort_stops_at_first_failure() {
    let f = fetcher();
    let err = collect_pages(&f, &options(&[GOA, GONE, ODISHA], FailurePolicy::Abort), None).unwrap_err();
    match err {
        Error::Fetch { url, source: FetchError::Status { status, .. } } => {
            assert_eq!(url, GONE);
            assert_eq!(status, 404);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(*f.asked.borrow(), [GOA, GONE]);
}

#[test]
fn extraction_failure_names_the_url() {
    let f = fetcher();
    let err = collect_pages(&f, &options(&[BROKEN], FailurePolicy::Abort), None).unwrap_err();
    assert!(matches!(err, Error::Extract { ref url, .. } if url == BROKEN));
}

#[test]
fn duplicate_urls_are_fetched_twice() {
    let f = fetcher();
    let out = collect_pages(&f, &options(&[GOA, GOA], FailurePolicy::Skip), None).unwrap();
    assert_eq!(out.pages.len(), 2);
    assert_eq!(f.asked.borrow().len(), 2);
}

#[test]
fn empty_list_is_empty_outcome() {
    let f = fetcher();
    let out = collect_pages(&f, &options(&[], FailurePolicy::Skip), None).unwrap();
    assert!(out.pages.is_empty() && out.failures.is_empty());
}
