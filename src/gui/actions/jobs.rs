// src/gui/actions/jobs.rs
//! Generate / Scrape run on one worker thread each; the UI polls the
//! receiver in `App::update`. Only one job at a time.

use std::{ sync::mpsc, thread };

use crate::{
    config::options::DatasetKind,
    core::net::HttpFetcher,
    generate as pipeline,
    gui::{ app::{ App, JobResult }, progress::GuiProgress },
    scrape as scraper,
    store::DataSet,
};

fn spawn<F>(app: &mut App, kind: DatasetKind, work: F)
where
    F: FnOnce() -> JobResult + Send + 'static,
{
    if app.running() {
        app.status("Busy: wait for the current job to finish");
        return;
    }
    let (tx, rx) = mpsc::channel();
    let spawned = thread::Builder::new()
        .name(format!("{:?}-job", kind).to_lowercase())
        .spawn(move || {
            let _ = tx.send(work());
        });
    match spawned {
        Ok(_) => app.job = Some(rx),
        Err(e) => {
            loge!("Job: spawn failed: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}

pub fn generate(app: &mut App) {
    let opts = app.state.options.generate.clone();
    let status = app.status.clone();
    logf!("Generate: Begin count={} seed={}", opts.count, opts.seed);

    spawn(app, DatasetKind::Contacts, move || {
        let mut prog = GuiProgress::new(status, "Generated");
        match pipeline::generate(&opts, Some(&mut prog)) {
            Ok(records) => JobResult::Done {
                kind: DatasetKind::Contacts,
                note: format!("Generated {} record(s) (seed {})", records.len(), opts.seed),
                ds: DataSet::from_records(&records),
            },
            Err(e) => JobResult::Failed { kind: DatasetKind::Contacts, error: e.to_string() },
        }
    });
}

pub fn scrape(app: &mut App) {
    let opts = app.state.options.scrape.clone();
    let status = app.status.clone();
    logf!("Scrape: Begin urls={} policy={:?}", opts.urls.len(), opts.on_error);

    spawn(app, DatasetKind::Pages, move || {
        let fetcher = match HttpFetcher::with_timeout(opts.timeout) {
            Ok(f) => f,
            Err(e) => return JobResult::Failed { kind: DatasetKind::Pages, error: e.to_string() },
        };
        let mut prog = GuiProgress::new(status, "Scraped");
        match scraper::collect_pages(&fetcher, &opts, Some(&mut prog)) {
            Ok(outcome) => {
                let note = if outcome.failures.is_empty() {
                    format!("Scraped {} page(s)", outcome.pages.len())
                } else {
                    let urls: Vec<&str> = outcome.failures.iter().map(|f| f.url.as_str()).collect();
                    format!(
                        "Scraped {} page(s), {} failed: {}",
                        outcome.pages.len(),
                        urls.len(),
                        urls.join(", ")
                    )
                };
                JobResult::Done { kind: DatasetKind::Pages, ds: outcome.dataset(), note }
            }
            Err(e) => JobResult::Failed { kind: DatasetKind::Pages, error: e.to_string() },
        }
    });
}
