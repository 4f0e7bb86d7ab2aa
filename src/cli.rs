// src/cli.rs
//! Command-line front ends for the two pipelines (`generate`, `scrape`).

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use clap::Parser;
use color_eyre::eyre::{ Result, WrapErr, bail };

use crate::{
    config::consts::*,
    config::options::{ FailurePolicy, GenerateOptions, ScrapeOptions },
    core::net::HttpFetcher,
    file,
    generate,
    progress::Progress,
    report,
    scrape,
    store::DataSet,
};

const DATE_HELP: &str = "Reference date for created/purchase dates (YYYY-MM-DD); defaults to today";

/// Generate a synthetic CRM dataset and print a summary.
#[derive(Debug, Parser)]
#[command(name = "generate", version)]
pub struct GenerateArgs {
    /// Number of records
    #[arg(short = 'n', long, default_value_t = DEFAULT_RECORD_COUNT)]
    pub count: usize,

    /// PRNG seed
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output CSV path
    #[arg(short, long, default_value = CONTACTS_FILE)]
    pub out: PathBuf,

    #[arg(long, value_name = "DATE", help = DATE_HELP)]
    pub today: Option<NaiveDate>,

    /// Check phone uniqueness per record only (reproduces older datasets)
    #[arg(long)]
    pub legacy_phones: bool,

    /// Skip the summary report
    #[arg(short, long)]
    pub quiet: bool,
}

impl GenerateArgs {
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            count: self.count,
            seed: self.seed,
            today: self.today,
            unique_phones: !self.legacy_phones,
            out: self.out.clone(),
        }
    }
}

/// Scrape the fixed encyclopedia page list into a CSV.
#[derive(Debug, Parser)]
#[command(name = "scrape", version)]
pub struct ScrapeArgs {
    /// Output CSV path
    #[arg(short, long, default_value = PAGES_FILE)]
    pub out: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Abort on the first failing page instead of skipping it
    #[arg(long)]
    pub fail_fast: bool,
}

impl ScrapeArgs {
    pub fn options(&self) -> ScrapeOptions {
        ScrapeOptions {
            timeout: Duration::from_secs(self.timeout),
            on_error: if self.fail_fast { FailurePolicy::Abort } else { FailurePolicy::Skip },
            out: self.out.clone(),
            ..ScrapeOptions::default()
        }
    }
}

/// Prints one line per page to stderr.
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {label}", self.done, self.total);
    }
    fn item_failed(&mut self, label: &str, reason: &str) {
        self.done += 1;
        eprintln!("[{}/{}] FAILED {label}: {reason}", self.done, self.total);
    }
}

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let opts = args.options();
    let records = generate::generate(&opts, None).wrap_err("generation failed")?;
    let ds = DataSet::from_records(&records);

    file::write_dataset(&opts.out, &ds, ',', true)
        .wrap_err_with(|| format!("could not write {}", opts.out.display()))?;
    println!("Data saved to '{}'", opts.out.display());

    if !args.quiet {
        println!("\nDataset Summary:");
        print!("{}", report::summarize(&ds));
    }
    Ok(())
}

/// Width-limited, single-line preview of a cell.
fn preview(cell: &str, width: usize) -> String {
    let flat: String = cell.chars().map(|c| if c.is_control() { ' ' } else { c }).collect();
    if flat.chars().count() <= width {
        flat
    } else {
        let cut: String = flat.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

pub fn run_scrape(args: &ScrapeArgs) -> Result<()> {
    let opts = args.options();
    let fetcher = HttpFetcher::with_timeout(opts.timeout).wrap_err("could not build HTTP client")?;

    let mut progress = CliProgress { done: 0, total: 0 };
    let outcome = scrape::collect_pages(&fetcher, &opts, Some(&mut progress))?;
    let ds = outcome.dataset();

    for (i, row) in ds.rows.iter().take(5).enumerate() {
        println!("{i:>2}  {:<32}  {:<40}  {}", preview(&row[0], 32), preview(&row[1], 40), row[2]);
    }

    file::write_dataset(&opts.out, &ds, ',', true)
        .wrap_err_with(|| format!("could not write {}", opts.out.display()))?;
    println!("Data saved to '{}'", opts.out.display());

    if !outcome.failures.is_empty() {
        eprintln!("\n{} page(s) failed:", outcome.failures.len());
        for f in &outcome.failures {
            eprintln!("  {}  ({})", f.url, f.reason);
        }
    }
    if outcome.pages.is_empty() && !opts.urls.is_empty() {
        bail!("no page could be scraped");
    }
    Ok(())
}
