// src/bin/scrape.rs
use clap::Parser;
use crm_synth::cli::{ self, ScrapeArgs };

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = ScrapeArgs::parse();
    cli::run_scrape(&args)
}
