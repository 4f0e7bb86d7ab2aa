// src/bin/generate.rs
use clap::Parser;
use crm_synth::cli::{ self, GenerateArgs };

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = GenerateArgs::parse();
    cli::run_generate(&args)
}
