// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod csv;
pub mod file;
pub mod filter;
pub mod generate;
pub mod persona;
pub mod progress;
pub mod record;
pub mod reference;
pub mod report;
pub mod scrape;
pub mod store;
pub mod synth;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
