// src/config/consts.rs

// Generator
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_RECORD_COUNT: usize = 1000;
pub const CONTACTS_FILE: &str = "crm_synthetic_data.csv";

// Scraper
pub const PAGES_FILE: &str = "wikipedia_content.csv";
pub const USER_AGENT: &str = concat!("crm_synth/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
