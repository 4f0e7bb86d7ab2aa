// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,load,generate,scrape}.

mod copy;     // src/gui/actions/copy.rs
mod export;   // src/gui/actions/export.rs
mod load;     // src/gui/actions/load.rs
mod jobs;     // src/gui/actions/jobs.rs

pub use copy::copy;
pub use export::export;
pub use load::load;
pub use jobs::{ generate, scrape };
