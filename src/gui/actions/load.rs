// src/gui/actions/load.rs
//! "Load CSV": read a previously written table back into the dashboard.
//! The header row decides which tab it lands in.

use std::{ fs, path::Path };

use crate::{
    config::options::DatasetKind,
    error::{ Error, Result },
    gui::app::App,
    store::DataSet,
};

fn read_table(path: &Path) -> Result<(DatasetKind, DataSet)> {
    let text = fs::read_to_string(path)?;
    let sep = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => '\t',
        _ => ',',
    };
    let ds = DataSet::from_text(&text, sep, true);
    let kind = ds
        .headers
        .as_deref()
        .and_then(DatasetKind::detect)
        .ok_or_else(|| Error::Shape(format!("{}: header row matches neither table", path.display())))?;
    ds.check_shape()?;
    Ok((kind, ds))
}

pub fn load(app: &mut App) {
    let text = app.state.gui.load_path_text.trim().to_owned();
    if text.is_empty() {
        app.status("Enter a CSV path to load");
        return;
    }

    match read_table(Path::new(&text)) {
        Ok((kind, ds)) => {
            logf!("Load: {} → {:?} rows={}", text, kind, ds.row_count());
            let n = ds.row_count();
            app.state.gui.current = kind;
            app.install(kind, ds);
            app.rebuild_view();
            app.status(format!("Loaded {n} row(s) from {text}"));
        }
        Err(e) => {
            loge!("Load: {}: {}", text, e);
            app.status(format!("Load error: {e}"));
        }
    }
}
