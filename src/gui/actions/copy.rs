// src/gui/actions/copy.rs
use eframe::egui;
use crate::{ csv, gui::app::App };

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.view.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let txt = csv::to_export_string(
        &app.view.data.headers,
        app.view.rows(),
        export.include_headers,
        export.delim(),
    );
    logf!(
        "Copy: tab={:?}, rows={}, headers={}",
        app.current_kind(),
        app.view.nrows(),
        export.include_headers
    );

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
