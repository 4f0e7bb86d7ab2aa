// src/gui/actions/export.rs
use crate::{ file, gui::app::App };

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path(app.current_kind()).display()
        );
        app.out_path_dirty = false;
    }

    if app.view.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let kind = app.current_kind();
    let export = &app.state.options.export;
    logf!(
        "Export: Begin tab={:?}, rows={}, format={:?}, headers={}",
        kind,
        app.view.nrows(),
        export.format,
        export.include_headers
    );

    let status_msg = match file::write_export(export, kind, &app.view.data) {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            format!("Exported {} row(s) to {}", app.view.nrows(), path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    // the path text now mirrors what was actually written
    app.out_path_text = export.out_path(kind).to_string_lossy().into_owned();
    app.status(status_msg);
}
