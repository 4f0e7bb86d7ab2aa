// src/gui/components/tabs.rs
//
// Renders the dataset tabs and performs the tab switch itself.
// On switch the table is rebuilt from canonical data; the output path text
// follows the new tab's default name unless the user has typed one.

use eframe::egui;
use crate::config::options::DatasetKind;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_kind();

        for kind in DatasetKind::ALL {
            let selected = kind == cur;
            let rows = app.data.get(&kind).map(|d| d.row_count()).unwrap_or(0);
            let label = format!("{} ({rows})", kind.title());

            if ui.selectable_label(selected, label).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", cur, kind);
                app.state.gui.current = kind;
                app.rebuild_view();

                if !app.out_path_dirty {
                    app.out_path_text = app.state.options.export
                        .out_path(kind)
                        .to_string_lossy()
                        .into_owned();
                }
            }
        }
    });
}
