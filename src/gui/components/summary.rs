// src/gui/components/summary.rs
//
// Collapsible summary report over the rows currently shown.

use eframe::egui;
use crate::gui::app::App;
use crate::report::{ REGION_COL, SEGMENT_COL };

fn share_grid(ui: &mut egui::Ui, id: &str, title: &str, items: &[(String, f64)]) {
    ui.vertical(|ui| {
        ui.strong(title);
        egui::Grid::new(id).striped(true).show(ui, |ui| {
            for (name, share) in items {
                ui.label(name);
                ui.monospace(format!("{:>5.1}%", share * 100.0));
                ui.end_row();
            }
        });
    });
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(sum) = &app.summary else { return };

    let header = if app.view.is_filtered() {
        format!("Summary ({} of {} rows, filtered)", sum.rows, app.view.total)
    } else {
        format!("Summary ({} rows)", sum.rows)
    };
    let resp = egui::CollapsingHeader::new(header)
        .id_salt("summary")
        .default_open(app.state.gui.show_summary)
        .show(ui, |ui| {
            ui.horizontal_top(|ui| {
                share_grid(ui, "region_share", &format!("{REGION_COL} share"), &sum.region_shares);
                ui.separator();
                share_grid(ui, "segment_share", &format!("{SEGMENT_COL} share"), &sum.segment_shares);
                ui.separator();
                ui.vertical(|ui| {
                    ui.strong("Mean amount by segment");
                    egui::Grid::new("segment_mean").striped(true).show(ui, |ui| {
                        for (name, mean) in &sum.mean_amount_by_segment {
                            ui.label(name);
                            ui.monospace(format!("₹{mean:.2}"));
                            ui.end_row();
                        }
                    });
                });
                ui.separator();
                ui.vertical(|ui| {
                    ui.strong("Distinct values");
                    egui::ScrollArea::vertical().id_salt("distinct_scroll").max_height(160.0).show(ui, |ui| {
                        egui::Grid::new("distinct").striped(true).show(ui, |ui| {
                            for (name, n) in &sum.distinct {
                                ui.label(name);
                                ui.monospace(n.to_string());
                                ui.end_row();
                            }
                        });
                    });
                });
            });
        });
    let open = resp.body_returned.is_some();
    app.state.gui.show_summary = open;
    ui.separator();
}
