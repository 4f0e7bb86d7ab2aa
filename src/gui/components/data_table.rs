// src/gui/components/data_table.rs
//
// Draws the live table from `app.view`. Purely a view.

use eframe::egui::{ self, Align, Layout, RichText, TextWrapMode };
use egui_extras::{ Column, TableBuilder };
use crate::config::options::DatasetKind;
use crate::gui::app::App;
use crate::record::col;

/// Columns rendered centered (numbers, dates, codes).
fn is_centered(kind: DatasetKind, ci: usize) -> bool {
    match kind {
        DatasetKind::Contacts => matches!(
            ci,
            0 | col::GENDER | col::AGE_GROUP | 10 | 11 | col::PURCHASE_AMOUNT | col::PURCHASE_DATE | 20 | 24
        ),
        DatasetKind::Pages => false,
    }
}

fn initial_width(kind: DatasetKind, ci: usize) -> f32 {
    match (kind, ci) {
        (DatasetKind::Pages, 0) => 220.0,
        (DatasetKind::Pages, 1) => 520.0,
        (DatasetKind::Pages, _) => 320.0,
        (DatasetKind::Contacts, 1 | 2 | 13 | 23) => 170.0,
        (DatasetKind::Contacts, _) => 90.0,
    }
}

/// One line per cell; long page bodies are cut for display only.
fn display_cell(cell: &str) -> String {
    const MAX: usize = 200;
    let line = cell.lines().next().unwrap_or("");
    if line.chars().count() > MAX || line.len() < cell.trim_end().len() {
        let cut: String = line.chars().take(MAX).collect();
        format!("{cut}…")
    } else {
        s!(line)
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let kind = app.current_kind();
    let cols = app.view.ncols();
    if cols == 0 {
        ui.label("No data. Generate, scrape or load a CSV.");
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("inner_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("table_state", kind));
            for ci in 0..cols {
                table = table.column(
                    Column::initial(initial_width(kind, ci)).resizable(true).clip(true).at_least(20.0),
                );
            }

            let view = &app.view;
            table
                .header(24.0, |mut header| {
                    for ci in 0..cols {
                        let label = view.headers()
                            .and_then(|h| h.get(ci).cloned())
                            .unwrap_or_else(|| format!("Col {}", ci + 1));
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.add(egui::Label::new(RichText::new(label).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, view.nrows(), |mut row| {
                        let Some(data) = view.rows().get(row.index()) else { return };
                        for ci in 0..cols {
                            let text = data.get(ci).map(|c| display_cell(c)).unwrap_or_default();
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if is_centered(kind, ci) {
                                    ui.centered_and_justified(|ui| { ui.label(text); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                                }
                            });
                        }
                    });
                });
        });
}
