// src/gui/components/action_bar.rs
//
// Pipeline controls (Generate / Scrape), export controls (format, headers,
// output path, Copy / Export), the CSV loader and the status line.
// Layout only; the work happens in gui::actions.

use eframe::egui::{ self, widgets::Spinner };
use crate::{
    config::options::{ ExportFormat, FailurePolicy },
    gui::{ actions, app::App },
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let running = app.running();

    // --- Pipelines ---
    ui.horizontal(|ui| {
        let gen_opts = &mut app.state.options.generate;
        ui.label("Records:");
        ui.add(egui::DragValue::new(&mut gen_opts.count).range(1..=1_000_000));
        ui.label("Seed:");
        ui.add(egui::DragValue::new(&mut gen_opts.seed));
        ui.checkbox(&mut gen_opts.unique_phones, "Unique phones");

        if ui.add_enabled(!running, egui::Button::new("Generate")).clicked() {
            actions::generate(app);
        }

        ui.separator();

        let mut skip = app.state.options.scrape.on_error == FailurePolicy::Skip;
        if ui.checkbox(&mut skip, "Skip failed pages").changed() {
            app.state.options.scrape.on_error = if skip { FailurePolicy::Skip } else { FailurePolicy::Abort };
            logf!("UI: scrape policy → {:?}", app.state.options.scrape.on_error);
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        if ui
            .add_enabled(
                !running,
                egui::Button::new(egui::RichText::new("SCRAPE").color(black).strong()).fill(red),
            )
            .clicked()
        {
            actions::scrape(app);
        }

        if running {
            ui.add(Spinner::new());
        }
    });

    // --- Format + Include headers + Output ---
    ui.horizontal(|ui| {
        let kind = app.current_kind();
        let export = &mut app.state.options.export;

        let prev_fmt = export.format;
        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path(kind).to_string_lossy().into_owned();
            }
        }

        if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
            logf!("UI: Include_headers → {}", export.include_headers);
        }

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
    });

    // --- Load + Status ---
    ui.horizontal(|ui| {
        ui.label("Load CSV:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.load_path_text)
                .hint_text("crm_synthetic_data.csv")
                .font(egui::TextStyle::Monospace),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (ui.add_enabled(!running, egui::Button::new("Load")).clicked() || enter) && !running {
            actions::load(app);
        }

        ui.separator();
        ui.label(format!("Status: {}", app.status_text()));
    });
}
