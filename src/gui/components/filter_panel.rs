// src/gui/components/filter_panel.rs
//
// Left "Advanced Filters" panel for the Contacts tab. Edits
// `state.gui.filter` in place and rebuilds the table when anything changes.

use std::sync::OnceLock;

use eframe::egui;

use crate::{
    config::options::DatasetKind,
    filter::{ AMOUNT_CEILING, ActivityWindow },
    gui::app::App,
    reference::{ self, ReferenceTables },
};

struct Choices {
    regions: Vec<&'static str>,
    languages: Vec<&'static str>,
}

fn choices() -> &'static Choices {
    static CHOICES: OnceLock<Choices> = OnceLock::new();
    CHOICES.get_or_init(|| {
        let tables = ReferenceTables::builtin();
        let mut languages: Vec<&'static str> = Vec::new();
        for (_, langs) in &tables.languages {
            for l in langs {
                if !languages.contains(l) { languages.push(*l); }
            }
        }
        Choices { regions: tables.regions(), languages }
    })
}

/// "All" + one entry per option; writes `None` for "All".
fn option_combo(ui: &mut egui::Ui, label: &str, value: &mut Option<String>, options: &[&str]) -> bool {
    let before = value.clone();
    ui.label(label);
    egui::ComboBox::from_id_salt(label)
        .width(ui.available_width())
        .selected_text(value.as_deref().unwrap_or("All"))
        .show_ui(ui, |ui| {
            ui.selectable_value(value, None, "All");
            for opt in options {
                ui.selectable_value(value, Some(s!(*opt)), *opt);
            }
        });
    *value != before
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Advanced Filters");

    if app.current_kind() != DatasetKind::Contacts {
        ui.label("Filters apply to the Contacts tab.");
        return;
    }

    let c = choices();
    let mut changed = false;
    {
        let f = &mut app.state.gui.filter;

        changed |= option_combo(ui, "Age Group", &mut f.age_group, &reference::AGE_GROUPS);
        changed |= option_combo(ui, "Region", &mut f.region, &c.regions);

        ui.label("Gender");
        ui.horizontal(|ui| {
            for g in reference::GENDERS {
                let mut on = f.genders.iter().any(|x| x == g);
                if ui.checkbox(&mut on, g).changed() {
                    f.toggle_gender(g);
                    changed = true;
                }
            }
        });

        changed |= option_combo(ui, "Language", &mut f.language, &c.languages);

        ui.label("Purchase Activity");
        let before = f.activity;
        egui::ComboBox::from_id_salt("purchase_activity")
            .width(ui.available_width())
            .selected_text(f.activity.label())
            .show_ui(ui, |ui| {
                for w in ActivityWindow::ALL {
                    ui.selectable_value(&mut f.activity, w, w.label());
                }
            });
        changed |= f.activity != before;

        ui.label("Purchase Amount (₹)");
        changed |= ui.add(egui::Slider::new(&mut f.min_amount, 0..=AMOUNT_CEILING).text("Min")).changed();
        changed |= ui.add(egui::Slider::new(&mut f.max_amount, 0..=AMOUNT_CEILING).text("Max")).changed();
        if f.min_amount > f.max_amount {
            f.max_amount = f.min_amount;
        }
    }

    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Reset").clicked() {
            let reference_date = app.state.gui.filter.reference_date;
            app.state.gui.filter = Default::default();
            app.state.gui.filter.reference_date = reference_date;
            changed = true;
        }
        if let Some(d) = app.state.gui.filter.reference_date {
            ui.weak(format!("as of {d}"));
        }
    });

    if changed {
        logd!("UI: Filter → {}", app.state.gui.filter);
        app.rebuild_view();
        if !app.running() {
            app.status(format!("Showing {} of {} row(s)", app.view.nrows(), app.view.total));
        }
    }

    ui.separator();
    ui.add(egui::Label::new(egui::RichText::new(app.state.gui.filter.to_string()).small()).wrap());
}
