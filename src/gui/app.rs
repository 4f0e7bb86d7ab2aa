// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    fs,
    sync::{ Arc, Mutex, mpsc::{ Receiver, TryRecvError } },
};

use eframe::egui;

use crate::{
    config::{
        consts::STORE_DIR,
        options::DatasetKind::{ self, * },
        state::AppState,
    },
    generate,
    report::{ self, Summary },
    store::{ self, DataSet },
};

use super::{ components, table_model::TableView };

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    // cache + debug.log live here; the CLI never creates it
    fs::create_dir_all(STORE_DIR)?;
    eframe::run_native(
        "CRM Synth",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// What a background job sends back when it is done.
pub enum JobResult {
    Done { kind: DatasetKind, ds: DataSet, note: String },
    Failed { kind: DatasetKind, error: String },
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // canonical data per tab
    pub data: HashMap<DatasetKind, DataSet>,

    // what the table shows for the CURRENT tab (filters applied)
    pub view: TableView,
    pub summary: Option<Summary>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub job: Option<Receiver<JobResult>>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let mut status = s!("Idle");

        // canonical cache(s) from disk
        let mut data: HashMap<DatasetKind, DataSet> = HashMap::new();
        for k in DatasetKind::ALL {
            match store::load_dataset(k) {
                Ok(ds) if ds.is_empty() => logd!("Cache: {:?} is empty, skipping", k),
                Ok(ds) => {
                    logf!("Cache: Loaded {:?} (rows={}, headers={})", k, ds.row_count(), ds.header_count());
                    data.insert(k, ds);
                    status = s!("Loaded local data");
                }
                Err(e) => logd!("Cache: Missing {:?} ({})", k, e),
            }
        }

        // activity window counts back from the run's reference date
        state.gui.filter.reference_date = Some(generate::resolve_today(&state.options.generate));

        let out_path_text = state.options.export
            .out_path(state.gui.current)
            .to_string_lossy()
            .into_owned();

        logf!("Init: cached={}, default tab={:?}", data.len(), Contacts);

        let mut app = Self {
            state,
            out_path_text,
            out_path_dirty: false,
            data,
            view: TableView::default(),
            summary: None,
            status: Arc::new(Mutex::new(status)),
            job: None,
        };
        app.rebuild_view();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_kind(&self) -> DatasetKind { self.state.gui.current }

    #[inline]
    pub fn running(&self) -> bool { self.job.is_some() }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Rebuild the table (and summary) for the current tab from canonical data.
    pub fn rebuild_view(&mut self) {
        let kind = self.current_kind();
        self.view = match self.data.get(&kind) {
            Some(ds) => TableView::build(kind, ds, &self.state.gui.filter),
            None => TableView::placeholder(kind),
        };
        self.summary = match kind {
            Contacts if !self.view.is_empty() => Some(report::summarize(&self.view.data)),
            _ => None,
        };
    }

    /// Replace the canonical data for `kind`, persist it and refresh.
    pub fn install(&mut self, kind: DatasetKind, ds: DataSet) {
        match store::save_dataset(kind, &ds) {
            Ok(p) => logf!("Cache: Saved {:?} → {}", kind, p.display()),
            Err(e) => loge!("Cache: Save failed {:?}: {}", kind, e),
        }
        self.data.insert(kind, ds);
        if kind == self.current_kind() {
            self.rebuild_view();
        }
    }

    /// Pick up a finished background job, if any.
    fn poll_job(&mut self) {
        let Some(rx) = &self.job else { return };
        match rx.try_recv() {
            Ok(JobResult::Done { kind, ds, note }) => {
                logf!("Job: OK {:?} rows={}", kind, ds.row_count());
                self.job = None;
                self.install(kind, ds);
                self.status(note);
            }
            Ok(JobResult::Failed { kind, error }) => {
                loge!("Job: Error {:?}: {}", kind, error);
                self.job = None;
                self.status(format!("Error: {error}"));
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                loge!("Job: worker vanished");
                self.job = None;
                self.status("Error: background job stopped unexpectedly");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_job();
        if self.running() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::SidePanel::left("filters")
            .resizable(false)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::action_bar::draw(ui, self);

            ui.separator();

            components::summary::draw(ui, self);

            components::data_table::draw(ui, self);
        });
    }
}
