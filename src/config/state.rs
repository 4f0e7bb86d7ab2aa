// src/config/state.rs
use super::options::{ AppOptions, DatasetKind };
use crate::filter::ContactFilter;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active dataset tab
    pub current: DatasetKind,

    /// Dashboard side-panel filters (Contacts tab only)
    pub filter: ContactFilter,

    /// Show the summary report above the table
    pub show_summary: bool,

    /// Text field for "Load CSV"
    pub load_path_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current: DatasetKind::Contacts,
            filter: ContactFilter::default(),
            show_summary: true,
            load_path_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
