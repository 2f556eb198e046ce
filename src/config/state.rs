// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Receipts,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Dashboard, Tab::Receipts];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Receipts => "Receipts",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub current_tab: Tab,
    pub window_w: u32,
    pub window_h: u32,
    /// Receipts tab: one report path per line
    pub inputs_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_tab: Tab::Dashboard,
            window_w: 1280,
            window_h: 860,
            inputs_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
