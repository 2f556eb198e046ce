// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, PoisonError},
};

use eframe::egui;
use tracing::info;

use crate::{
    config::{
        options::AppOptions,
        state::{AppState, Tab},
    },
    extract::SalesLineRecord,
    report::{ArtifactCache, DashboardModel},
};

use super::{actions, components};

pub fn run(native: eframe::NativeOptions, options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Sales Performance Dashboard",
        native,
        Box::new(move |_cc| Ok(Box::new(App::new(AppState { options, ..AppState::default() })))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // dashboard: artifacts memoized for the whole session
    pub cache: ArtifactCache,
    pub dashboard: Option<Result<DashboardModel, String>>,
    pub data_dir_text: String,

    // receipts tab
    pub records: Vec<SalesLineRecord>,

    // output text field UX (mapped <-> ExportOptions on export)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        let data_dir_text = state.options.report.data_dir.to_string_lossy().into_owned();

        if state.gui.inputs_text.is_empty() {
            state.gui.inputs_text = state
                .options
                .extract
                .inputs
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("\n");
        }

        info!(data_dir = %data_dir_text, "gui start");

        let mut app = Self {
            state,
            cache: ArtifactCache::new(),
            dashboard: None,
            data_dir_text,
            records: Vec::new(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
        };
        actions::load_dashboard(&mut app);
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            components::tabs::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status_text()));
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.gui.current_tab {
            Tab::Dashboard => {
                components::dashboard::draw(ui, self);
            }
            Tab::Receipts => {
                components::receipts::draw(ui, self);

                ui.separator();

                components::export_bar::draw(ui, self);

                ui.separator();

                components::data_table::draw(ui, self);
            }
        });
    }
}
