// src/gui/progress.rs
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
    records: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0, records: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, path: &Path, records: usize) {
        self.done += 1;
        self.records += records;
        self.set_status(format!("Read {} ({}/{}), {} record(s)", path.display(), self.done, self.total, records));
    }
    fn finish(&mut self) {
        self.set_status(format!("Extraction complete: {} record(s) from {} report(s)", self.records, self.done));
    }
}
