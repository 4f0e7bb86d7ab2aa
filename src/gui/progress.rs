// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

/// Mirrors pipeline progress into the shared status line.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    verb: &'static str,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, verb: &'static str) -> Self {
        Self { status, verb, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        // generation ticks per record; only repaint-worthy steps matter
        if self.total <= 100 || self.done % 50 == 0 || self.done == self.total {
            self.set_status(format!("{} {} ({}/{})", self.verb, label, self.done, self.total));
        }
    }
    fn item_failed(&mut self, label: &str, _reason: &str) {
        self.done += 1;
        self.failed += 1;
        self.set_status(format!("Failed {} ({}/{})", label, self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(format!("{} complete", self.verb));
        } else if self.failed > 0 {
            self.set_status(format!(
                "{} complete ({}/{}, {} failed)", self.verb, self.done, self.total, self.failed
            ));
        } else {
            self.set_status(format!("{} complete ({}/{})", self.verb, self.done, self.total));
        }
    }
}
