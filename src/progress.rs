// src/progress.rs
/// Lightweight progress reporting used by long-running operations (generate/scrape).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (a record drawn, a page scraped).
    fn item_done(&mut self, _label: &str) {}

    /// Called when one logical unit fails and the run carries on.
    fn item_failed(&mut self, _label: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
