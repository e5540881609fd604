// src/progress.rs
/// Lightweight progress reporting for the page loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of pages.
    fn begin(&mut self, _total: u32) {}

    /// Called before a page is fetched.
    fn page_started(&mut self, _page: u32, _url: &str) {}

    /// Called when a page was fetched and parsed.
    fn page_done(&mut self, _page: u32, _records: usize) {}

    /// Called when a page could not be fetched; the loop carries on.
    fn page_failed(&mut self, _page: u32, _msg: &str) {}

    /// Called at the end.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
