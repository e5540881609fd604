// src/scrape.rs
use tracing::{info, warn};

use crate::{
    config::options::ScrapeOptions,
    core::net::Fetch,
    data::BookRecord,
    progress::Progress,
    specs::books,
};

/// Drives the page extractor over `1..=pages`, strictly in order.
pub struct Aggregator<F> {
    options: ScrapeOptions,
    fetcher: F,
}

impl<F: Fetch> Aggregator<F> {
    pub fn new(options: ScrapeOptions, fetcher: F) -> Self {
        Self { options, fetcher }
    }

    /// Scrape the configured page count.
    pub fn run(&self, progress: Option<&mut dyn Progress>) -> Vec<BookRecord> {
        self.aggregate(self.options.pages, progress)
    }

    /// Collect records from pages `1..=page_count`: page order, then in-page order.
    /// A page that fails to fetch contributes nothing; it never aborts the run.
    pub fn aggregate(
        &self,
        page_count: u32,
        mut progress: Option<&mut dyn Progress>,
    ) -> Vec<BookRecord> {
        if let Some(p) = progress.as_deref_mut() {
            p.begin(page_count);
        }

        let mut all = Vec::new();
        for page in 1..=page_count {
            let url = self.options.page_url(page);
            info!("Scraping page {page}...");
            if let Some(p) = progress.as_deref_mut() {
                p.page_started(page, &url);
            }

            match self.fetcher.fetch(&url) {
                Ok(doc) => {
                    let records = books::extract(&doc, &url);
                    if let Some(p) = progress.as_deref_mut() {
                        p.page_done(page, records.len());
                    }
                    all.extend(records);
                }
                Err(e) => {
                    warn!("Error fetching {url}: {e}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.page_failed(page, &e.to_string());
                    }
                }
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        all
    }
}
