// src/runner.rs
use std::path::PathBuf;

use tracing::info;

use crate::{
    config::options::AppOptions,
    core::net::Fetch,
    data::BookRecord,
    file::{self, ExportError},
    progress::Progress,
    scrape::Aggregator,
};

/// What a run produced.
#[derive(Debug)]
pub enum Outcome {
    /// Nothing was scraped; no file was written.
    Empty,
    Exported(RunSummary),
}

#[derive(Debug)]
pub struct RunSummary {
    pub path: PathBuf,
    pub records: Vec<BookRecord>,
}

/// Scrape every configured page, then export unless the result is empty.
/// Per-page failures are absorbed by the aggregator; only export IO can fail here.
pub fn run<F: Fetch>(
    options: &AppOptions,
    fetcher: F,
    progress: Option<&mut dyn Progress>,
) -> Result<Outcome, ExportError> {
    let aggregator = Aggregator::new(options.scrape.clone(), fetcher);
    let records = aggregator.run(progress);

    if records.is_empty() {
        return Ok(Outcome::Empty);
    }

    let path = file::write_export(&options.export, &records)?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(Outcome::Exported(RunSummary { path, records }))
}
