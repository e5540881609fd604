// src/cli.rs
use std::io::{self, Write};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::WrapErr;

use crate::config::consts::{BASE_URL_TEMPLATE, DEFAULT_PAGES, PREVIEW_ROWS, REQUEST_TIMEOUT_SECS};
use crate::config::options::{AppOptions, ExportFormat};
use crate::core::net::HttpFetcher;
use crate::data::BookRecord;
use crate::progress::Progress;
use crate::runner::{self, Outcome};

#[derive(Parser, Debug)]
#[command(name = "catalog_scrape", version, about = "Scrape paginated book listings into a CSV/TSV file")]
pub struct Args {
    /// Number of listing pages to scrape (1..=N)
    #[arg(short = 'n', long, env = "CATALOG_PAGES", default_value_t = DEFAULT_PAGES)]
    pub pages: u32,

    /// Page URL template; `{n}` is replaced by the page number
    #[arg(long, env = "CATALOG_BASE_URL", default_value = BASE_URL_TEMPLATE)]
    pub base_url: String,

    /// Output file (or directory ending in `/`); default: ./scraped_books_catalog.<ext>
    #[arg(short, long)]
    pub out: Option<String>,

    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Omit the `Title,Price,Rating` header row
    #[arg(long)]
    pub no_headers: bool,

    /// Rows to show in the summary preview
    #[arg(long, default_value_t = PREVIEW_ROWS)]
    pub preview: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.scrape.base_url = self.base_url.clone();
        opts.scrape.pages = self.pages;
        opts.scrape.timeout = Duration::from_secs(self.timeout);
        opts.export.format = self.format.into();
        opts.export.include_headers = !self.no_headers;
        if let Some(out) = &self.out {
            opts.export.set_path(out);
        }
        opts
    }
}

/// Prints one line per page event. Console output is best-effort.
struct ConsoleProgress<W: Write> {
    out: W,
    url: String,
}

impl<W: Write> ConsoleProgress<W> {
    fn new(out: W) -> Self {
        Self { out, url: s!() }
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn page_started(&mut self, page: u32, url: &str) {
        self.url = s!(url);
        let _ = writeln!(self.out, "Scraping Page {page}...");
    }
    fn page_done(&mut self, _page: u32, records: usize) {
        let _ = writeln!(self.out, "-> Successfully scraped {records} books from: {}", self.url);
    }
    fn page_failed(&mut self, page: u32, msg: &str) {
        let _ = writeln!(self.out, "-> Page {page} skipped: {msg}");
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(&args.log_level);

    let options = args.to_options();
    let fetcher = HttpFetcher::new(options.scrape.timeout)?;

    println!("Starting Web Scraper...");
    let mut progress = ConsoleProgress::new(io::stdout());
    let outcome = runner::run(&options, fetcher, Some(&mut progress)).wrap_err("export failed")?;

    match outcome {
        Outcome::Empty => println!("No data was scraped. Check for errors."),
        Outcome::Exported(summary) => {
            println!("\n--- Summary ---");
            println!("Total books scraped: {}", summary.records.len());
            println!("Data saved successfully to: {}", summary.path.display());
            if args.preview > 0 {
                println!("\nFirst {} rows of data:", args.preview.min(summary.records.len()));
                print!("{}", format_preview(&summary.records, args.preview));
            }
        }
    }
    Ok(())
}

const TITLE_WIDTH: usize = 40;

/// Fixed-width table of the first `n` records.
pub fn format_preview(records: &[BookRecord], n: usize) -> String {
    let mut out = format!("{:>3} | {:<w$} | {:>8} | {:>6}\n", "#", "Title", "Price", "Rating", w = TITLE_WIDTH);
    out.push_str(&"-".repeat(TITLE_WIDTH + 26));
    out.push('\n');
    for (i, r) in records.iter().take(n).enumerate() {
        let price = r.price.map(|p| format!("{p:.2}")).unwrap_or_else(|| s!("-"));
        out.push_str(&format!(
            "{:>3} | {:<w$} | {:>8} | {:>6}\n",
            i, truncate(&r.title, TITLE_WIDTH), price, r.rating, w = TITLE_WIDTH
        ));
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 3).collect();
        format!("{}...", cut)
    }
}
