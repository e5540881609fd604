// tests/aggregate.rs
//
// Scrape loop + runner with a canned fetcher (no network).
//
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use catalog_scrape::config::options::{AppOptions, ScrapeOptions};
use catalog_scrape::core::net::{Fetch, FetchError};
use catalog_scrape::progress::NullProgress;
use catalog_scrape::runner::{self, Outcome};
use catalog_scrape::scrape::Aggregator;
use catalog_scrape::specs::books;

const PAGE_1: &str = include_str!("fixtures/page-1.html");
const PAGE_2: &str = include_str!("fixtures/page-2.html");
const PAGE_3: &str = include_str!("fixtures/page-3.html");

const TEMPLATE: &str = "http://catalog.test/page-{n}.html";

/// Serves fixture pages by URL; anything else is a 404.
struct Canned(HashMap<String, &'static str>);

impl Canned {
    fn pages(pages: &[(u32, &'static str)]) -> Self {
        Canned(pages.iter().map(|(n, doc)| (TEMPLATE.replace("{n}", &n.to_string()), *doc)).collect())
    }
}

impl Fetch for Canned {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.0.get(url)
            .map(|doc| doc.to_string())
            .ok_or_else(|| FetchError::Status { url: url.to_string(), status: 404 })
    }
}

fn scrape_options(pages: u32) -> ScrapeOptions {
    ScrapeOptions { base_url: TEMPLATE.to_string(), pages, ..ScrapeOptions::default() }
}

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("catalog_scrape_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn pages_concatenate_in_order() {
    let fetcher = Canned::pages(&[(1, PAGE_1), (2, PAGE_2), (3, PAGE_3)]);
    let agg = Aggregator::new(scrape_options(3), fetcher);
    let all = agg.aggregate(3, None);

    let mut expected = books::parse_doc(PAGE_1);
    expected.extend(books::parse_doc(PAGE_2));
    expected.extend(books::parse_doc(PAGE_3));
    assert_eq!(all.len(), 6);
    assert_eq!(all, expected);
}

#[test]
fn failed_page_is_skipped() {
    let fetcher = Canned::pages(&[(1, PAGE_1), (3, PAGE_3)]);
    let agg = Aggregator::new(scrape_options(3), &fetcher);
    let all = agg.aggregate(3, None);

    let mut expected = books::parse_doc(PAGE_1);
    expected.extend(books::parse_doc(PAGE_3));
    assert_eq!(all, expected);
}

#[test]
fn run_uses_configured_page_count() {
    let fetcher = Canned::pages(&[(1, PAGE_1), (2, PAGE_2), (3, PAGE_3)]);
    let agg = Aggregator::new(scrape_options(2), fetcher);
    assert_eq!(agg.run(Some(&mut NullProgress)).len(), 5);
}

#[test]
fn runner_exports_csv() {
    let dir = tmp_dir("export");
    let mut opts = AppOptions { scrape: scrape_options(3), ..AppOptions::default() };
    opts.export.set_path(dir.join("books.csv").to_str().unwrap());

    let fetcher = Canned::pages(&[(1, PAGE_1), (2, PAGE_2), (3, PAGE_3)]);
    let outcome = runner::run(&opts, fetcher, None).unwrap();
    let Outcome::Exported(summary) = outcome else { panic!("expected export") };

    assert_eq!(summary.path, dir.join("books.csv"));
    assert_eq!(summary.records.len(), 6);

    let text = fs::read_to_string(&summary.path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Title,Price,Rating");
    assert_eq!(lines[1], "A Light in the Attic,51.77,3");
    assert_eq!(lines[5], "\"How Music Works, Vol. 2\",37.32,2");
    assert_eq!(lines[6], "N/A,,0");
    assert_eq!(lines.len(), 7);
}

#[test]
fn runner_skips_export_when_nothing_scraped() {
    let dir = tmp_dir("empty");
    let mut opts = AppOptions { scrape: scrape_options(3), ..AppOptions::default() };
    opts.export.set_path(dir.join("none.csv").to_str().unwrap());

    let outcome = runner::run(&opts, Canned::pages(&[]), None).unwrap();
    assert!(matches!(outcome, Outcome::Empty));
    assert!(!dir.join("none.csv").exists());
}
