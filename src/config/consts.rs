// src/config/consts.rs

// Net config
pub const BASE_URL_TEMPLATE: &str = "https://books.toscrape.com/catalogue/page-{n}.html";
pub const PAGE_PLACEHOLDER: &str = "{n}";
pub const USER_AGENT: &str = concat!("catalog_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Scrape
pub const DEFAULT_PAGES: u32 = 3;

// Export
pub const DEFAULT_FILE: &str = "scraped_books_catalog";
pub const HEADERS: [&str; 3] = ["Title", "Price", "Rating"];

// Console summary
pub const PREVIEW_ROWS: usize = 5;
