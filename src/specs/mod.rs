// src/specs/mod.rs
//! # Page extractors
//!
//! Page-specific extraction: each module knows *where the ground truth lives in
//! the HTML* of one kind of page and how to read it tolerantly.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched markup. No network, no files.
//! - **Selector choice** for item containers and their fields.
//! - **Per-field defaulting** via `data::BookRecord::from_parts`: a missing or
//!   malformed field degrades to its sentinel, the record is always kept.
//!
//! ## What does **not** live here
//! - Fetching and page iteration (`scrape`).
//! - Export formatting (`csv`, `file`).
//!
//! ## Testing notes
//! Extractors are tested offline against saved fixtures (`tests/fixtures/`).
pub mod books;
