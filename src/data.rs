// src/data.rs
//
// Canonical record shape shared by the extractor, the scrape loop and export.
//
// Every scraped item yields exactly one record. Fields that can't be read
// degrade to a sentinel instead of dropping the record:
// - title  → "N/A"
// - price  → None
// - rating → 0

pub const TITLE_MISSING: &str = "N/A";
pub const RATING_UNKNOWN: u8 = 0;

#[derive(Clone, Debug, PartialEq)]
pub struct BookRecord {
    pub title: String,
    pub price: Option<f64>,
    /// 1..=5 stars; 0 = unrecognized or absent, not a real zero rating.
    pub rating: u8,
}

impl BookRecord {
    /// Build from optional fields, resolving each absent one to its sentinel.
    pub fn from_parts(title: Option<String>, price: Option<f64>, rating_word: Option<&str>) -> Self {
        Self {
            title: title.unwrap_or_else(|| s!(TITLE_MISSING)),
            price,
            rating: rating_word.map_or(RATING_UNKNOWN, rating_from_word),
        }
    }

    /// Export cells in header order (`Title, Price, Rating`).
    /// Missing price is an empty cell.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.price.map(|p| p.to_string()).unwrap_or_default(),
            self.rating.to_string(),
        ]
    }
}

/// Star-rating class word → stars.
pub fn rating_from_word(word: &str) -> u8 {
    match word {
        "One" => 1,
        "Two" => 2,
        "Three" => 3,
        "Four" => 4,
        "Five" => 5,
        _ => RATING_UNKNOWN,
    }
}
