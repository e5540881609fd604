// src/specs/books.rs
//
// Catalog listing page → one record per `<article class="product_pod">`.
//
// Layout per item (books.toscrape.com):
//   <article class="product_pod">
//     <p class="star-rating Three"></p>
//     <h3><a href="..." title="Full Title">Short…</a></h3>
//     <div class="product_price"><p class="price_color">£51.77</p></div>
//   </article>

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::info;

use crate::core::html::{attr_of, class_tokens, text_of};
use crate::core::sanitize::parse_price;
use crate::data::BookRecord;

const RATING_CLASS: &str = "star-rating";

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad built-in selector {css:?}: {e}"))
}

static ITEM: LazyLock<Selector> = LazyLock::new(|| selector("article.product_pod"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("h3 a"));
static PRICE: LazyLock<Selector> = LazyLock::new(|| selector("p.price_color"));
static RATING: LazyLock<Selector> = LazyLock::new(|| selector("p.star-rating"));

/// Extract all items of one listing page, in document order.
/// `locator` only labels the progress line.
pub fn extract(doc: &str, locator: &str) -> Vec<BookRecord> {
    let records = parse_doc(doc);
    info!("Scraped {} books from: {}", records.len(), locator);
    records
}

/// Pure part of [`extract`]. No containers → empty vec.
pub fn parse_doc(doc: &str) -> Vec<BookRecord> {
    let html = Html::parse_document(doc);
    html.select(&ITEM).map(parse_item).collect()
}

fn parse_item(item: ElementRef<'_>) -> BookRecord {
    let title = attr_of(item, &TITLE, "title");
    let price = text_of(item, &PRICE).as_deref().and_then(parse_price);
    let rating_word = rating_token(item);
    BookRecord::from_parts(title, price, rating_word.as_deref())
}

/// The class next to `star-rating` (e.g. "Three"), if any.
fn rating_token(item: ElementRef<'_>) -> Option<String> {
    class_tokens(item, &RATING)?
        .into_iter()
        .find(|c| c != RATING_CLASS)
}
