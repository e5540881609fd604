// tests/extract_fixtures.rs
//
// Page extractor against saved listing pages.
//
use catalog_scrape::data::BookRecord;
use catalog_scrape::specs::books;

const PAGE_1: &str = include_str!("fixtures/page-1.html");
const PAGE_2: &str = include_str!("fixtures/page-2.html");
const PAGE_3: &str = include_str!("fixtures/page-3.html");
const EMPTY: &str = include_str!("fixtures/empty.html");

fn rec(title: &str, price: Option<f64>, rating: u8) -> BookRecord {
    BookRecord { title: title.to_string(), price, rating }
}

#[test]
fn page_one_in_document_order() {
    let recs = books::parse_doc(PAGE_1);
    assert_eq!(recs, vec![
        rec("A Light in the Attic", Some(51.77), 3),
        rec("Tipping the Velvet", Some(53.74), 1),
        rec("It's Only the Himalayas", Some(45.17), 5),
    ]);
}

#[test]
fn full_title_comes_from_attribute_not_link_text() {
    let recs = books::parse_doc(PAGE_2);
    assert_eq!(recs[1].title, "How Music Works, Vol. 2");
    assert_eq!(recs[0].price, Some(12.84)); // mis-decoded "Â£"
}

#[test]
fn broken_item_degrades_to_sentinels() {
    let recs = books::parse_doc(PAGE_3);
    assert_eq!(recs, vec![rec("N/A", None, 0)]);
}

#[test]
fn page_without_items_is_empty() {
    assert!(books::extract(EMPTY, "page-404.html").is_empty());
}

#[test]
fn extract_is_repeatable() {
    let a = books::extract(PAGE_1, "page-1.html");
    let b = books::extract(PAGE_1, "page-1.html");
    assert_eq!(a, b);
}
