// src/core/html.rs

// Optional-field queries over a parsed element. Each returns `None` when the
// node or attribute is missing; callers pick the per-field default.

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

/// First descendant matching `sel`.
pub fn first<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}

/// Attribute of the first descendant matching `sel`.
pub fn attr_of(scope: ElementRef<'_>, sel: &Selector, attr: &str) -> Option<String> {
    first(scope, sel)?.value().attr(attr).map(String::from)
}

/// Whitespace-normalized text of the first descendant matching `sel`.
pub fn text_of(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    let el = first(scope, sel)?;
    let raw: String = el.text().collect();
    Some(normalize_ws(&raw))
}

/// Class tokens of the first descendant matching `sel`, in source order.
pub fn class_tokens(scope: ElementRef<'_>, sel: &Selector) -> Option<Vec<String>> {
    let class = first(scope, sel)?.value().attr("class")?;
    Some(class.split_whitespace().map(String::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn sel(s: &str) -> Selector {
        Selector::parse(s).unwrap()
    }

    #[test]
    fn queries_report_absence() {
        let doc = Html::parse_fragment(r#"<div><p class="a  b">  x <b>y</b> </p></div>"#);
        let root = doc.root_element();

        assert_eq!(text_of(root, &sel("p")).as_deref(), Some("x y"));
        assert_eq!(class_tokens(root, &sel("p")), Some(vec![s!("a"), s!("b")]));
        assert_eq!(attr_of(root, &sel("p"), "title"), None);
        assert_eq!(text_of(root, &sel("span")), None);
        assert_eq!(class_tokens(root, &sel("b")), None);
    }
}
