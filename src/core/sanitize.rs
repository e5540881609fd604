// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

fn is_numeric_start(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | ',' | '-' | '+')
}

/// Drop any leading currency glyphs (`£`, `$`, or a mis-decoded `Â£`) and
/// surrounding whitespace.
pub fn strip_currency(s: &str) -> &str {
    s.trim().trim_start_matches(|c: char| !is_numeric_start(c)).trim_end()
}

/// Parse a displayed price into a number. Thousands separators are ignored.
/// `None` when nothing numeric is left.
pub fn parse_price(s: &str) -> Option<f64> {
    let num: String = strip_currency(s).chars().filter(|&c| c != ',').collect();
    num.parse::<f64>().ok().filter(|v| v.is_finite())
}
