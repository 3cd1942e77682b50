//! Text normalisers shared by the field extractors and the date resolver.

use chrono::NaiveDate;

/// Collapse runs of whitespace (including the newlines markup leaves between
/// inline elements) and trim.
pub fn normalise_text(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `true` when a cell carries no value: empty, or exactly the layout's sentinel.
pub fn is_blank(s: &str, sentinel: &str) -> bool {
    let s = s.trim();
    s.is_empty() || s == sentinel || s == "—" || s == "N/A"
}

/// Parse a chart position or counter. Tolerates thousands separators and a
/// leading `#` ("#1" on some rank badges).
pub fn parse_position(s: &str) -> Option<u32> {
    let cleaned: String = s
        .trim()
        .trim_start_matches('#')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    cleaned.parse().ok()
}

/// Parse an issue date as the origin prints it: "August 3, 1996" on the
/// date-picker button, ISO in data attributes and hrefs.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = normalise_text(s);

    const FORMATS: [&str; 4] = ["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&s, fmt).ok())
}

/// Parse a four-digit year label.
pub fn parse_year(s: &str) -> Option<i32> {
    let s = s.trim();
    if s.len() == 4 && s.chars().all(|c| c.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

/// Last non-empty path segment of an href: `/charts/hot-100/1996-08-03` → `1996-08-03`.
pub fn trailing_segment(href: &str) -> Option<&str> {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|seg| !seg.is_empty())
}

/// Drop the site suffix from a `<title>`/`og:title` value.
pub fn strip_site_suffix(s: &str) -> String {
    let s = normalise_text(s);
    match s.split_once(" | ") {
        Some((head, _)) => head.trim().to_string(),
        None => s,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
