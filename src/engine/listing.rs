//! Chart slugs from the chart listing pages.

use scraper::Html;
use std::collections::BTreeSet;

use super::extract::{extract_attr, select_all};
use super::selectors::LISTING_LINK;
use crate::error::ParseError;

/// Sorted, de-duplicated chart names linked from a listing page.
///
/// Weekly charts link as `/charts/<name>`; year-end charts as
/// `/charts/year-end/<year>/<name>`.
pub fn parse_chart_names(html: &str, year_end: bool) -> Result<Vec<String>, ParseError> {
    let doc = Html::parse_document(html);
    let mut names = BTreeSet::new();

    for link in select_all(doc.root_element(), "chart link", LISTING_LINK)? {
        let Some(href) = extract_attr(link, "href") else {
            continue;
        };
        if let Some(name) = chart_slug(&href, year_end) {
            names.insert(name.to_string());
        }
    }

    Ok(names.into_iter().collect())
}

fn chart_slug(href: &str, year_end: bool) -> Option<&str> {
    let path = href.split(['?', '#']).next()?;
    let (_, tail) = path.split_once("/charts/")?;
    let segments: Vec<&str> = tail.split('/').filter(|s| !s.is_empty()).collect();

    match (year_end, segments.as_slice()) {
        (false, ["year-end", ..]) => None,
        (false, [name]) => Some(*name),
        (true, ["year-end", year, name]) if year.chars().all(|c| c.is_ascii_digit()) => Some(*name),
        _ => None,
    }
}
