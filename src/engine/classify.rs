use scraper::{Html, Selector};
use std::fmt;

use super::selectors::LEGACY;
use crate::models::RequestMode;

/// The page layouts the origin has served over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Single container of attribute-tagged items.
    Legacy,
    /// List rows with positional cells; the current format.
    Modern,
    YearEnd,
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LayoutKind::Legacy => "legacy",
            LayoutKind::Modern => "modern",
            LayoutKind::YearEnd => "year-end",
        })
    }
}

/// Decide which parser handles `doc`. Never fails: anything unrecognised is
/// treated as the current format and left to fail at extraction time.
pub fn classify(doc: &Html, mode: &RequestMode) -> LayoutKind {
    if mode.is_year_scoped() {
        return LayoutKind::YearEnd;
    }
    let has_legacy_marker = Selector::parse(LEGACY.marker)
        .map(|sel| doc.select(&sel).next().is_some())
        .unwrap_or(false);
    if has_legacy_marker {
        LayoutKind::Legacy
    } else {
        LayoutKind::Modern
    }
}
