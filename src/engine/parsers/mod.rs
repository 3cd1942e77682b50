//! One parser per [`LayoutKind`]. Each turns a document into chart-level
//! metadata plus raw per-entry fields, in page order.

pub mod legacy;
pub mod modern;
pub mod year_end;

use scraper::{ElementRef, Html};

use super::classify::LayoutKind;
use super::cleaner::strip_site_suffix;
use super::extract::{extract_attr, select_first};
use super::selectors::OG_TITLE;
use crate::error::ParseError;
use crate::models::RawEntryFields;

/// Issue metadata exactly as the page states it; normalised by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueMeta {
    Dated {
        current: Option<String>,
        previous: Option<String>,
        next: Option<String>,
    },
    Yearly {
        selected: Option<i32>,
        available: Vec<i32>,
    },
}

impl IssueMeta {
    /// Whether the page is a dated issue. Evergreen charts carry no date.
    pub fn is_dated(&self) -> bool {
        matches!(self, IssueMeta::Dated { current: Some(_), .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartMeta {
    pub title: Option<String>,
    pub issue: IssueMeta,
}

#[derive(Debug, Clone)]
pub struct ParsedPage {
    pub meta: ChartMeta,
    pub entries: Vec<RawEntryFields>,
}

pub fn parse(kind: LayoutKind, doc: &Html) -> Result<ParsedPage, ParseError> {
    match kind {
        LayoutKind::Legacy => legacy::parse(doc),
        LayoutKind::Modern => modern::parse(doc),
        LayoutKind::YearEnd => year_end::parse(doc),
    }
}

/// Artist-only charts put the artist into the title slot upstream. Move it
/// back and leave the title empty.
pub(crate) fn swap_artist_only(
    title: Option<String>,
    artist: Option<String>,
) -> (Option<String>, Option<String>) {
    match (title, artist) {
        (Some(t), None) => (None, Some(t)),
        other => other,
    }
}

/// Fallback chart title from the page's Open Graph metadata.
pub(crate) fn og_title(root: ElementRef<'_>) -> Result<Option<String>, ParseError> {
    Ok(select_first(root, "title", OG_TITLE)?
        .and_then(|meta| extract_attr(meta, "content"))
        .map(|t| strip_site_suffix(&t))
        .filter(|t| !t.is_empty()))
}
