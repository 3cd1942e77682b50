//! Modern layout: one `ul` per entry, cells addressed by position, stats
//! addressed by a `chart-meta--{peak,last,week}` modifier class. Artist images
//! come from a page-level JSON payload rather than the rows.

use scraper::{ElementRef, Html};
use serde::Deserialize;
use tracing::debug;

use super::{ChartMeta, IssueMeta, ParsedPage, og_title, swap_artist_only};
use crate::engine::cleaner::parse_position;
use crate::engine::extract::{
    child_elements, element_text, extract, extract_attr, extract_int, select_all, select_first,
};
use crate::engine::selectors::MODERN;
use crate::error::ParseError;
use crate::models::RawEntryFields;

/// One record of the `#chart-images` payload.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
struct ImageHint {
    artist: String,
    #[serde(default)]
    title: Option<String>,
    url: String,
}

pub fn parse(doc: &Html) -> Result<ParsedPage, ParseError> {
    let root = doc.root_element();
    let meta = parse_meta(root)?;
    let dated = meta.issue.is_dated();

    let offset = award_offset(root)?;
    let images = image_hints(root)?;

    let rows = select_all(root, "entry", MODERN.row)?;
    debug!(
        "modern layout: {} rows, award column={}, {} image hints, dated={}",
        rows.len(),
        offset == 1,
        images.len(),
        dated
    );

    let entries = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| parse_row(row, offset, dated, &images).map_err(|e| e.at_entry(i)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedPage { meta, entries })
}

/// 1 when the header row advertises the award column, which sits right after
/// the rank and pushes every later cell one position right.
fn award_offset(root: ElementRef<'_>) -> Result<usize, ParseError> {
    let Some(header) = select_first(root, "header", MODERN.header)? else {
        return Ok(0);
    };
    let has_award = child_elements(header).into_iter().any(|cell| {
        cell.value().classes().any(|c| c.contains(MODERN.award_keyword))
            || element_text(cell).to_lowercase().contains(MODERN.award_keyword)
    });
    Ok(usize::from(has_award))
}

fn parse_row(
    row: ElementRef<'_>,
    offset: usize,
    dated: bool,
    images: &[ImageHint],
) -> Result<RawEntryFields, ParseError> {
    let cells = child_elements(row);

    let rank_cell = cells.get(MODERN.rank_col).ok_or_else(|| ParseError::missing("rank"))?;
    let rank_text = element_text(*rank_cell);
    let rank = parse_position(&rank_text)
        .ok_or_else(|| ParseError::new("rank", format!("`{}` is not a number", rank_text)))?;

    let info = cells
        .get(MODERN.info_col + offset)
        .ok_or_else(|| ParseError::missing("title"))?;
    let (title, artist) = swap_artist_only(extract(*info, &MODERN.title)?, extract(*info, &MODERN.artist)?);
    let artist = artist.ok_or_else(|| ParseError::new("artist", "empty title and artist"))?;

    let image = lookup_image(images, title.as_deref(), &artist);

    let (peak_raw, last_raw, weeks_raw) = if dated {
        (
            extract_int(row, &MODERN.peak)?,
            extract_int(row, &MODERN.last)?,
            extract_int(row, &MODERN.weeks)?,
        )
    } else {
        (None, None, None)
    };

    Ok(RawEntryFields {
        title,
        artist,
        image,
        rank,
        peak_raw,
        last_raw,
        weeks_raw,
    })
}

fn parse_meta(root: ElementRef<'_>) -> Result<ChartMeta, ParseError> {
    let title = select_first(root, "title", MODERN.chart_title)?
        .map(element_text)
        .filter(|t| !t.is_empty());
    let title = match title {
        Some(t) => Some(t),
        None => og_title(root)?,
    };

    let picker = select_first(root, "date", MODERN.date_picker)?;
    let attr = |name: &str| picker.and_then(|p| extract_attr(p, name));

    Ok(ChartMeta {
        title,
        issue: IssueMeta::Dated {
            current: attr(MODERN.date_attr),
            previous: attr(MODERN.prev_attr),
            next: attr(MODERN.next_attr),
        },
    })
}

/// Images are optional: a missing or malformed payload only costs the images.
fn image_hints(root: ElementRef<'_>) -> Result<Vec<ImageHint>, ParseError> {
    let Some(script) = select_first(root, "image", MODERN.images_payload)? else {
        return Ok(Vec::new());
    };
    let raw: String = script.text().collect();
    match serde_json::from_str::<Vec<ImageHint>>(&raw) {
        Ok(hints) => Ok(hints),
        Err(e) => {
            debug!("ignoring unreadable image payload: {}", e);
            Ok(Vec::new())
        }
    }
}

/// Exact title+artist match first, then any hint for the artist.
fn lookup_image(hints: &[ImageHint], title: Option<&str>, artist: &str) -> Option<String> {
    let by_title = title.and_then(|t| {
        hints
            .iter()
            .find(|h| h.artist == artist && h.title.as_deref() == Some(t))
    });
    by_title
        .or_else(|| hints.iter().find(|h| h.artist == artist && h.title.is_none()))
        .or_else(|| hints.iter().find(|h| h.artist == artist))
        .map(|h| h.url.clone())
}
