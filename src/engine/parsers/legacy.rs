//! Legacy layout: every entry is a `div.chart-list-item` carrying rank, title
//! and artist as data attributes, with stat cells nested inside it.

use scraper::{ElementRef, Html};
use tracing::debug;

use super::{ChartMeta, IssueMeta, ParsedPage, og_title, swap_artist_only};
use crate::engine::cleaner::{parse_position, trailing_segment};
use crate::engine::extract::{
    element_text, extract_attr, extract_image, extract_int, select_all, select_first,
};
use crate::engine::selectors::LEGACY;
use crate::error::ParseError;
use crate::models::RawEntryFields;

pub fn parse(doc: &Html) -> Result<ParsedPage, ParseError> {
    let root = doc.root_element();
    let meta = parse_meta(root)?;
    let dated = meta.issue.is_dated();

    let items = select_all(root, "entry", LEGACY.entry)?;
    debug!("legacy layout: {} items, dated={}", items.len(), dated);

    let entries = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| parse_entry(item, dated).map_err(|e| e.at_entry(i)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedPage { meta, entries })
}

fn parse_entry(item: ElementRef<'_>, dated: bool) -> Result<RawEntryFields, ParseError> {
    let rank_text = extract_attr(item, LEGACY.rank_attr).ok_or_else(|| ParseError::missing("rank"))?;
    let rank = parse_position(&rank_text)
        .ok_or_else(|| ParseError::new("rank", format!("`{}` is not a number", rank_text)))?;

    let (title, artist) = swap_artist_only(
        extract_attr(item, LEGACY.title_attr),
        extract_attr(item, LEGACY.artist_attr),
    );
    let artist = artist.ok_or_else(|| ParseError::new("artist", "no title or artist attribute"))?;

    let image = extract_image(item, &LEGACY.image)?;

    // Positional history only exists on dated issues.
    let (peak_raw, last_raw, weeks_raw) = if dated {
        (
            extract_int(item, &LEGACY.peak)?,
            extract_int(item, &LEGACY.last)?,
            extract_int(item, &LEGACY.weeks)?,
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
    let title = match select_first(root, "title", LEGACY.chart_title)? {
        Some(h1) => select_first(h1, "title", LEGACY.chart_title_img)?
            .and_then(|img| extract_attr(img, "alt"))
            .or_else(|| Some(element_text(h1)).filter(|t| !t.is_empty())),
        None => None,
    };
    let title = match title {
        Some(t) => Some(t),
        None => og_title(root)?,
    };

    let current = select_first(root, "date", LEGACY.date_button)?
        .map(element_text)
        .filter(|t| !t.is_empty());

    Ok(ChartMeta {
        title,
        issue: IssueMeta::Dated {
            current,
            previous: neighbour_link(root, "previousDate", LEGACY.prev_icon)?,
            next: neighbour_link(root, "nextDate", LEGACY.next_icon)?,
        },
    })
}

/// Date from the anchor enclosing a navigation icon; the date is the href's
/// last path segment. An icon without a linked anchor means no such issue.
fn neighbour_link(root: ElementRef<'_>, field: &str, icon: &str) -> Result<Option<String>, ParseError> {
    let Some(icon) = select_first(root, field, icon)? else {
        return Ok(None);
    };
    Ok(icon
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "a")
        .and_then(|a| extract_attr(a, "href"))
        .and_then(|href| trailing_segment(&href).map(str::to_string)))
}
