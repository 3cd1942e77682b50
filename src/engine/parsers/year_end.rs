//! Year-end layout. Rank, title, artist and image only; neighbour years come
//! from the year dropdown.

use scraper::{ElementRef, Html};
use tracing::debug;

use super::{ChartMeta, IssueMeta, ParsedPage, og_title, swap_artist_only};
use crate::engine::cleaner::{parse_position, parse_year};
use crate::engine::extract::{element_text, extract, extract_image, select_all, select_first};
use crate::engine::selectors::YEAR_END;
use crate::error::ParseError;
use crate::models::RawEntryFields;

pub fn parse(doc: &Html) -> Result<ParsedPage, ParseError> {
    let root = doc.root_element();
    let meta = parse_meta(root)?;

    let items = select_all(root, "entry", YEAR_END.entry)?;
    debug!("year-end layout: {} items", items.len());

    let entries = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| parse_item(item).map_err(|e| e.at_entry(i)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedPage { meta, entries })
}

fn parse_item(item: ElementRef<'_>) -> Result<RawEntryFields, ParseError> {
    let rank_text = extract(item, &YEAR_END.rank)?.unwrap_or_default();
    let rank = parse_position(&rank_text)
        .ok_or_else(|| ParseError::new("rank", format!("`{}` is not a number", rank_text)))?;

    // Imprint and artist charts either drop the title cell or put the name
    // in it and leave the artist cell empty.
    let (title, artist) = swap_artist_only(extract(item, &YEAR_END.title)?, extract(item, &YEAR_END.artist)?);
    let artist = artist.ok_or_else(|| ParseError::new("artist", "empty title and artist"))?;

    Ok(RawEntryFields {
        title,
        artist,
        image: extract_image(item, &YEAR_END.image)?,
        rank,
        peak_raw: None,
        last_raw: None,
        weeks_raw: None,
    })
}

fn parse_meta(root: ElementRef<'_>) -> Result<ChartMeta, ParseError> {
    let title = select_first(root, "title", YEAR_END.chart_title)?
        .map(element_text)
        .filter(|t| !t.is_empty());
    let title = match title {
        Some(t) => Some(t),
        None => og_title(root)?,
    };

    let mut available = Vec::new();
    let mut selected = None;
    for option in select_all(root, "year", YEAR_END.year_option)? {
        let Some(year) = parse_year(&element_text(option)) else {
            continue;
        };
        if option.value().classes().any(|c| c == YEAR_END.selected_class) {
            selected = Some(year);
        }
        available.push(year);
    }
    available.sort_unstable();
    available.dedup();

    Ok(ChartMeta {
        title,
        issue: IssueMeta::Yearly { selected, available },
    })
}
