//! Field extractors: small structural queries over a markup fragment.
//!
//! Three outcomes, kept distinct:
//! - `Ok(Some(v))`: value found;
//! - `Ok(None)` / the caller's default: element absent by design, or present
//!   but blank/sentinel;
//! - `Err(ParseError)`: a required element is missing or unreadable.

use scraper::{ElementRef, Selector};
use tracing::trace;

use super::cleaner::{is_blank, normalise_text, parse_position};
use super::selectors::{ImageField, Presence, StatField, TextField};
use crate::error::ParseError;

pub fn compile(field: &str, selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector)
        .map_err(|e| ParseError::new(field, format!("invalid selector `{}`: {:?}", selector, e)))
}

/// First descendant of `fragment` matching `selector`.
pub fn select_first<'a>(
    fragment: ElementRef<'a>,
    field: &str,
    selector: &str,
) -> Result<Option<ElementRef<'a>>, ParseError> {
    let sel = compile(field, selector)?;
    Ok(fragment.select(&sel).next())
}

/// All descendants of `fragment` matching `selector`, in document order.
pub fn select_all<'a>(
    fragment: ElementRef<'a>,
    field: &str,
    selector: &str,
) -> Result<Vec<ElementRef<'a>>, ParseError> {
    let sel = compile(field, selector)?;
    Ok(fragment.select(&sel).collect())
}

/// Direct element children, skipping text and comment nodes.
pub fn child_elements(fragment: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    fragment.children().filter_map(ElementRef::wrap).collect()
}

/// Whitespace-normalised text content of an element.
pub fn element_text(el: ElementRef<'_>) -> String {
    normalise_text(&el.text().collect::<String>())
}

pub fn extract(fragment: ElementRef<'_>, def: &TextField) -> Result<Option<String>, ParseError> {
    let Some(el) = select_first(fragment, def.field, def.selector)? else {
        return match def.presence {
            Presence::Required => Err(ParseError::missing(def.field)),
            Presence::Optional => {
                trace!("optional field `{}` absent", def.field);
                Ok(None)
            }
        };
    };
    let text = element_text(el);
    Ok(if text.is_empty() { None } else { Some(text) })
}

pub fn extract_int(fragment: ElementRef<'_>, def: &StatField) -> Result<Option<u32>, ParseError> {
    let Some(el) = select_first(fragment, def.field, def.selector)? else {
        return match def.presence {
            Presence::Required => Err(ParseError::missing(def.field)),
            Presence::Optional => Ok(None),
        };
    };
    let text = element_text(el);
    if is_blank(&text, def.sentinel) {
        return Ok(def.default);
    }
    parse_position(&text)
        .map(Some)
        .ok_or_else(|| ParseError::new(def.field, format!("`{}` is not a number", text)))
}

/// Trimmed, non-empty attribute value.
pub fn extract_attr(fragment: ElementRef<'_>, attr: &str) -> Option<String> {
    fragment
        .value()
        .attr(attr)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Image URL from the first matching `<img>`, trying each attribute in order.
pub fn extract_image(fragment: ElementRef<'_>, def: &ImageField) -> Result<Option<String>, ParseError> {
    let Some(img) = select_first(fragment, "image", def.selector)? else {
        return Ok(None);
    };
    Ok(def.attrs.iter().find_map(|attr| extract_attr(img, attr)))
}
