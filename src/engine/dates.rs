//! Issue-date resolution.
//!
//! The origin decides which issue answers a request; this module only reads
//! that decision back out of the page and normalises it. It never rounds
//! dates itself.

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::cleaner::parse_date;
use super::parsers::IssueMeta;
use crate::error::{ChartError, ParseError, Result};
use crate::models::{ChartRequest, Diagnostic, IssueLinks, RequestMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIssue {
    pub date: Option<String>,
    pub year: Option<String>,
    pub links: IssueLinks,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn resolve(request: &ChartRequest, issue: &IssueMeta) -> Result<ResolvedIssue> {
    match issue {
        IssueMeta::Dated { current, previous, next } => {
            let requested = match request.mode {
                RequestMode::OnDate(d) => Some(d),
                _ => None,
            };
            let date = resolve_date(requested, current.as_deref())?;
            Ok(ResolvedIssue {
                date: date.map(fmt_date),
                year: None,
                links: IssueLinks::Weekly {
                    previous_date: neighbour_date("previousDate", previous.as_deref()),
                    next_date: neighbour_date("nextDate", next.as_deref()),
                },
                diagnostics: Vec::new(),
            })
        }
        IssueMeta::Yearly { selected, available } => {
            let requested = match request.mode {
                RequestMode::OnYear(y) => Some(y),
                _ => None,
            };
            let resolved = resolve_year(&request.name, requested, *selected, available);
            let year = resolved.year.map(|y| y.to_string());
            Ok(ResolvedIssue {
                date: year.clone(),
                year,
                links: IssueLinks::YearEnd {
                    previous_year: resolved.previous.map(|y| y.to_string()),
                    next_year: resolved.next.map(|y| y.to_string()),
                },
                diagnostics: resolved.diagnostic.into_iter().collect(),
            })
        }
    }
}

/// Canonical date of a weekly issue.
///
/// An origin that answers a request with an *earlier* issue has run out of
/// issues: the requested date is past the newest one.
pub fn resolve_date(requested: Option<NaiveDate>, page_date: Option<&str>) -> Result<Option<NaiveDate>> {
    let Some(raw) = page_date else {
        return Ok(None);
    };
    let canonical = parse_date(raw)
        .ok_or_else(|| ParseError::new("date", format!("unrecognised issue date `{}`", raw)))?;

    match requested {
        Some(r) if canonical < r => Err(ChartError::NotFound(format!(
            "no issue on or after {} (newest is {})",
            fmt_date(r),
            fmt_date(canonical)
        ))),
        Some(r) if canonical != r => {
            debug!("requested {} resolved to issue {}", fmt_date(r), fmt_date(canonical));
            Ok(Some(canonical))
        }
        _ => Ok(Some(canonical)),
    }
}

fn neighbour_date(field: &str, raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match parse_date(raw) {
        Some(d) => Some(fmt_date(d)),
        None => {
            debug!("ignoring unreadable {} `{}`", field, raw);
            None
        }
    }
}

fn fmt_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedYear {
    pub year: Option<i32>,
    pub previous: Option<i32>,
    pub next: Option<i32>,
    pub diagnostic: Option<Diagnostic>,
}

/// Canonical year of a year-end issue and its neighbours.
///
/// `available` is the sorted year list the page advertises. A requested year
/// outside it raises a diagnostic; beyond either end it is clamped to that end,
/// inside a gap it is kept and both neighbours are unknown.
pub fn resolve_year(name: &str, requested: Option<i32>, selected: Option<i32>, available: &[i32]) -> ResolvedYear {
    let bounds = available.first().copied().zip(available.last().copied());

    let diagnostic = match (requested, bounds) {
        (Some(r), Some(_)) if !available.contains(&r) => {
            let d = Diagnostic::UnsupportedYear {
                name: name.to_string(),
                year: r,
                supported: bounds,
            };
            warn!("{}", d);
            Some(d)
        }
        _ => None,
    };

    let year = selected
        .or_else(|| match (requested, bounds) {
            (Some(r), Some((lo, _))) if r < lo => Some(lo),
            (Some(r), Some((_, hi))) if r > hi => Some(hi),
            (Some(r), _) => Some(r),
            (None, _) => None,
        })
        .or_else(|| available.last().copied());

    let (previous, next) = match year.and_then(|y| available.iter().position(|a| *a == y)) {
        Some(i) => (
            i.checked_sub(1).map(|p| available[p]),
            available.get(i + 1).copied(),
        ),
        None => (None, None),
    };

    ResolvedYear { year, previous, next, diagnostic }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_canonical_date_is_idempotent() {
        let resolved = resolve_date(Some(d(2015, 11, 28)), Some("2015-11-28")).unwrap();
        assert_eq!(resolved, Some(d(2015, 11, 28)));
    }

    #[test]
    fn test_between_issues_reads_back_later_issue() {
        let resolved = resolve_date(Some(d(1996, 7, 30)), Some("August 3, 1996")).unwrap();
        assert_eq!(resolved, Some(d(1996, 8, 3)));
    }

    #[test]
    fn test_before_first_issue_reads_back_first_issue() {
        let resolved = resolve_date(Some(d(1000, 10, 10)), Some("1958-08-04")).unwrap();
        assert_eq!(resolved, Some(d(1958, 8, 4)));
    }

    #[test]
    fn test_after_newest_issue_is_not_found() {
        let err = resolve_date(Some(d(2031, 1, 1)), Some("2030-12-27")).unwrap_err();
        assert!(matches!(err, ChartError::NotFound(_)));
    }

    #[test]
    fn test_unreadable_page_date_is_parse_error() {
        let err = resolve_date(None, Some("next tuesday")).unwrap_err();
        assert!(matches!(err, ChartError::Parse(ref p) if p.field == "date"));
    }

    #[test]
    fn test_dated_links_normalised() {
        let req = ChartRequest::latest("hot-100");
        let meta = IssueMeta::Dated {
            current: Some("July 26, 2014".into()),
            previous: Some("2014-07-19".into()),
            next: Some("".into()),
        };
        let resolved = resolve(&req, &meta).unwrap();
        assert_eq!(resolved.date.as_deref(), Some("2014-07-26"));
        assert_eq!(
            resolved.links,
            IssueLinks::Weekly { previous_date: Some("2014-07-19".into()), next_date: None }
        );
    }

    #[test]
    fn test_year_neighbours_from_list() {
        let years = [2013, 2014, 2015, 2016];
        let r = resolve_year("hot-100-songs", Some(2015), None, &years);
        assert_eq!((r.year, r.previous, r.next), (Some(2015), Some(2014), Some(2016)));
        assert_eq!(r.diagnostic, None);

        let newest = resolve_year("hot-100-songs", None, None, &years);
        assert_eq!((newest.year, newest.previous, newest.next), (Some(2016), Some(2015), None));
    }

    #[test]
    fn test_gappy_year_warns_and_drops_neighbours() {
        let r = resolve_year("hot-country-songs", Some(1970), None, &[1969, 1971, 1972]);
        assert_eq!((r.year, r.previous, r.next), (Some(1970), None, None));
        assert!(matches!(r.diagnostic, Some(Diagnostic::UnsupportedYear { year: 1970, .. })));
    }

    #[test]
    fn test_out_of_range_year_clamps_to_boundary() {
        let r = resolve_year("hot-100-songs", Some(1000), None, &[2006, 2007, 2008]);
        assert_eq!((r.year, r.previous, r.next), (Some(2006), None, Some(2007)));
        assert!(r.diagnostic.is_some());

        let r = resolve_year("hot-100-songs", Some(2099), None, &[2006, 2007, 2008]);
        assert_eq!((r.year, r.previous, r.next), (Some(2008), Some(2007), None));
    }
}
