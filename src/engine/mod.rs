//! Chart page interpretation engine.
//!
//! `assemble` runs classify → parse → resolve dates → derive over a fetched
//! page. Pure and synchronous; all I/O lives in [`crate::client`].

pub mod classify;
pub mod cleaner;
pub mod dates;
pub mod derive;
pub mod extract;
pub mod listing;
pub mod parsers;
pub mod selectors;

#[cfg(test)]
pub(crate) mod fixtures;

use scraper::Html;
use tracing::debug;

pub use self::classify::LayoutKind;

use self::derive::{DerivationFlags, derive_entries};
use crate::error::{ChartError, ParseError, Result};
use crate::models::{ChartData, ChartReport, ChartRequest, RawEntryFields};
use crate::utils::slug_to_title;

/// Build a normalised chart from the page fetched for `request`.
///
/// All or nothing: any required-field failure aborts the whole chart.
pub fn assemble(html: &str, request: &ChartRequest) -> Result<ChartReport> {
    let doc = Html::parse_document(html);
    let kind = classify::classify(&doc, &request.mode);
    debug!("{} ({}): {} layout", request.name, request.issue_label(), kind);

    let page = parsers::parse(kind, &doc)?;
    let resolved = dates::resolve(request, &page.meta.issue)?;

    if page.entries.is_empty() {
        return Err(ChartError::EmptyResult {
            name: request.name.clone(),
            issue: resolved.date.clone().unwrap_or_else(|| request.issue_label()),
        });
    }
    check_ranks(&page.entries)?;

    let flags = DerivationFlags {
        is_dated_issue: page.meta.issue.is_dated(),
        is_year_end: kind == LayoutKind::YearEnd,
        annotate_change: kind == LayoutKind::Legacy,
    };
    let entries = derive_entries(page.entries, flags);

    let chart = ChartData {
        name: request.name.clone(),
        title: page
            .meta
            .title
            .unwrap_or_else(|| slug_to_title(&request.name)),
        date: resolved.date,
        year: resolved.year,
        links: resolved.links,
        entries,
        latest: request.mode.is_latest(),
    };

    Ok(ChartReport {
        chart,
        diagnostics: resolved.diagnostics,
    })
}

/// Ranks must read 1..=N in page order. Gaps, duplicates and reordering are
/// reported, never repaired.
fn check_ranks(entries: &[RawEntryFields]) -> Result<(), ParseError> {
    for (i, entry) in entries.iter().enumerate() {
        let expected = i as u32 + 1;
        if entry.rank != expected {
            return Err(ParseError::new(
                "rank",
                format!("expected rank {} but found {}", expected, entry.rank),
            )
            .at_entry(i));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::fixtures::*;
    use crate::models::{Change, Diagnostic};
    use chrono::NaiveDate;

    fn on(name: &str, date: &str) -> ChartRequest {
        ChartRequest::new(name, Some(date), None).unwrap()
    }

    fn assert_rank_invariants(chart: &ChartData) {
        let ranks: Vec<u32> = chart.entries.iter().map(|e| e.rank).collect();
        let expected: Vec<u32> = (1..=chart.len() as u32).collect();
        assert_eq!(ranks, expected);
        for e in &chart.entries {
            if e.is_new {
                assert_eq!(e.last_pos, Some(0));
            }
        }
    }

    #[test]
    fn test_legacy_dated_chart() {
        let report = assemble(LEGACY_HOT_100, &on("hot-100", "1996-07-30")).unwrap();
        let chart = &report.chart;
        assert_rank_invariants(chart);

        assert_eq!(chart.title, "The Hot 100");
        assert_eq!(chart.date.as_deref(), Some("1996-08-03"));
        assert_eq!(chart.previous_date(), Some("1996-07-27"));
        assert_eq!(chart.next_date(), None);
        assert!(!chart.latest);

        let changes: Vec<String> = chart
            .entries
            .iter()
            .map(|e| e.change.map(|c| c.to_string()).unwrap_or_default())
            .collect();
        assert_eq!(changes, vec!["0", "Hot Shot Debut", "-1", "Re-Entry", "+4", "New"]);

        // Missing peak defaults to the entry's own rank.
        assert_eq!(chart[1].peak_pos, Some(2));
        assert!(chart[1].is_new);
        assert_eq!(chart[5].weeks, Some(1));
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_legacy_artist_only_chart() {
        let chart = assemble(LEGACY_ARTIST_100, &on("artist-100", "2014-07-26")).unwrap().chart;
        assert_rank_invariants(&chart);
        assert_eq!(chart.date.as_deref(), Some("2014-07-26"));
        assert_eq!(chart.previous_date(), Some("2014-07-19"));
        assert_eq!(chart.next_date(), Some("2014-08-02"));
        assert!(chart.entries.iter().all(|e| e.title.is_empty()));
        assert_eq!(chart[0].artist, "Ed Sheeran");
        assert_eq!(chart[1].peak_pos, Some(2));
    }

    #[test]
    fn test_modern_chart_has_no_change_annotation() {
        let chart = assemble(MODERN_HOT_100, &ChartRequest::latest("hot-100")).unwrap().chart;
        assert_rank_invariants(&chart);
        assert!(chart.latest);
        assert_eq!(chart.date.as_deref(), Some("2015-11-28"));
        assert!(chart.entries.iter().all(|e| e.change.is_none()));

        let sorry = &chart[1];
        assert!(sorry.is_new);
        assert_eq!((sorry.peak_pos, sorry.last_pos, sorry.weeks), (Some(2), Some(0), Some(1)));

        let json = serde_json::to_value(&chart).unwrap();
        assert!(json["entries"][0].get("change").is_none());
        assert_eq!(json["entries"][0]["peakPos"], 1);
        assert_eq!(json["entries"][0]["image"], "https://img.example/hello.jpg");
    }

    #[test]
    fn test_modern_artist_only_chart() {
        let chart = assemble(MODERN_ARTIST_100, &ChartRequest::latest("artist-100")).unwrap().chart;
        assert_eq!(chart[0].title, "");
        assert_eq!(chart[0].artist, "BTS");
        assert_eq!(chart.next_date(), None);
    }

    #[test]
    fn test_evergreen_chart() {
        let chart = assemble(MODERN_GREATEST, &ChartRequest::latest("greatest-hot-100-singles"))
            .unwrap()
            .chart;
        assert_rank_invariants(&chart);
        assert_eq!(chart.date, None);
        assert_eq!(chart.title, "Greatest of All Time Hot 100 Singles");
        for e in &chart.entries {
            assert_eq!((e.peak_pos, e.last_pos, e.weeks), (None, None, None));
            assert!(!e.is_new);
        }
    }

    #[test]
    fn test_date_past_newest_issue_is_not_found() {
        let err = assemble(MODERN_HOT_100, &on("hot-100", "2016-01-02")).unwrap_err();
        assert!(matches!(err, ChartError::NotFound(_)));
    }

    #[test]
    fn test_unpublished_issue_is_empty_result() {
        let err = assemble(MODERN_UNPUBLISHED, &on("hot-100", "2015-12-05")).unwrap_err();
        assert!(matches!(err, ChartError::EmptyResult { ref issue, .. } if issue == "2015-12-05"));
    }

    #[test]
    fn test_rank_gap_is_parse_error() {
        let html = LEGACY_HOT_100.replace(r#"data-rank="3""#, r#"data-rank="7""#);
        let err = assemble(&html, &on("hot-100", "1996-08-03")).unwrap_err();
        match err {
            ChartError::Parse(p) => {
                assert_eq!(p.field, "rank");
                assert_eq!(p.entry, Some(2));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_year_end_chart() {
        let report = assemble(YEAR_END_HOT_100, &ChartRequest::year_end("hot-100-songs", Some(2015))).unwrap();
        let chart = &report.chart;
        assert_rank_invariants(chart);
        assert!(chart.is_year_end());
        assert_eq!(chart.title, "Hot 100 Songs - Year-End");
        assert_eq!(chart.date.as_deref(), Some("2015"));
        assert_eq!(chart.year.as_deref(), Some("2015"));
        assert_eq!(chart.previous_year(), Some("2014"));
        assert_eq!(chart.next_year(), Some("2016"));
        assert!(chart.entries.iter().all(|e| e.weeks.is_none() && !e.is_new));

        let json = serde_json::to_value(chart).unwrap();
        assert_eq!(json["previousYear"], "2014");
        assert!(json.get("previousDate").is_none());
    }

    #[test]
    fn test_unsupported_year_is_advisory() {
        let report = assemble(YEAR_END_GAPPY, &ChartRequest::year_end("hot-country-songs", Some(1970))).unwrap();
        assert_eq!(report.chart.len(), 1);
        assert_eq!(report.chart.previous_year(), None);
        assert_eq!(report.chart.next_year(), None);
        assert_eq!(
            report.diagnostics,
            vec![Diagnostic::UnsupportedYear {
                name: "hot-country-songs".into(),
                year: 1970,
                supported: Some((1969, 1972)),
            }]
        );
    }

    #[test]
    fn test_title_falls_back_to_chart_name() {
        let html = r#"<div id="chart-date-picker" data-date="2020-01-04"></div>
            <ul class="o-chart-results-list-row"><li>1</li>
            <li><h3 class="c-title">Circles</h3><span class="c-label a-artist">Post Malone</span></li>
            <li><span class="chart-meta--last">1</span><span class="chart-meta--peak">1</span><span class="chart-meta--week">16</span></li></ul>"#;
        let chart = assemble(html, &ChartRequest::on_date("hot-100", NaiveDate::from_ymd_opt(2020, 1, 4).unwrap()))
            .unwrap()
            .chart;
        assert_eq!(chart.title, "Hot 100");
        assert_eq!(chart[0].change, None::<Change>);
    }
}
