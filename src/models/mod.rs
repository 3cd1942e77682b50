use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

use crate::error::{ChartError, Result};

// ── Request ───────────────────────────────────────────────────────────────────

/// Retry/timeout policy. Opaque to the engine; handed to the transport as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPolicy {
    pub timeout: Duration,
    pub max_retries: u32,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(25),
            max_retries: 5,
        }
    }
}

/// Which issue of a chart is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    /// The current weekly (or evergreen) issue.
    Latest,
    OnDate(NaiveDate),
    OnYear(i32),
    /// The most recent year-end issue.
    LatestYear,
}

impl RequestMode {
    pub fn is_year_scoped(&self) -> bool {
        matches!(self, RequestMode::OnYear(_) | RequestMode::LatestYear)
    }

    pub fn is_latest(&self) -> bool {
        matches!(self, RequestMode::Latest | RequestMode::LatestYear)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRequest {
    pub name: String,
    pub mode: RequestMode,
    pub policy: FetchPolicy,
}

impl ChartRequest {
    /// Build a request from loosely-typed input, the way a CLI or caller hands
    /// it over. `date` is `YYYY-MM-DD`, `year` is `YYYY`; giving both is an error.
    pub fn new(name: &str, date: Option<&str>, year: Option<&str>) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ChartError::InvalidRequest("chart name is empty".into()));
        }

        let mode = match (date, year) {
            (Some(_), Some(_)) => {
                return Err(ChartError::InvalidRequest(
                    "a request takes either a date or a year, not both".into(),
                ));
            }
            (Some(d), None) => RequestMode::OnDate(parse_request_date(d)?),
            (None, Some(y)) => RequestMode::OnYear(parse_request_year(y)?),
            (None, None) => RequestMode::Latest,
        };

        Ok(Self {
            name: name.to_string(),
            mode,
            policy: FetchPolicy::default(),
        })
    }

    pub fn latest(name: impl Into<String>) -> Self {
        Self::with_mode(name, RequestMode::Latest)
    }

    pub fn on_date(name: impl Into<String>, date: NaiveDate) -> Self {
        Self::with_mode(name, RequestMode::OnDate(date))
    }

    /// Year-end request; `None` asks for the latest year-end issue.
    pub fn year_end(name: impl Into<String>, year: Option<i32>) -> Self {
        let mode = match year {
            Some(y) => RequestMode::OnYear(y),
            None => RequestMode::LatestYear,
        };
        Self::with_mode(name, mode)
    }

    pub fn with_policy(mut self, policy: FetchPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn with_mode(name: impl Into<String>, mode: RequestMode) -> Self {
        Self {
            name: name.into(),
            mode,
            policy: FetchPolicy::default(),
        }
    }

    /// Human-readable issue label for logs and error messages.
    pub fn issue_label(&self) -> String {
        match self.mode {
            RequestMode::Latest => "latest".to_string(),
            RequestMode::OnDate(d) => d.format("%Y-%m-%d").to_string(),
            RequestMode::OnYear(y) => format!("year-end {}", y),
            RequestMode::LatestYear => "latest year-end".to_string(),
        }
    }
}

fn parse_request_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ChartError::InvalidRequest("date is empty".into()));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ChartError::InvalidRequest(format!("date `{}` is not YYYY-MM-DD", s)))
}

fn parse_request_year(s: &str) -> Result<i32> {
    let s = s.trim();
    if s.len() != 4 || !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(ChartError::InvalidRequest(format!("year `{}` is not YYYY", s)));
    }
    s.parse()
        .map_err(|_| ChartError::InvalidRequest(format!("year `{}` is not YYYY", s)))
}

// ── Raw per-entry fields (parser output) ──────────────────────────────────────

/// Scratch record a layout parser produces before derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntryFields {
    pub title: Option<String>,
    pub artist: String,
    pub image: Option<String>,
    pub rank: u32,
    pub peak_raw: Option<u32>,
    pub last_raw: Option<u32>,
    pub weeks_raw: Option<u32>,
}

// ── Normalized entry ──────────────────────────────────────────────────────────

/// Week-over-week movement as printed by the oldest page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Delta(i64),
    New,
    ReEntry,
    HotShotDebut,
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Delta(n) if *n > 0 => write!(f, "+{}", n),
            Change::Delta(n) => write!(f, "{}", n),
            Change::New => f.write_str("New"),
            Change::ReEntry => f.write_str("Re-Entry"),
            Change::HotShotDebut => f.write_str("Hot Shot Debut"),
        }
    }
}

impl Serialize for Change {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChartEntry {
    pub title: String,
    pub artist: String,
    pub image: Option<String>,
    pub peak_pos: Option<u32>,
    /// `Some(0)` means "not on the previous issue"; `None` means "not tracked".
    pub last_pos: Option<u32>,
    pub weeks: Option<u32>,
    pub rank: u32,
    pub is_new: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<Change>,
}

impl fmt::Display for ChartEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_empty() {
            write!(f, "{}", self.artist)
        } else {
            write!(f, "'{}' by {}", self.title, self.artist)
        }
    }
}

// ── Normalized chart ──────────────────────────────────────────────────────────

/// Neighbour-issue links. Weekly charts link by date, year-end charts by year.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum IssueLinks {
    Weekly {
        previous_date: Option<String>,
        next_date: Option<String>,
    },
    YearEnd {
        previous_year: Option<String>,
        next_year: Option<String>,
    },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub name: String,
    pub title: String,
    /// `YYYY-MM-DD`, `YYYY` for year-end issues, `None` for evergreen charts.
    pub date: Option<String>,
    pub year: Option<String>,
    #[serde(flatten)]
    pub links: IssueLinks,
    pub entries: Vec<ChartEntry>,
    #[serde(skip)]
    pub latest: bool,
}

impl ChartData {
    pub fn previous_date(&self) -> Option<&str> {
        match &self.links {
            IssueLinks::Weekly { previous_date, .. } => previous_date.as_deref(),
            IssueLinks::YearEnd { .. } => None,
        }
    }

    pub fn next_date(&self) -> Option<&str> {
        match &self.links {
            IssueLinks::Weekly { next_date, .. } => next_date.as_deref(),
            IssueLinks::YearEnd { .. } => None,
        }
    }

    pub fn previous_year(&self) -> Option<&str> {
        match &self.links {
            IssueLinks::YearEnd { previous_year, .. } => previous_year.as_deref(),
            IssueLinks::Weekly { .. } => None,
        }
    }

    pub fn next_year(&self) -> Option<&str> {
        match &self.links {
            IssueLinks::YearEnd { next_year, .. } => next_year.as_deref(),
            IssueLinks::Weekly { .. } => None,
        }
    }

    pub fn is_year_end(&self) -> bool {
        matches!(self.links, IssueLinks::YearEnd { .. })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::ops::Index<usize> for ChartData {
    type Output = ChartEntry;

    fn index(&self, index: usize) -> &ChartEntry {
        &self.entries[index]
    }
}

// ── Diagnostics ───────────────────────────────────────────────────────────────

/// Non-fatal advisories raised while assembling a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Year-end year not among the years the page advertises.
    UnsupportedYear {
        name: String,
        year: i32,
        supported: Option<(i32, i32)>,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnsupportedYear { name, year, supported: Some((lo, _)) } if year < lo => write!(
                f,
                "{} is not a supported year-end year for `{}`; the oldest is {}",
                year, name, lo
            ),
            Diagnostic::UnsupportedYear { name, year, supported: Some((_, hi)) } if year > hi => write!(
                f,
                "{} is not a supported year-end year for `{}`; the newest is {}",
                year, name, hi
            ),
            Diagnostic::UnsupportedYear { name, year, .. } => write!(
                f,
                "{} is not a supported year-end year for `{}`; neighbouring years are unknown",
                year, name
            ),
        }
    }
}

/// An assembled chart together with any advisories raised on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartReport {
    pub chart: ChartData,
    pub diagnostics: Vec<Diagnostic>,
}
