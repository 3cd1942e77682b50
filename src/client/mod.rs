//! Fetching side: the transport seam, URL templates and the chart client.

pub mod first_year;
pub mod http_client;

use async_trait::async_trait;
use std::time::Duration;
use tracing::info;
use url::Url;

use self::first_year::{FirstYear, first_year};
use self::http_client::HttpClient;
use crate::config::AppConfig;
use crate::engine;
use crate::error::{ChartError, Result, TransportError};
use crate::models::{ChartReport, ChartRequest, FetchPolicy, RequestMode};

/// Raw page as the origin served it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

// ── Transport trait ───────────────────────────────────────────────────────────

/// Swappable page source. Retries are the implementation's business; a
/// non-success status is returned, not raised.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str, timeout: Duration, max_retries: u32) -> std::result::Result<FetchResponse, TransportError>;
}

// ── Chart client ──────────────────────────────────────────────────────────────

pub struct ChartClient<T> {
    transport: T,
    base_url: Url,
    clamp_year_end: bool,
    /// Used for listing pages; chart requests carry their own policy.
    policy: FetchPolicy,
}

impl ChartClient<HttpClient> {
    /// Client over HTTP, configured from the loaded application config.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let transport = HttpClient::new(&config.http)?;
        Ok(Self::new(transport, &config.http.base_url)?
            .with_policy(config.http.fetch_policy())
            .clamp_year_end(config.pipeline.clamp_year_end))
    }
}

impl<T: Transport> ChartClient<T> {
    pub fn new(transport: T, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ChartError::InvalidRequest(format!("base url `{}`: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ChartError::InvalidRequest(format!("base url `{}` cannot hold a path", base_url)));
        }

        Ok(Self {
            transport,
            base_url,
            clamp_year_end: true,
            policy: FetchPolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: FetchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn clamp_year_end(mut self, on: bool) -> Self {
        self.clamp_year_end = on;
        self
    }

    /// Fetch and assemble one chart issue.
    pub async fn fetch_chart(&self, request: &ChartRequest) -> Result<ChartReport> {
        let request = self.effective_request(request)?;
        let url = self.chart_url(&request);
        info!("Fetching {} ({}) from {}", request.name, request.issue_label(), url);

        let body = self.get(&url, request.policy).await?;
        let report = engine::assemble(&body, &request)?;
        info!("{}: {} entries", request.name, report.chart.len());
        Ok(report)
    }

    /// Chart names linked from the weekly or year-end listing page.
    pub async fn list_charts(&self, year_end: bool) -> Result<Vec<String>> {
        let url = if year_end {
            self.url_for(&["charts", "year-end"])
        } else {
            self.url_for(&["charts"])
        };
        info!("Fetching chart listing from {}", url);

        let body = self.get(&url, self.policy).await?;
        Ok(engine::listing::parse_chart_names(&body, year_end)?)
    }

    /// URL for the page that answers `request`.
    pub fn chart_url(&self, request: &ChartRequest) -> String {
        let name = request.name.as_str();
        match request.mode {
            RequestMode::Latest => self.url_for(&["charts", name]),
            RequestMode::OnDate(d) => {
                let date = d.format("%Y-%m-%d").to_string();
                self.url_for(&["charts", name, &date])
            }
            RequestMode::LatestYear => self.url_for(&["charts", "year-end", name]),
            RequestMode::OnYear(y) => {
                let year = y.to_string();
                self.url_for(&["charts", "year-end", &year, name])
            }
        }
    }

    fn url_for(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.into()
    }

    async fn get(&self, url: &str, policy: FetchPolicy) -> Result<String> {
        let resp = self
            .transport
            .fetch(url, policy.timeout, policy.max_retries)
            .await
            .map_err(ChartError::Transport)?;

        match resp.status {
            200..=299 => Ok(resp.body),
            404 => Err(ChartError::NotFound(format!("no page at {}", url))),
            status => Err(ChartError::Fetch {
                status,
                url: url.to_string(),
            }),
        }
    }

    /// Apply the first-year table to year-end requests.
    fn effective_request(&self, request: &ChartRequest) -> Result<ChartRequest> {
        if !self.clamp_year_end || !request.mode.is_year_scoped() {
            return Ok(request.clone());
        }

        match (first_year(&request.name), request.mode) {
            (FirstYear::NotLoadable, _) => Err(ChartError::NotFound(format!(
                "year-end pages for `{}` do not load",
                request.name
            ))),
            (FirstYear::Year(first), RequestMode::OnYear(y)) if y < first => {
                info!("{}: year-end starts in {}, raising {} to {}", request.name, first, y, first);
                let mut clamped = request.clone();
                clamped.mode = RequestMode::OnYear(first);
                Ok(clamped)
            }
            _ => Ok(request.clone()),
        }
    }
}
