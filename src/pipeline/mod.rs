//! Multi-request orchestration over a [`ChartClient`].
//!
//! `fetch_batch` fans independent requests out under a semaphore;
//! `walk_history` steps backwards one issue at a time, politely.

use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::client::{ChartClient, Transport};
use crate::config::PipelineConfig;
use crate::error::{ChartError, Result};
use crate::models::{ChartData, ChartReport, ChartRequest};
use crate::utils::jittered_delay;

/// Pause between consecutive requests of a history walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delay {
    pub base_ms: u64,
    pub jitter_ms: u64,
}

impl From<&PipelineConfig> for Delay {
    fn from(cfg: &PipelineConfig) -> Self {
        Self {
            base_ms: cfg.request_delay_ms,
            jitter_ms: cfg.jitter_ms,
        }
    }
}

/// Fetch every request, at most `concurrency` at a time. One result per
/// request, in input order; a failed request does not cancel the others.
pub async fn fetch_batch<T>(
    client: Arc<ChartClient<T>>,
    requests: Vec<ChartRequest>,
    concurrency: usize,
) -> Vec<Result<ChartReport>>
where
    T: Transport + 'static,
{
    let sem = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut handles = Vec::with_capacity(requests.len());

    for request in requests {
        let label = format!("{} ({})", request.name, request.issue_label());
        let client = Arc::clone(&client);
        let sem = Arc::clone(&sem);

        let handle = tokio::spawn(async move {
            // The semaphore is never closed, so acquire cannot fail.
            let _permit = sem.acquire_owned().await.ok();
            client.fetch_chart(&request).await
        });
        handles.push((label, handle));
    }

    let mut results = Vec::with_capacity(handles.len());
    let mut errors = 0usize;
    for (label, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => {
                error!("Task panic for {}: {}", label, e);
                Err(ChartError::Transport(Box::new(e)))
            }
        };
        if let Err(e) = &result {
            debug!("{}: {}", label, e);
            errors += 1;
        }
        results.push(result);
    }

    info!("Batch done: {} charts, {} errors", results.len(), errors);
    results
}

/// Fetch `request` and then up to `count - 1` earlier issues by following
/// each chart's previous-issue link. Stops early at the oldest issue.
pub async fn walk_history<T: Transport>(
    client: &ChartClient<T>,
    request: ChartRequest,
    count: usize,
    delay: Delay,
) -> Result<Vec<ChartReport>> {
    let mut reports: Vec<ChartReport> = Vec::with_capacity(count);
    let mut next = Some(request);

    while let Some(request) = next.take() {
        if reports.len() >= count {
            break;
        }
        if !reports.is_empty() {
            let pause = jittered_delay(delay.base_ms, delay.jitter_ms);
            debug!("Sleeping {:?} before {}", pause, request.issue_label());
            sleep(pause).await;
        }

        let report = client.fetch_chart(&request).await?;
        next = previous_issue(&report.chart, &request);
        reports.push(report);
    }

    if reports.len() < count {
        info!("Reached the oldest issue after {} charts", reports.len());
    }
    Ok(reports)
}

/// Request for the issue before `chart`, keeping the caller's fetch policy.
fn previous_issue(chart: &ChartData, request: &ChartRequest) -> Option<ChartRequest> {
    let previous = if chart.is_year_end() {
        let year = chart.previous_year()?.parse().ok()?;
        ChartRequest::year_end(chart.name.clone(), Some(year))
    } else {
        let date = NaiveDate::parse_from_str(chart.previous_date()?, "%Y-%m-%d").ok()?;
        ChartRequest::on_date(chart.name.clone(), date)
    };
    Some(previous.with_policy(request.policy))
}
