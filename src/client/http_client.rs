use async_trait::async_trait;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, warn};

use super::{FetchResponse, Transport};
use crate::config::HttpConfig;
use crate::error::{ChartError, Result, TransportError};

/// Longest single backoff step, whatever the retry budget.
const MAX_BACKOFF: Duration = Duration::from_secs(10);

/// `reqwest` transport with exponential backoff on network errors, 429 and 5xx.
pub struct HttpClient {
    inner: reqwest::Client,
    retry_base_ms: u64,
}

/// Outcome of one attempt that is worth another try.
enum AttemptError {
    Status(FetchResponse),
    Network(reqwest::Error),
}

impl HttpClient {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            // Some chart pages set a consent cookie before serving rows
            .cookie_store(true)
            .build()
            .map_err(|e| ChartError::Transport(Box::new(e)))?;

        Ok(Self {
            inner,
            retry_base_ms: config.retry_base_ms,
        })
    }

    fn strategy(&self, max_retries: u32) -> impl Iterator<Item = Duration> + use<> {
        // from_millis(2) yields 2, 4, 8 ... so the factor scales the first step
        // to retry_base_ms.
        ExponentialBackoff::from_millis(2)
            .factor((self.retry_base_ms / 2).max(1))
            .max_delay(MAX_BACKOFF)
            .map(jitter)
            .take(max_retries as usize)
    }

    async fn attempt(&self, url: &str, timeout: Duration, attempt: u32) -> std::result::Result<FetchResponse, AttemptError> {
        debug!("GET {} (attempt {})", url, attempt);

        let resp = match self.inner.get(url).timeout(timeout).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!("Request failed on attempt {}: {}", attempt, e);
                return Err(AttemptError::Network(e));
            }
        };

        let status = resp.status();
        let body = resp.text().await.map_err(AttemptError::Network)?;
        let response = FetchResponse {
            status: status.as_u16(),
            body,
        };

        if status.as_u16() == 429 || status.is_server_error() {
            warn!("HTTP {} on attempt {} for {}", status, attempt, url);
            return Err(AttemptError::Status(response));
        }
        Ok(response)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn fetch(&self, url: &str, timeout: Duration, max_retries: u32) -> std::result::Result<FetchResponse, TransportError> {
        let mut attempt = 0u32;
        let outcome = Retry::start(self.strategy(max_retries), || {
            attempt += 1;
            self.attempt(url, timeout, attempt)
        })
        .await;

        match outcome {
            Ok(resp) => Ok(resp),
            // Budget spent: the caller decides what a 429/5xx means.
            Err(AttemptError::Status(resp)) => Ok(resp),
            Err(AttemptError::Network(e)) => Err(Box::new(e)),
        }
    }
}
