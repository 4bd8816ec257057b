//! Public client surface + builder.
//! Internals are split into `retry` (attempt budget, backoff, pacing) and `constants` (UA + defaults).

mod constants;
mod retry;

pub use retry::{Backoff, Pacing, RetryConfig};

use crate::core::{EdgarError, net};
use constants::{DEFAULT_BASE_ARCHIVES, DEFAULT_BASE_SUBMISSIONS, DEFAULT_TIMEOUT_SECS, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// An HTTP client for the EDGAR submissions API and filing archive.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct EdgarClient {
    http: Client,
    base_submissions: Url,
    base_archives: Url,
    retry: RetryConfig,
    pacing: Pacing,
}

impl EdgarClient {
    /// Create a new builder.
    pub fn builder() -> EdgarClientBuilder {
        EdgarClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn base_submissions(&self) -> &Url {
        &self.base_submissions
    }
    pub(crate) fn base_archives(&self) -> &Url {
        &self.base_archives
    }

    /// The courtesy delays this client was configured with.
    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// The retry policy this client was configured with.
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Sleeps for the intra-fund request gap.
    pub(crate) async fn pause_between_requests(&self) {
        if !self.pacing.request_gap.is_zero() {
            tokio::time::sleep(self.pacing.request_gap).await;
        }
    }

    /// Sleeps for the inter-fund gap.
    pub(crate) async fn pause_between_funds(&self) {
        if !self.pacing.fund_gap.is_zero() {
            tokio::time::sleep(self.pacing.fund_gap).await;
        }
    }

    /// Fetches `url` and returns its (decompressed) body.
    ///
    /// A `429` response backs off according to [`RetryConfig::rate_limit_backoff`]
    /// and a transport failure according to [`RetryConfig::error_backoff`]; both
    /// draw from the same attempt budget. Any other non-success status is returned
    /// immediately as [`EdgarError::Status`].
    ///
    /// # Errors
    ///
    /// Returns a retrieval error (see [`EdgarError::is_retrieval`]) once the request
    /// has failed terminally or the attempts are exhausted.
    pub async fn fetch(&self, url: &Url) -> Result<Vec<u8>, EdgarError> {
        let attempts = self.retry.attempts();
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(url = %url, attempt, "GET");

            let err = match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(Failure::Terminal(e)) => return Err(e),
                Err(Failure::RateLimited) => {
                    if attempt >= attempts {
                        return Err(EdgarError::RateLimited {
                            url: url.to_string(),
                            attempts: attempt,
                        });
                    }
                    let wait = self.retry.rate_limit_backoff.delay(attempt);
                    warn!(url = %url, wait_secs = wait.as_secs_f64(), "rate limited; backing off");
                    tokio::time::sleep(wait).await;
                    continue;
                }
                Err(Failure::Transient(e)) => e,
            };

            if attempt >= attempts {
                return Err(err);
            }
            let wait = self.retry.error_backoff.delay(attempt);
            warn!(url = %url, error = %err, wait_secs = wait.as_secs_f64(), "request failed; retrying");
            tokio::time::sleep(wait).await;
        }
    }

    async fn fetch_once(&self, url: &Url) -> Result<Vec<u8>, Failure> {
        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Failure::Transient(e.into()))?;

        let status = resp.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Failure::RateLimited);
        }
        if !status.is_success() {
            return Err(Failure::Terminal(EdgarError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| Failure::Transient(e.into()))?;
        net::decode_body(&body).map_err(Failure::Transient)
    }
}

/// How a single attempt went wrong, which decides whether another one is made.
enum Failure {
    RateLimited,
    Transient(EdgarError),
    Terminal(EdgarError),
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct EdgarClientBuilder {
    user_agent: Option<String>,
    base_submissions: Option<Url>,
    base_archives: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
    pacing: Option<Pacing>,
}

impl EdgarClientBuilder {
    /// Override the User-Agent. EDGAR expects `"Company Name contact@domain"`.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the submissions API base (e.g., `https://data.sec.gov/submissions/`).
    pub fn base_submissions(mut self, url: Url) -> Self {
        self.base_submissions = Some(url);
        self
    }

    /// Override the filing archive base (e.g., `https://www.sec.gov/Archives/edgar/data/`).
    pub fn base_archives(mut self, url: Url) -> Self {
        self.base_archives = Some(url);
        self
    }

    /// Set the per-request timeout. Default: 30 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the default retry policy.
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Replace the default courtesy delays.
    pub fn pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = Some(pacing);
        self
    }

    pub fn build(self) -> Result<EdgarClient, EdgarError> {
        let base_submissions = match self.base_submissions {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_SUBMISSIONS)?,
        };
        let base_archives = match self.base_archives {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_ARCHIVES)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            );
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(EdgarClient {
            http: httpb.build()?,
            base_submissions,
            base_archives,
            retry: self.retry.unwrap_or_default(),
            pacing: self.pacing.unwrap_or_default(),
        })
    }
}
