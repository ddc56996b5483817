use reqwest::header::{HeaderMap, ACCEPT, ACCEPT_LANGUAGE, RETRY_AFTER, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::core::types::DocumentSource;
use crate::error::{GridstatsError, Result};
use crate::utils::rate_limit::RateLimiter;

// Headers that make the upstream treat us like a desktop browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Longest `Retry-After` we honour; the wait is shared by every pipeline.
pub const MAX_RETRY_AFTER: Duration = Duration::from_secs(300);

/// Per call-site knobs for one outbound retrieval.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub timeout: Duration,
    /// Total attempts, including the first one. Zero is treated as one.
    pub max_retries: u32,
    /// Wait used on a 429 without a usable `Retry-After`.
    pub default_backoff: Duration,
    pub user_agent: &'static str,
    pub accept: &'static str,
    pub accept_language: &'static str,
}

impl FetchConfig {
    pub const fn new(timeout: Duration, max_retries: u32, default_backoff: Duration) -> Self {
        Self {
            timeout,
            max_retries,
            default_backoff,
            user_agent: BROWSER_USER_AGENT,
            accept: BROWSER_ACCEPT,
            accept_language: BROWSER_ACCEPT_LANGUAGE,
        }
    }

    pub const TEAM_HISTORY: FetchConfig =
        FetchConfig::new(Duration::from_secs(30), 3, Duration::from_secs(60));
    pub const SEASON_PAGE: FetchConfig =
        FetchConfig::new(Duration::from_secs(4), 2, Duration::from_secs(15));
    pub const DRAFT: FetchConfig =
        FetchConfig::new(Duration::from_secs(4), 2, Duration::from_secs(60));
    pub const AWARDS: FetchConfig =
        FetchConfig::new(Duration::from_secs(32), 2, Duration::from_secs(10));

    fn attempts(&self) -> u32 {
        self.max_retries.max(1)
    }
}

#[derive(Debug)]
pub struct FetchResult {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub headers: HeaderMap,
}

/// How long to sleep after a 429: `Retry-After` in whole seconds when it
/// parses, `default` otherwise. Capped at [`MAX_RETRY_AFTER`].
pub fn retry_wait(headers: &HeaderMap, default: Duration) -> Duration {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(default)
        .min(MAX_RETRY_AFTER)
}

#[derive(Clone)]
pub struct Fetcher {
    client: Client,
    limiter: Arc<RateLimiter>,
}

impl Fetcher {
    pub fn new(limiter: Arc<RateLimiter>) -> Result<Self> {
        let client = Client::builder()
            .gzip(true)
            .build()
            .map_err(|e| GridstatsError::RequestConstruction(e.to_string()))?;
        Ok(Self::with_client(client, limiter))
    }

    pub fn with_client(client: Client, limiter: Arc<RateLimiter>) -> Self {
        Self { client, limiter }
    }

    /// Retrieves `url`, retrying only on 429.
    ///
    /// Transport failures and any status other than 200/429 end the call at
    /// once. Each 429 wait is also published to the shared limiter so
    /// concurrent pipelines back off together.
    pub async fn fetch(&self, url: &Url, config: &FetchConfig) -> Result<FetchResult> {
        let attempts = config.attempts();

        for attempt in 1..=attempts {
            let result = self.send_once(url, config).await?;

            match result.status {
                StatusCode::OK => return Ok(result),
                StatusCode::TOO_MANY_REQUESTS => {
                    if attempt == attempts {
                        return Err(GridstatsError::RateLimitExceeded { attempts });
                    }

                    let wait = retry_wait(&result.headers, config.default_backoff);
                    log::warn!(
                        "Rate limited. Waiting {:?} before retry {}/{}",
                        wait,
                        attempt,
                        attempts
                    );
                    self.limiter.cool_down(wait).await;
                    tokio::time::sleep(wait).await;
                }
                other => return Err(GridstatsError::UnexpectedStatus(other.as_u16())),
            }
        }

        Err(GridstatsError::RateLimitExceeded { attempts })
    }

    async fn send_once(&self, url: &Url, config: &FetchConfig) -> Result<FetchResult> {
        let request = self
            .client
            .get(url.as_str())
            .timeout(config.timeout)
            .header(USER_AGENT, config.user_agent)
            .header(ACCEPT, config.accept)
            .header(ACCEPT_LANGUAGE, config.accept_language)
            .build()
            .map_err(|e| GridstatsError::RequestConstruction(e.to_string()))?;

        let _permit = self.limiter.acquire().await;
        log::debug!("Fetching URL: {}", url);

        let response = self.client.execute(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        log::debug!("Response status: {}", status);

        let body = response.bytes().await?.to_vec();

        Ok(FetchResult {
            status,
            body,
            headers,
        })
    }
}

#[async_trait::async_trait]
impl DocumentSource for Fetcher {
    async fn fetch(&self, url: &Url, config: &FetchConfig) -> Result<Vec<u8>> {
        Fetcher::fetch(self, url, config).await.map(|r| r.body)
    }
}
