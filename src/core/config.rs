use anyhow::{anyhow, Result};
use std::net::SocketAddr;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.pro-football-reference.com/";
const DEFAULT_BIND: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONCURRENT: usize = 4;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub base_url: Url,
    pub max_concurrent: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let bind = std::env::var("GRIDSTATS_BIND")
            .unwrap_or_else(|_| DEFAULT_BIND.to_string())
            .parse()
            .map_err(|e| anyhow!("GRIDSTATS_BIND is not a socket address: {}", e))?;

        let base_url = base_url_from_env()?;

        let max_concurrent = match std::env::var("GRIDSTATS_MAX_CONCURRENT") {
            Ok(v) => v
                .parse()
                .map_err(|e| anyhow!("GRIDSTATS_MAX_CONCURRENT is not a number: {}", e))?,
            Err(_) => DEFAULT_MAX_CONCURRENT,
        };

        Ok(Self {
            bind,
            base_url,
            max_concurrent,
        })
    }
}

/// Upstream site root. Always ends with `/` so relative joins keep the path.
pub fn base_url_from_env() -> Result<Url> {
    let raw = std::env::var("GRIDSTATS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let raw = if raw.ends_with('/') { raw } else { format!("{}/", raw) };
    Url::parse(&raw).map_err(|e| anyhow!("GRIDSTATS_BASE_URL is not a valid URL: {}", e))
}
