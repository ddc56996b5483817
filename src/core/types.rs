use crate::error::Result;
use crate::fetch::FetchConfig;
use url::Url;

/// Anything that can hand back the raw bytes of an upstream page.
///
/// `Fetcher` is the production implementation; tests plug in canned documents.
#[async_trait::async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, url: &Url, config: &FetchConfig) -> Result<Vec<u8>>;
}
