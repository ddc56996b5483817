use thiserror::Error;

/// Failure of one fetch-and-decode pipeline run.
///
/// A cell that fails numeric parsing is not an error: it decodes to zero.
#[derive(Debug, Error)]
pub enum GridstatsError {
    #[error("error creating request: {0}")]
    RequestConstruction(String),

    #[error("error making request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("hit rate limit after {attempts} attempts")]
    RateLimitExceeded { attempts: u32 },

    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("error parsing HTML: {0}")]
    Parse(String),

    #[error("{0}")]
    RecordNotFound(String),
}

impl From<url::ParseError> for GridstatsError {
    fn from(e: url::ParseError) -> Self {
        GridstatsError::RequestConstruction(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GridstatsError>;
