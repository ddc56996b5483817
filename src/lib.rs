pub mod core;
pub mod error;
pub mod fetch;
pub mod parsing;
pub mod pfr;
pub mod schema;
pub mod server;
pub mod utils;

// Re-exports
pub use crate::core::service::StatsService;
pub use crate::core::types::DocumentSource;
pub use error::{GridstatsError, Result};
pub use fetch::{FetchConfig, Fetcher};
pub use utils::rate_limit::RateLimiter;
