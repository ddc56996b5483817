use gridstats::{core::config::ServerConfig, server, Fetcher, RateLimiter, StatsService};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = ServerConfig::from_env()?;

    // One limiter for the whole process so concurrent requests share the upstream budget.
    let limiter = Arc::new(RateLimiter::new(config.max_concurrent));
    let fetcher = Fetcher::new(limiter)?;
    let service = Arc::new(StatsService::new(fetcher, config.base_url.clone()));

    let app = server::router(service).layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    log::info!(
        "Starting server on {} (upstream {})",
        config.bind,
        config.base_url
    );
    axum::serve(listener, app).await?;

    Ok(())
}
