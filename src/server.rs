use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::service::StatsService;
use crate::core::types::DocumentSource;
use crate::error::GridstatsError;
use crate::pfr::awards::AwardWinner;
use crate::pfr::draft::DraftPick;
use crate::pfr::history::SeasonOverview;
use crate::pfr::playoffs::PlayoffResult;
use crate::pfr::standings::Conference;
use crate::pfr::stats::TeamYearStats;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct TeamYearQuery {
    pub team: String,
    pub year: i64,
}

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: i64,
}

/// Pipeline failure surfaced to the caller with a status instead of an empty body.
pub struct ApiError(pub GridstatsError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            GridstatsError::RecordNotFound(_) => StatusCode::NOT_FOUND,
            GridstatsError::RateLimitExceeded { .. } => StatusCode::SERVICE_UNAVAILABLE,
            GridstatsError::RequestConstruction(_) => StatusCode::BAD_REQUEST,
            GridstatsError::Transport(_)
            | GridstatsError::UnexpectedStatus(_)
            | GridstatsError::Parse(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<GridstatsError> for ApiError {
    fn from(e: GridstatsError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        log::error!("{}", self.0);
        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;
type AppState<S> = State<Arc<StatsService<S>>>;

async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn team_history<S: DocumentSource>(
    State(service): AppState<S>,
    Query(q): Query<TeamYearQuery>,
) -> ApiResult<SeasonOverview> {
    Ok(Json(service.season_overview(&q.team, q.year).await?))
}

async fn team_stats<S: DocumentSource>(
    State(service): AppState<S>,
    Query(q): Query<TeamYearQuery>,
) -> ApiResult<TeamYearStats> {
    Ok(Json(service.team_stats(&q.team, q.year).await?))
}

async fn team_draft<S: DocumentSource>(
    State(service): AppState<S>,
    Query(q): Query<TeamYearQuery>,
) -> ApiResult<Vec<DraftPick>> {
    Ok(Json(service.draft_year(&q.team, q.year).await?))
}

async fn season_standings<S: DocumentSource>(
    State(service): AppState<S>,
    Query(q): Query<YearQuery>,
) -> ApiResult<Vec<Conference>> {
    Ok(Json(service.standings(q.year).await?))
}

async fn season_playoffs<S: DocumentSource>(
    State(service): AppState<S>,
    Query(q): Query<YearQuery>,
) -> ApiResult<PlayoffResult> {
    Ok(Json(service.playoffs(q.year).await?))
}

async fn season_awards<S: DocumentSource>(
    State(service): AppState<S>,
    Query(q): Query<YearQuery>,
) -> ApiResult<Vec<AwardWinner>> {
    Ok(Json(service.award_winners(q.year).await?))
}

pub fn router<S: DocumentSource + 'static>(service: Arc<StatsService<S>>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/team/history", get(team_history::<S>))
        .route("/team/stats", get(team_stats::<S>))
        .route("/team/draft", get(team_draft::<S>))
        .route("/season/standings", get(season_standings::<S>))
        .route("/season/playoffs", get(season_playoffs::<S>))
        .route("/season/awards", get(season_awards::<S>))
        .with_state(service)
}
