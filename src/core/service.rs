use url::Url;

use super::types::DocumentSource;
use crate::error::Result;
use crate::fetch::FetchConfig;
use crate::pfr::awards::{self, AwardWinner};
use crate::pfr::draft::{self, DraftPick};
use crate::pfr::history::{self, SeasonOverview};
use crate::pfr::playoffs::{self, PlayoffResult};
use crate::pfr::standings::{self, Conference};
use crate::pfr::stats::{self, TeamYearStats};
use crate::pfr::SiteUrls;

/// One entry point per endpoint. Each call fetches its page, then decodes it
/// synchronously; nothing is kept between calls.
pub struct StatsService<S> {
    source: S,
    urls: SiteUrls,
}

impl<S: DocumentSource> StatsService<S> {
    pub fn new(source: S, base: Url) -> Self {
        Self {
            source,
            urls: SiteUrls::new(base),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    async fn load(&self, url: Url, config: &FetchConfig) -> Result<Vec<u8>> {
        self.source.fetch(&url, config).await
    }

    pub async fn season_overview(&self, team: &str, year: i64) -> Result<SeasonOverview> {
        let body = self
            .load(self.urls.team_history(team)?, &FetchConfig::TEAM_HISTORY)
            .await?;
        history::decode_season_overview(&body, year)
    }

    pub async fn team_stats(&self, team: &str, year: i64) -> Result<TeamYearStats> {
        let body = self
            .load(self.urls.team_season(team, year)?, &FetchConfig::SEASON_PAGE)
            .await?;
        stats::decode_team_stats(&body)
    }

    pub async fn draft_year(&self, team: &str, year: i64) -> Result<Vec<DraftPick>> {
        let body = self
            .load(self.urls.team_draft(team)?, &FetchConfig::DRAFT)
            .await?;
        draft::decode_draft_year(&body, year)
    }

    pub async fn standings(&self, year: i64) -> Result<Vec<Conference>> {
        let body = self
            .load(self.urls.season(year)?, &FetchConfig::SEASON_PAGE)
            .await?;
        standings::decode_standings(&body, year)
    }

    pub async fn playoffs(&self, year: i64) -> Result<PlayoffResult> {
        let body = self
            .load(self.urls.season(year)?, &FetchConfig::SEASON_PAGE)
            .await?;
        playoffs::decode_playoffs(&body, year)
    }

    pub async fn award_winners(&self, year: i64) -> Result<Vec<AwardWinner>> {
        let body = self
            .load(self.urls.season(year)?, &FetchConfig::AWARDS)
            .await?;
        awards::decode_award_winners(&body)
    }
}
