//! Pages and tables of the pro-football-reference site.

pub mod awards;
pub mod draft;
pub mod history;
pub mod playoffs;
pub mod standings;
pub mod stats;

use url::Url;

use crate::error::{GridstatsError, Result};

/// Builds page URLs relative to the site root.
#[derive(Debug, Clone)]
pub struct SiteUrls {
    base: Url,
}

impl SiteUrls {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Franchise index page holding `#team_index`.
    pub fn team_history(&self, team: &str) -> Result<Url> {
        Ok(self.base.join(&format!("teams/{}/", team_code(team)?))?)
    }

    pub fn team_season(&self, team: &str, year: i64) -> Result<Url> {
        Ok(self
            .base
            .join(&format!("teams/{}/{}.htm", team_code(team)?, year))?)
    }

    pub fn team_draft(&self, team: &str) -> Result<Url> {
        Ok(self.base.join(&format!("teams/{}/draft.htm", team_code(team)?))?)
    }

    /// League season page: standings, playoff results and awards.
    pub fn season(&self, year: i64) -> Result<Url> {
        Ok(self.base.join(&format!("years/{}/", year))?)
    }
}

/// Short franchise codes are lower-case ASCII letters on the site ("gnb", "kan").
pub fn team_code(team: &str) -> Result<String> {
    let code = team.trim().to_ascii_lowercase();
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(GridstatsError::RequestConstruction(format!(
            "invalid team code {:?}",
            team
        )));
    }
    Ok(code)
}
