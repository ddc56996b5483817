use serde::{Deserialize, Serialize};

use crate::error::{GridstatsError, Result};
use crate::parsing::{document, table};
use crate::schema::select::last_for_year;
use crate::schema::{FieldSpec, Schema, Transform};

pub const TABLE: &str = "#team_index";

/// One franchise season from the team index page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonOverview {
    pub year: i64,
    pub league: String,
    pub team: String,
    pub wins: i64,
    pub losses: i64,
    pub ties: i64,
    pub division_finish: i64,
    pub playoff_exit_round: i64,
    pub points_for: i64,
    pub points_against: i64,
    pub points_dif: i64,
    pub head_coaches: String,
    pub best_player_av: String,
    pub best_player_passer: String,
    pub best_player_rusher: String,
    pub best_player_receiver: String,
    pub off_rank_pts: i64,
    pub off_rank_yds: i64,
    pub def_rank_pts: i64,
    pub def_rank_yds: i64,
    pub takeaway_rank: i64,
    pub points_dif_rank: i64,
    pub yards_dif_rank: i64,
    pub teams_in_league: i64,
    pub margin_of_victory: f64,
    pub strength_of_schedule: f64,
    pub srs: f64,
    pub offensive_srs: f64,
    pub defensive_srs: f64,
}

pub static SCHEMA: Schema = Schema {
    entity: "season_overview",
    version: 1,
    fields: &[
        FieldSpec::int("year", 0),
        FieldSpec::text("league", 1),
        FieldSpec::text("team", 2),
        FieldSpec::int("wins", 3),
        FieldSpec::int("losses", 4),
        FieldSpec::int("ties", 5),
        FieldSpec::int("divisionFinish", 6).with(Transform::FirstChar),
        FieldSpec::int("playoffExitRound", 7).with(Transform::PlayoffExit),
        FieldSpec::int("pointsFor", 8),
        FieldSpec::int("pointsAgainst", 9),
        FieldSpec::int("pointsDif", 10),
        FieldSpec::text("headCoaches", 11),
        FieldSpec::text("bestPlayerAv", 12),
        FieldSpec::text("bestPlayerPasser", 13),
        FieldSpec::text("bestPlayerRusher", 14),
        FieldSpec::text("bestPlayerReceiver", 15),
        FieldSpec::int("offRankPts", 16),
        FieldSpec::int("offRankYds", 17),
        FieldSpec::int("defRankPts", 18),
        FieldSpec::int("defRankYds", 19),
        FieldSpec::int("takeawayRank", 20),
        FieldSpec::int("pointsDifRank", 21),
        FieldSpec::int("yardsDifRank", 22),
        FieldSpec::int("teamsInLeague", 23),
        FieldSpec::float("marginOfVictory", 24),
        FieldSpec::float("strengthOfSchedule", 25),
        FieldSpec::float("srs", 26),
        FieldSpec::float("offensiveSrs", 27),
        FieldSpec::float("defensiveSrs", 28),
    ],
};

/// The season row for `year`. When the index lists a year twice the later row is used.
pub fn decode_season_overview(body: &[u8], year: i64) -> Result<SeasonOverview> {
    let doc = document::parse(body);
    let rows = table::locate(&doc, TABLE)?;

    let season = last_for_year(&rows, year).ok_or_else(|| {
        GridstatsError::RecordNotFound(format!("no data found for year {}", year))
    })?;

    SCHEMA.decode(season)
}
