use serde::{Deserialize, Serialize};

use crate::error::{GridstatsError, Result};
use crate::parsing::{document, table};
use crate::schema::{FieldSpec, Schema, Transform};

pub const TABLE: &str = "#team_stats";

// Row layout of the team stats table: two header rows, then team and
// opponent totals, then the league rank rows for each.
const OFFENSE_ROW: usize = 2;
const DEFENSE_ROW: usize = 3;
const OFFENSE_RANK_ROW: usize = 4;
const DEFENSE_RANK_ROW: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub data_type: String,
    pub points_for: i64,
    pub total_yards: i64,
    pub total_plays: i64,
    pub yards_per_play: f64,
    pub turnovers: i64,
    pub fumbles: i64,
    pub first_downs: i64,
    pub pass_completions: i64,
    pub pass_attempts: i64,
    pub pass_yards: i64,
    pub pass_tds: i64,
    pub pass_ints: i64,
    pub pass_yards_per_att: f64,
    pub pass_first_downs: i64,
    pub rush_attempts: i64,
    pub rush_yards: i64,
    #[serde(rename = "rushTDs")]
    pub rush_tds: i64,
    pub rush_yards_per_att: f64,
    pub rush_first_downs: i64,
    pub penalties: i64,
    pub penalty_yards: i64,
    pub penalty_first_downs: i64,
    pub drives: i64,
    pub scoring_drive_percentage: f64,
    pub turnover_drive_percentage: f64,
    pub average_start_position: f64,
    pub avg_drive_length: f64,
    pub avg_drive_plays: f64,
    pub avg_drive_yards: f64,
    pub avg_drive_points: f64,
}

/// League ranks for the same columns as [`TeamStats`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rankings {
    pub data_type: String,
    pub points_for: i64,
    pub total_yards: i64,
    pub total_plays: i64,
    pub yards_per_play: i64,
    pub turnovers: i64,
    pub fumbles: i64,
    pub first_downs: i64,
    pub pass_completions: i64,
    pub pass_attempts: i64,
    pub pass_yards: i64,
    pub pass_tds: i64,
    pub pass_ints: i64,
    pub pass_yards_per_att: i64,
    pub pass_first_downs: i64,
    pub rush_attempts: i64,
    pub rush_yards: i64,
    #[serde(rename = "rushTDs")]
    pub rush_tds: i64,
    pub rush_yards_per_att: i64,
    pub rush_first_downs: i64,
    pub penalties: i64,
    pub penalty_yards: i64,
    pub penalty_first_downs: i64,
    pub drives: i64,
    pub scoring_drive_percentage: i64,
    pub turnover_drive_percentage: i64,
    pub average_start_position: i64,
    pub avg_drive_length: i64,
    pub avg_drive_plays: i64,
    pub avg_drive_yards: i64,
    pub avg_drive_points: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamYearStats {
    pub offense: TeamStats,
    pub defense: TeamStats,
    pub offense_rank: Rankings,
    pub defense_rank: Rankings,
}

pub static STATS_SCHEMA: Schema = Schema {
    entity: "team_stats",
    version: 1,
    fields: &[
        FieldSpec::text("dataType", 0),
        FieldSpec::int("pointsFor", 1),
        FieldSpec::int("totalYards", 2),
        FieldSpec::int("totalPlays", 3),
        FieldSpec::float("yardsPerPlay", 4),
        FieldSpec::int("turnovers", 5),
        FieldSpec::int("fumbles", 6),
        FieldSpec::int("firstDowns", 7),
        FieldSpec::int("passCompletions", 8),
        FieldSpec::int("passAttempts", 9),
        FieldSpec::int("passYards", 10),
        FieldSpec::int("passTds", 11),
        FieldSpec::int("passInts", 12),
        FieldSpec::float("passYardsPerAtt", 13),
        FieldSpec::int("passFirstDowns", 14),
        FieldSpec::int("rushAttempts", 15),
        FieldSpec::int("rushYards", 16),
        FieldSpec::int("rushTDs", 17),
        FieldSpec::float("rushYardsPerAtt", 18),
        FieldSpec::int("rushFirstDowns", 19),
        FieldSpec::int("penalties", 20),
        FieldSpec::int("penaltyYards", 21),
        FieldSpec::int("penaltyFirstDowns", 22),
        FieldSpec::int("drives", 23),
        FieldSpec::float("scoringDrivePercentage", 24),
        FieldSpec::float("turnoverDrivePercentage", 25),
        FieldSpec::float("averageStartPosition", 26).with(Transform::LastFour),
        FieldSpec::float("avgDriveLength", 27).with(Transform::ClockDuration),
        FieldSpec::float("avgDrivePlays", 28),
        FieldSpec::float("avgDriveYards", 29),
        FieldSpec::float("avgDrivePoints", 30),
    ],
};

pub static RANKINGS_SCHEMA: Schema = Schema {
    entity: "team_rankings",
    version: 1,
    fields: &[
        FieldSpec::text("dataType", 0),
        FieldSpec::int("pointsFor", 1),
        FieldSpec::int("totalYards", 2),
        FieldSpec::int("totalPlays", 3),
        FieldSpec::int("yardsPerPlay", 4),
        FieldSpec::int("turnovers", 5),
        FieldSpec::int("fumbles", 6),
        FieldSpec::int("firstDowns", 7),
        FieldSpec::int("passCompletions", 8),
        FieldSpec::int("passAttempts", 9),
        FieldSpec::int("passYards", 10),
        FieldSpec::int("passTds", 11),
        FieldSpec::int("passInts", 12),
        FieldSpec::int("passYardsPerAtt", 13),
        FieldSpec::int("passFirstDowns", 14),
        FieldSpec::int("rushAttempts", 15),
        FieldSpec::int("rushYards", 16),
        FieldSpec::int("rushTDs", 17),
        FieldSpec::int("rushYardsPerAtt", 18),
        FieldSpec::int("rushFirstDowns", 19),
        FieldSpec::int("penalties", 20),
        FieldSpec::int("penaltyYards", 21),
        FieldSpec::int("penaltyFirstDowns", 22),
        FieldSpec::int("drives", 23),
        FieldSpec::int("scoringDrivePercentage", 24),
        FieldSpec::int("turnoverDrivePercentage", 25),
        FieldSpec::int("averageStartPosition", 26),
        FieldSpec::int("avgDriveLength", 27),
        FieldSpec::int("avgDrivePlays", 28),
        FieldSpec::int("avgDriveYards", 29),
        FieldSpec::int("avgDrivePoints", 30),
    ],
};

pub fn decode_team_stats(body: &[u8]) -> Result<TeamYearStats> {
    let doc = document::parse(body);
    let rows = table::locate(&doc, TABLE)?;

    if rows.len() <= DEFENSE_RANK_ROW {
        return Err(GridstatsError::RecordNotFound(
            "no data found for selected year".to_string(),
        ));
    }

    Ok(TeamYearStats {
        offense: STATS_SCHEMA.decode(&rows[OFFENSE_ROW])?,
        defense: STATS_SCHEMA.decode(&rows[DEFENSE_ROW])?,
        offense_rank: RANKINGS_SCHEMA.decode(&rows[OFFENSE_RANK_ROW])?,
        defense_rank: RANKINGS_SCHEMA.decode(&rows[DEFENSE_RANK_ROW])?,
    })
}
