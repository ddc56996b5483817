use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::EnumString;

use crate::error::{GridstatsError, Result};
use crate::parsing::{document, table};
use crate::schema::{FieldSpec, Schema};

pub const TABLE: &str = "#playoff_results";
const HEADER_ECHO: &str = "Week";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum PlayoffRound {
    WildCard = 1,
    Division = 2,
    ConfChamp = 3,
    SuperBowl = 4,
}

pub fn round_number(label: &str) -> i64 {
    PlayoffRound::from_str(label.trim())
        .map(|round| round as i64)
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayoffGame {
    #[serde(rename = "roundNum", default)]
    pub round: i64,
    #[serde(rename = "roundName")]
    pub week: String,
    pub day: String,
    pub date: String,
    pub winner: String,
    pub loser: String,
    #[serde(rename = "boxScoreId")]
    pub box_score_id: String,
    #[serde(rename = "ptsW")]
    pub points_w: i64,
    #[serde(rename = "ptsL")]
    pub points_l: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayoffResult {
    pub year: i64,
    pub champ: String,
    pub games: Vec<PlayoffGame>,
}

pub static SCHEMA: Schema = Schema {
    entity: "playoff_game",
    version: 1,
    fields: &[
        FieldSpec::text("roundName", 0),
        FieldSpec::text("day", 1),
        FieldSpec::text("date", 2),
        FieldSpec::text("winner", 3),
        FieldSpec::text("loser", 4),
        FieldSpec::text("boxScoreId", 5),
        FieldSpec::int("ptsW", 6),
        FieldSpec::int("ptsL", 7),
    ],
};

pub fn decode_playoffs(body: &[u8], year: i64) -> Result<PlayoffResult> {
    let doc = document::parse(body);
    let rows = table::locate(&doc, TABLE)?;

    let game_rows: Vec<&Vec<String>> = rows
        .iter()
        .filter(|r| r.first().map(|c| c.as_str()) != Some(HEADER_ECHO))
        .collect();

    let mut games: Vec<PlayoffGame> = SCHEMA.decode_all(&game_rows)?;
    if games.is_empty() {
        return Err(GridstatsError::RecordNotFound(format!(
            "no playoff games found for {}",
            year
        )));
    }

    for game in &mut games {
        game.round = round_number(&game.week);
    }

    let champ = games
        .iter()
        .rev()
        .find(|g| g.round == PlayoffRound::SuperBowl as i64)
        .map(|g| g.winner.clone())
        .unwrap_or_default();

    Ok(PlayoffResult { year, champ, games })
}
