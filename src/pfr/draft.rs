use serde::{Deserialize, Serialize};

use crate::error::{GridstatsError, Result};
use crate::parsing::{document, table};
use crate::schema::select::all_for_year;
use crate::schema::{FieldSpec, Schema};

pub const TABLE: &str = "#draft";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPick {
    pub year: i64,
    pub round: i64,
    pub name: String,
    pub pick: i64,
    pub position: String,
    pub last_season: i64,
    pub first_all_pro: i64,
    pub pro_bowl: i64,
    pub starter_years: i64,
    pub career_av: i64,
    pub games_played: i64,
    pub pass_cmp: i64,
    pub pass_att: i64,
    pub pass_yds: i64,
    pub pass_tds: i64,
    pub pass_ints: i64,
    pub rush_att: i64,
    pub rush_yds: i64,
    pub rush_tds: i64,
    pub receiving_recs: i64,
    pub receiving_yds: i64,
    pub receiving_tds: i64,
    pub def_ints: i64,
    pub def_sacks: i64,
    pub college: String,
}

pub static SCHEMA: Schema = Schema {
    entity: "draft_pick",
    version: 1,
    fields: &[
        FieldSpec::int("year", 0),
        FieldSpec::int("round", 1),
        FieldSpec::text("name", 2),
        FieldSpec::int("pick", 3),
        FieldSpec::text("position", 4),
        FieldSpec::int("lastSeason", 5),
        FieldSpec::int("firstAllPro", 6),
        FieldSpec::int("proBowl", 7),
        FieldSpec::int("starterYears", 8),
        FieldSpec::int("careerAv", 9),
        FieldSpec::int("gamesPlayed", 10),
        FieldSpec::int("passCmp", 11),
        FieldSpec::int("passAtt", 12),
        FieldSpec::int("passYds", 13),
        FieldSpec::int("passTds", 14),
        FieldSpec::int("passInts", 15),
        FieldSpec::int("rushAtt", 16),
        FieldSpec::int("rushYds", 17),
        FieldSpec::int("rushTds", 18),
        FieldSpec::int("receivingRecs", 19),
        FieldSpec::int("receivingYds", 20),
        FieldSpec::int("receivingTds", 21),
        FieldSpec::int("defInts", 22),
        FieldSpec::int("defSacks", 23),
        FieldSpec::text("college", 24),
    ],
};

/// Every pick the team made in `year`'s draft, in table order.
pub fn decode_draft_year(body: &[u8], year: i64) -> Result<Vec<DraftPick>> {
    let doc = document::parse(body);
    let rows = table::locate(&doc, TABLE)?;

    let picks: Vec<DraftPick> = SCHEMA.decode_all(&all_for_year(&rows, year))?;
    if picks.is_empty() {
        return Err(GridstatsError::RecordNotFound(format!(
            "no data found for year {}",
            year
        )));
    }

    Ok(picks)
}
