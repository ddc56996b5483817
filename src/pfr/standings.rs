use serde::{Deserialize, Serialize};

use crate::error::{GridstatsError, Result};
use crate::parsing::{document, partition, table, Section};
use crate::schema::{FieldSpec, Schema, Transform};

/// First season the site splits standings into AFC and NFC tables.
pub const MERGER_YEAR: i64 = 1970;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSeason {
    pub team: String,
    pub wins: i64,
    pub losses: i64,
    pub win_loss_perc: f64,
    pub points_for: i64,
    pub points_against: i64,
    pub points_dif: i64,
    pub margin_of_victory: f64,
    pub strength_of_schedule: f64,
    pub srs: f64,
    pub offensive_srs: f64,
    pub defensive_srs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Division {
    pub name: String,
    pub teams: Vec<TeamSeason>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conference {
    pub name: String,
    pub divisions: Vec<Division>,
}

pub static SCHEMA: Schema = Schema {
    entity: "team_season",
    version: 1,
    fields: &[
        FieldSpec::text("team", 0).with(Transform::StripTrailingMarker),
        FieldSpec::int("wins", 1),
        FieldSpec::int("losses", 2),
        FieldSpec::float("winLossPerc", 3),
        FieldSpec::int("pointsFor", 4),
        FieldSpec::int("pointsAgainst", 5),
        FieldSpec::int("pointsDif", 6),
        FieldSpec::float("marginOfVictory", 7),
        FieldSpec::float("strengthOfSchedule", 8),
        FieldSpec::float("srs", 9),
        FieldSpec::float("offensiveSrs", 10),
        FieldSpec::float("defensiveSrs", 11),
    ],
};

/// Conference tables on the season page, in response order.
pub fn conference_tables(year: i64) -> &'static [&'static str] {
    if year >= MERGER_YEAR {
        &["NFC", "AFC"]
    } else {
        &["NFL"]
    }
}

pub fn decode_standings(body: &[u8], year: i64) -> Result<Vec<Conference>> {
    let doc = document::parse(body);

    let mut league = Vec::new();
    for name in conference_tables(year) {
        let rows = table::locate(&doc, &format!("#{}", name))?;
        let divisions = partition(rows)
            .into_iter()
            .map(decode_division)
            .collect::<Result<Vec<_>>>()?;

        league.push(Conference {
            name: name.to_string(),
            divisions,
        });
    }

    let teams: usize = league
        .iter()
        .flat_map(|c| &c.divisions)
        .map(|d| d.teams.len())
        .sum();
    if teams == 0 {
        return Err(GridstatsError::RecordNotFound(format!(
            "no standings found for {}",
            year
        )));
    }

    Ok(league)
}

fn decode_division(section: Section) -> Result<Division> {
    let rows: Vec<&Vec<String>> = section.rows.iter().collect();
    Ok(Division {
        teams: SCHEMA.decode_all(&rows)?,
        name: section.name,
    })
}
