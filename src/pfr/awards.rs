use itertools::Itertools;
use scraper::ElementRef;
use serde::{Deserialize, Serialize};

use crate::error::{GridstatsError, Result};
use crate::parsing::document::{self, Unwrap};
use crate::parsing::table;

/// Visible wrapper whose body is shipped commented out.
pub const CONTAINER: &str = "#all_awards";
pub const DETAIL: &str = "#div_awards";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardWinner {
    pub award: String,
    pub winner: String,
}

pub fn decode_award_winners(body: &[u8]) -> Result<Vec<AwardWinner>> {
    let doc = document::parse(body);
    let fragment = document::inner_html(&doc, CONTAINER)?.ok_or_else(not_found)?;

    let detail_doc = document::unwrap_hidden(&fragment, Unwrap::CommentsAndColons);
    let detail = table::find_first(detail_doc.root_element(), DETAIL)?.ok_or_else(not_found)?;

    let winners: Vec<AwardWinner> = detail
        .children()
        .filter_map(ElementRef::wrap)
        .filter_map(award_entry)
        .collect();

    if winners.is_empty() {
        return Err(not_found());
    }
    Ok(winners)
}

// First text piece names the award; whatever follows is the winner.
fn award_entry(entry: ElementRef<'_>) -> Option<AwardWinner> {
    let mut pieces = entry.text().map(str::trim).filter(|t| !t.is_empty());
    let award = pieces.next()?.to_string();
    let winner = pieces.join(" ");

    if winner.is_empty() {
        return None;
    }
    Some(AwardWinner { award, winner })
}

fn not_found() -> GridstatsError {
    GridstatsError::RecordNotFound("no award winners found".to_string())
}
