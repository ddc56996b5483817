//! Cell-level rules for the upstream's formatting quirks.

use std::str::FromStr;
use strum::EnumString;

/// How far a team got in the playoffs, as the season summary labels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum PlayoffExit {
    #[strum(serialize = "Lost WC")]
    LostWildCard = 1,
    #[strum(serialize = "Lost Div")]
    LostDivisional = 2,
    #[strum(serialize = "Lost Conf")]
    LostConference = 3,
    #[strum(serialize = "Lost SB", serialize = "Lost Champ")]
    LostFinal = 4,
    #[strum(serialize = "Won SB", serialize = "Won Champ")]
    WonFinal = 5,
}

/// Ordinal of the playoff exit; anything unrecognised ("", "Bye", ...) is 0.
pub fn map_playoff_exit(label: &str) -> i64 {
    PlayoffExit::from_str(label.trim())
        .map(|exit| exit as i64)
        .unwrap_or(0)
}

/// Drops one trailing `*` or `+` (playoff / division-title marks).
pub fn strip_trailing_marker(name: &str) -> &str {
    let name = name.trim();
    name.strip_suffix('*')
        .or_else(|| name.strip_suffix('+'))
        .unwrap_or(name)
}

pub fn first_char(cell: &str) -> &str {
    let cell = cell.trim();
    match cell.chars().next() {
        Some(c) => &cell[..c.len_utf8()],
        None => cell,
    }
}

/// The last `n` characters, or the whole cell when it is shorter.
pub fn last_chars(cell: &str, n: usize) -> &str {
    let cell = cell.trim();
    if n == 0 {
        return "";
    }
    match cell.char_indices().rev().nth(n - 1) {
        Some((i, _)) => &cell[i..],
        None => cell,
    }
}

/// `H.MM` (or `H:MM`) as fractional hours: `"2.15"` is 2 + 15/60.
pub fn decode_drive_length(cell: &str) -> f64 {
    let cell = cell.trim();
    match cell.split_once(['.', ':']) {
        Some((hours, minutes)) => parse_float(hours) + parse_float(minutes) / 60.0,
        None => parse_float(cell),
    }
}

pub fn parse_int(cell: &str) -> i64 {
    cell.trim().parse().unwrap_or(0)
}

pub fn parse_float(cell: &str) -> f64 {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .unwrap_or(0.0)
}
