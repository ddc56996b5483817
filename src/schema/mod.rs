//! Positional decoding of table rows into typed records.
//!
//! Every entity declares a [`Schema`]: which column feeds which named field,
//! how the text is read, and which quirk transform applies first. When the
//! upstream reorders columns only the schema changes, and its `version` is
//! bumped so the drift shows up in logs and errors.

pub mod select;
pub mod transforms;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{GridstatsError, Result};
use transforms::{
    decode_drive_length, first_char, last_chars, map_playoff_exit, parse_float, parse_int,
    strip_trailing_marker,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    None,
    StripTrailingMarker,
    /// Only the leading character is numeric ("1st of 4").
    FirstChar,
    /// Yard-line label prefix in front of the number ("Own 28.3").
    LastFour,
    PlayoffExit,
    ClockDuration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub column: usize,
    pub kind: FieldKind,
    pub transform: Transform,
}

impl FieldSpec {
    pub const fn int(name: &'static str, column: usize) -> Self {
        Self::new(name, column, FieldKind::Integer)
    }

    pub const fn float(name: &'static str, column: usize) -> Self {
        Self::new(name, column, FieldKind::Float)
    }

    pub const fn text(name: &'static str, column: usize) -> Self {
        Self::new(name, column, FieldKind::Text)
    }

    pub const fn with(self, transform: Transform) -> Self {
        Self { transform, ..self }
    }

    const fn new(name: &'static str, column: usize, kind: FieldKind) -> Self {
        Self {
            name,
            column,
            kind,
            transform: Transform::None,
        }
    }

    /// Never fails: unparsable numbers become zero.
    pub fn read(&self, cell: &str) -> Value {
        match self.transform {
            Transform::PlayoffExit => return Value::from(map_playoff_exit(cell)),
            Transform::ClockDuration => return float_value(decode_drive_length(cell)),
            _ => {}
        }

        let text = match self.transform {
            Transform::StripTrailingMarker => strip_trailing_marker(cell),
            Transform::FirstChar => first_char(cell),
            Transform::LastFour => last_chars(cell, 4),
            _ => cell.trim(),
        };

        match self.kind {
            FieldKind::Integer => Value::from(parse_int(text)),
            FieldKind::Float => float_value(parse_float(text)),
            FieldKind::Text => Value::from(text),
        }
    }
}

fn float_value(f: f64) -> Value {
    Value::from(if f.is_finite() { f } else { 0.0 })
}

#[derive(Debug)]
pub struct Schema {
    pub entity: &'static str,
    pub version: u32,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Cells a row needs before every field can be read.
    pub fn min_cells(&self) -> usize {
        self.fields.iter().map(|f| f.column + 1).max().unwrap_or(0)
    }

    /// Reads `row` into a JSON object keyed by field name.
    pub fn decode_value(&self, row: &[String]) -> Result<Map<String, Value>> {
        let needed = self.min_cells();
        if row.len() < needed {
            return Err(GridstatsError::RecordNotFound(format!(
                "{} row has {} cells, schema v{} needs {}",
                self.entity,
                row.len(),
                self.version,
                needed
            )));
        }

        Ok(self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.read(&row[f.column])))
            .collect())
    }

    pub fn decode<T: DeserializeOwned>(&self, row: &[String]) -> Result<T> {
        let object = self.decode_value(row)?;
        serde_json::from_value(Value::Object(object)).map_err(|e| {
            GridstatsError::Parse(format!(
                "{} schema v{} does not fit its record: {}",
                self.entity, self.version, e
            ))
        })
    }

    /// Decodes each row, dropping (and logging) the ones that are too short.
    pub fn decode_all<T: DeserializeOwned>(&self, rows: &[&Vec<String>]) -> Result<Vec<T>> {
        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            match self.decode(row) {
                Ok(record) => records.push(record),
                Err(GridstatsError::RecordNotFound(reason)) => {
                    log::debug!("Rejected row {:?}: {}", row, reason)
                }
                Err(e) => return Err(e),
            }
        }
        Ok(records)
    }
}
