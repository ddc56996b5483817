use serde::Serialize;

use super::table::RawRow;

/// First cell of the column-header row the site repeats inside standings tables.
pub const HEADER_ECHO: &str = "Tm";

/// A named run of rows, e.g. one division inside a conference table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub name: String,
    pub rows: Vec<RawRow>,
}

impl Section {
    fn open(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rows: Vec::new(),
        }
    }
}

/// The section name if `row` is a header: exactly one populated cell.
pub fn section_name(row: &RawRow) -> Option<&str> {
    let mut populated = row.iter().map(|c| c.trim()).filter(|c| !c.is_empty());
    match (populated.next(), populated.next()) {
        (Some(name), None) => Some(name),
        _ => None,
    }
}

pub fn partition(rows: Vec<RawRow>) -> Vec<Section> {
    partition_with(rows, HEADER_ECHO)
}

/// Splits `rows` at single-cell header rows.
///
/// Rows whose first cell is `header_echo` are dropped. Rows seen before the
/// first header land in a leading section with an empty name, which is only
/// emitted when it has rows. The last open section is always flushed.
pub fn partition_with(rows: Vec<RawRow>, header_echo: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut leading = Section::open("");
    let mut current: Option<Section> = None;

    for row in rows {
        if row.first().map(|c| c.as_str()) == Some(header_echo) {
            continue;
        }

        if let Some(name) = section_name(&row) {
            if let Some(done) = current.take() {
                sections.push(done);
            }
            current = Some(Section::open(name));
            continue;
        }

        match current.as_mut() {
            Some(section) => section.rows.push(row),
            None => leading.rows.push(row),
        }
    }

    if let Some(done) = current {
        sections.push(done);
    }
    if !leading.rows.is_empty() {
        sections.insert(0, leading);
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tests::row;

    #[test]
    fn test_trailing_section_is_flushed() {
        let rows = vec![
            row(&["AFC East"]),
            row(&["NE", "12"]),
            row(&["BUF", "10"]),
            row(&["AFC North"]),
            row(&["BAL", "11"]),
        ];

        let sections = partition(rows);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "AFC East");
        assert_eq!(sections[0].rows.len(), 2);
        assert_eq!(sections[1].name, "AFC North");
        assert_eq!(sections[1].rows, vec![row(&["BAL", "11"])]);
    }

    #[test]
    fn test_header_echo_rows_are_not_members() {
        let rows = vec![
            row(&["Tm", "W", "L"]),
            row(&["NFC North"]),
            row(&["Tm", "W", "L"]),
            row(&["GNB", "13", "3"]),
        ];

        let sections = partition(rows);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].rows, vec![row(&["GNB", "13", "3"])]);
    }

    #[test]
    fn test_header_with_blank_padding_cells_still_opens_section() {
        let padded = row(&["", "NFC West", "", ""]);
        assert_eq!(section_name(&padded), Some("NFC West"));
        assert_eq!(section_name(&row(&["", ""])), None);
        assert_eq!(section_name(&row(&["SEA", "10"])), None);
    }

    #[test]
    fn test_rows_before_any_header_get_an_unnamed_section() {
        let rows = vec![row(&["CHI", "7"]), row(&["Western"]), row(&["LAR", "9"])];

        let sections = partition(rows);
        assert_eq!(sections[0].name, "");
        assert_eq!(sections[0].rows, vec![row(&["CHI", "7"])]);
        assert_eq!(sections[1].name, "Western");
    }

    #[test]
    fn test_empty_input_has_no_sections() {
        assert!(partition(Vec::new()).is_empty());
    }
}
