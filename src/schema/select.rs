//! Year-scoped row selection. Each entity picks its own duplicate policy.

use crate::parsing::RawRow;

pub fn row_year(row: &RawRow) -> Option<i64> {
    row.first()?.trim().parse().ok()
}

/// Last row whose first cell is `year`; later rows win over earlier ones.
pub fn last_for_year(rows: &[RawRow], year: i64) -> Option<&RawRow> {
    rows.iter().filter(|r| row_year(r) == Some(year)).last()
}

/// Every row whose first cell is `year`, in table order.
pub fn all_for_year(rows: &[RawRow], year: i64) -> Vec<&RawRow> {
    rows.iter().filter(|r| row_year(r) == Some(year)).collect()
}
