use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::error::{GridstatsError, Result};

/// Text of every `th`/`td` in one table row, in document order.
pub type RawRow = Vec<String>;

static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("th, td").unwrap());

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| GridstatsError::Parse(format!("invalid selector {:?}: {:?}", css, e)))
}

pub fn find_first<'a>(scope: ElementRef<'a>, css: &str) -> Result<Option<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(scope.select(&sel).next())
}

/// Rows of every region matching `css` anywhere in `doc`.
pub fn locate(doc: &Html, css: &str) -> Result<Vec<RawRow>> {
    locate_in(doc.root_element(), css)
}

/// Same as [`locate`] but only looks below `scope`, e.g. a conference table
/// inside an already located standings block.
pub fn locate_in(scope: ElementRef<'_>, css: &str) -> Result<Vec<RawRow>> {
    let sel = selector(css)?;
    Ok(scope.select(&sel).flat_map(rows_of).collect())
}

pub fn rows_of(region: ElementRef<'_>) -> Vec<RawRow> {
    region
        .select(&ROW)
        .map(|row| row.select(&CELL).map(cell_text).collect::<RawRow>())
        .filter(|row| !row.is_empty())
        .collect()
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}
