use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

use super::table;
use crate::error::Result;

static COMMENT_MARKERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<!--|-->").unwrap());

/// What to remove from a hidden fragment before re-parsing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unwrap {
    #[default]
    Comments,
    /// The award blocks also carry `Label:` colons that break label/winner splitting.
    CommentsAndColons,
}

/// Invalid UTF-8 sequences become U+FFFD rather than failing the page.
pub fn parse(bytes: &[u8]) -> Html {
    Html::parse_document(&String::from_utf8_lossy(bytes))
}

pub fn clean_hidden(fragment: &str, mode: Unwrap) -> String {
    let uncommented = COMMENT_MARKERS.replace_all(fragment, "");
    match mode {
        Unwrap::Comments => uncommented.into_owned(),
        Unwrap::CommentsAndColons => uncommented.replace(':', ""),
    }
}

/// Exposes markup the site ships inside `<!-- -->` and parses it as a fresh document.
pub fn unwrap_hidden(fragment: &str, mode: Unwrap) -> Html {
    Html::parse_document(&clean_hidden(fragment, mode))
}

/// Inner HTML of the first element matching `css`, if any.
pub fn inner_html(doc: &Html, css: &str) -> Result<Option<String>> {
    Ok(table::find_first(doc.root_element(), css)?.map(|el| el.inner_html()))
}
