// file: src/render/page.rs
// description: Search page view model
// reference: https://docs.rs/minijinja

use crate::search::PageView;
use serde::Serialize;

pub const PAGE_TEMPLATE: &str = include_str!("templates/page.html");

/// Cards per grid row
pub const CARDS_PER_ROW: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct PageModel<'a> {
    /// Text shown in the search box
    pub query: &'a str,
    pub banners: Vec<String>,
    pub search_enabled: bool,
    /// `None` when no results section should be rendered
    pub results: Option<ResultsModel<'a>>,
}

#[derive(Debug, Clone)]
pub struct ResultsModel<'a> {
    pub records: &'a [crate::models::ToolRecord],
    pub page: PageView,
}

#[derive(Debug, Serialize)]
pub(crate) struct PageContext<'a> {
    pub site_name: &'a str,
    pub tagline: &'a str,
    pub placeholder: &'a str,
    pub query: &'a str,
    pub banners: &'a [String],
    pub search_enabled: bool,
    pub rows: Vec<Vec<String>>,
    pub page: Option<PageView>,
}

pub(crate) fn into_rows(cards: Vec<String>) -> Vec<Vec<String>> {
    cards
        .chunks(CARDS_PER_ROW)
        .map(|row| row.to_vec())
        .collect()
}
