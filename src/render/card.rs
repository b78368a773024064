// file: src/render/card.rs
// description: Result card view model
// reference: https://docs.rs/minijinja

use crate::models::ToolRecord;
use serde::Serialize;

pub const CARD_TEMPLATE: &str = include_str!("templates/card.html");

/// Template context for one result card
#[derive(Debug, Serialize)]
pub struct CardView<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub tags: Vec<&'a str>,
    pub website_url: Option<String>,
}

impl<'a> CardView<'a> {
    pub fn from_record(record: &'a ToolRecord, scheme: &str) -> Self {
        Self {
            title: &record.title,
            content: &record.content,
            tags: record.tags(),
            website_url: record.website_url(scheme),
        }
    }
}
