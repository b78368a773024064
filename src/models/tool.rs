// file: src/models/tool.rs
// description: Tool directory record as stored in the search index
// reference: Rows returned by the tool directory table

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
    /// Display name of the tool
    #[serde(rename = "Title", default)]
    pub title: String,

    /// Free text description
    #[serde(default)]
    pub content: String,

    /// Comma separated feature tags
    #[serde(rename = "Features", default)]
    pub features: String,

    /// Host and path of the tool's website, stored without a scheme
    #[serde(rename = "Website", default)]
    pub website: String,
}

impl ToolRecord {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        features: impl Into<String>,
        website: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            features: features.into(),
            website: website.into(),
        }
    }

    /// Feature tags, trimmed. Empty segments are dropped.
    pub fn tags(&self) -> Vec<&str> {
        self.features
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    /// Link target for the "Know More" button.
    pub fn website_url(&self, scheme: &str) -> Option<String> {
        let website = self.website.trim();
        if website.is_empty() {
            return None;
        }

        if website.starts_with("http://") || website.starts_with("https://") {
            Some(website.to_string())
        } else {
            Some(format!("{}{}", scheme, website))
        }
    }

    /// One line summary used by the terminal search command
    pub fn format_summary(&self, max_content_len: usize) -> String {
        let content_preview = if self.content.chars().count() > max_content_len {
            let truncated: String = self.content.chars().take(max_content_len).collect();
            format!("{}...", truncated)
        } else {
            self.content.clone()
        };

        format!("{} [{}]\n{}\n", self.title, self.tags().join(", "), content_preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_trimmed() {
        let record = ToolRecord::new("Bot", "A chatbot", "a, b ,c", "bot.ai");
        assert_eq!(record.tags(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_features_yield_no_tags() {
        let record = ToolRecord::new("Bot", "A chatbot", "", "bot.ai");
        assert!(record.tags().is_empty());

        let record = ToolRecord::new("Bot", "A chatbot", " , ,", "bot.ai");
        assert!(record.tags().is_empty());
    }

    #[test]
    fn test_website_url() {
        let record = ToolRecord::new("Bot", "", "", "bot.ai/home");
        assert_eq!(
            record.website_url("https://"),
            Some("https://bot.ai/home".to_string())
        );

        let record = ToolRecord::new("Bot", "", "", "http://bot.ai");
        assert_eq!(record.website_url("https://"), Some("http://bot.ai".to_string()));

        let record = ToolRecord::default();
        assert_eq!(record.website_url("https://"), None);
    }

    #[test]
    fn test_deserialize_source_field_names() {
        let record: ToolRecord = serde_json::from_str(
            r#"{"Title": "Writer", "content": "Writes text", "Features": "ai,text", "Website": "writer.io"}"#,
        )
        .unwrap();
        assert_eq!(record.title, "Writer");
        assert_eq!(record.tags(), vec!["ai", "text"]);

        let partial: ToolRecord = serde_json::from_str(r#"{"Title": "Only title"}"#).unwrap();
        assert_eq!(partial.content, "");
        assert_eq!(partial.website, "");
    }

    #[test]
    fn test_format_summary_truncates() {
        let record = ToolRecord::new("Bot", "This is a very long description", "chat", "bot.ai");
        let summary = record.format_summary(9);
        assert!(summary.contains("This is a..."));
        assert!(summary.contains("[chat]"));
    }
}
