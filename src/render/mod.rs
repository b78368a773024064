// file: src/render/mod.rs
// description: HTML rendering of result cards and the search page
// reference: https://docs.rs/minijinja

pub mod card;
pub mod page;

pub use card::CardView;
pub use page::{CARDS_PER_ROW, PageModel, ResultsModel};

use crate::config::UiConfig;
use crate::error::Result;
use crate::models::ToolRecord;
use card::CARD_TEMPLATE;
use minijinja::Environment;
use page::{PAGE_TEMPLATE, PageContext, into_rows};
use tracing::warn;

/// Template names end in `.html` so minijinja auto-escapes every field.
pub struct Renderer {
    env: Environment<'static>,
    ui: UiConfig,
}

impl Renderer {
    pub fn new(ui: UiConfig) -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("card.html", CARD_TEMPLATE)?;
        env.add_template("page.html", PAGE_TEMPLATE)?;

        Ok(Self { env, ui })
    }

    pub fn render_card(&self, record: &ToolRecord) -> Result<String> {
        let template = self.env.get_template("card.html")?;
        let html = template.render(CardView::from_record(record, &self.ui.website_scheme))?;
        Ok(html)
    }

    /// Render the full page. A card that fails to render is logged and left
    /// out; the rest of the page still renders.
    pub fn render_page(&self, model: &PageModel<'_>) -> Result<String> {
        let (rows, page) = match &model.results {
            Some(results) => {
                let cards = results
                    .records
                    .iter()
                    .filter_map(|record| match self.render_card(record) {
                        Ok(card) => Some(card),
                        Err(e) => {
                            warn!("Skipping card for {:?}: {}", record.title, e);
                            None
                        }
                    })
                    .collect();
                (into_rows(cards), Some(results.page))
            }
            None => (Vec::new(), None),
        };

        let template = self.env.get_template("page.html")?;
        let html = template.render(PageContext {
            site_name: &self.ui.site_name,
            tagline: &self.ui.tagline,
            placeholder: &self.ui.placeholder,
            query: model.query,
            banners: &model.banners,
            search_enabled: model.search_enabled,
            rows,
            page,
        })?;

        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::PageView;

    fn renderer() -> Renderer {
        Renderer::new(UiConfig::default()).unwrap()
    }

    fn tools(n: usize) -> Vec<ToolRecord> {
        (0..n)
            .map(|i| ToolRecord::new(format!("Tool {}", i), "A chatbot", "chat", "bot.ai"))
            .collect()
    }

    #[test]
    fn test_card_tag_chips() {
        let renderer = renderer();

        let card = renderer
            .render_card(&ToolRecord::new("Bot", "Chats", "a, b ,c", "bot.ai"))
            .unwrap();
        assert_eq!(card.matches("class=\"tag\"").count(), 3);
        assert!(card.contains(">a<") && card.contains(">b<") && card.contains(">c<"));

        let card = renderer
            .render_card(&ToolRecord::new("Bot", "Chats", "", "bot.ai"))
            .unwrap();
        assert_eq!(card.matches("class=\"tag\"").count(), 0);
    }

    #[test]
    fn test_card_link_and_placeholders() {
        let card = renderer()
            .render_card(&ToolRecord::new("Bot", "Chats", "", "bot.ai/app"))
            .unwrap();
        assert!(card.contains("Know More"));
        assert!(card.contains("bot.ai"));
        assert!(card.contains("https:"));
        assert_eq!(card.matches("href=\"#\"").count(), 2);

        let card = renderer().render_card(&ToolRecord::default()).unwrap();
        assert!(!card.contains("Know More"));
        assert!(card.contains("Subscribe"));
    }

    #[test]
    fn test_card_escapes_fields() {
        let card = renderer()
            .render_card(&ToolRecord::new("<b>Bot</b>", "x & y", "", ""))
            .unwrap();
        assert!(!card.contains("<b>Bot</b>"));
        assert!(card.contains("&lt;b&gt;"));
        assert!(card.contains("x &amp; y"));
    }

    #[test]
    fn test_page_with_more_results() {
        let records = tools(5);
        let html = renderer()
            .render_page(&PageModel {
                query: "chatbot",
                banners: Vec::new(),
                search_enabled: true,
                results: Some(ResultsModel {
                    records: &records,
                    page: PageView::new(5, 12),
                }),
            })
            .unwrap();

        assert_eq!(html.matches("class=\"card\"").count(), 5);
        assert_eq!(html.matches("class=\"row\"").count(), 2);
        assert!(html.contains("Show More Results"));
        assert!(html.contains("Showing 5 of 12 results"));
        assert!(html.contains("value=\"chatbot\""));
    }

    #[test]
    fn test_page_all_results_shown() {
        let records = tools(12);
        let html = renderer()
            .render_page(&PageModel {
                query: "chatbot",
                banners: Vec::new(),
                search_enabled: true,
                results: Some(ResultsModel {
                    records: &records,
                    page: PageView::new(15, 12),
                }),
            })
            .unwrap();

        assert_eq!(html.matches("class=\"card\"").count(), 12);
        assert!(!html.contains("Show More Results"));
        assert!(html.contains("Showing 12 of 12 results"));
    }

    #[test]
    fn test_page_without_results_section() {
        let html = renderer()
            .render_page(&PageModel {
                query: "",
                banners: vec!["Database connection failed: unreachable".to_string()],
                search_enabled: false,
                results: None,
            })
            .unwrap();

        assert_eq!(html.matches("role=\"alert\"").count(), 1);
        assert!(html.contains("Database connection failed: unreachable"));
        assert!(html.contains("name=\"q\""));
        assert!(html.contains(" disabled"));
        assert!(!html.contains("class=\"card\""));
        assert!(!html.contains("Show More Results"));
        assert!(!html.contains("Showing"));
    }

    #[test]
    fn test_page_no_matches() {
        let html = renderer()
            .render_page(&PageModel {
                query: "video",
                banners: Vec::new(),
                search_enabled: true,
                results: Some(ResultsModel {
                    records: &[],
                    page: PageView::new(5, 0),
                }),
            })
            .unwrap();

        assert!(html.contains("No tools found"));
        assert!(!html.contains("Show More Results"));
    }
}
