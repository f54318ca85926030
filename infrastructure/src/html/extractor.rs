//! HTML block extractor backed by `scraper`

use super::node::ScraperNode;
use bilet_application::BlockExtractor;
use bilet_domain::{QuestionBank, parse_question_bank};
use scraper::{Html, Selector};
use tracing::debug;

/// Parses converted HTML and walks its `<body>`
#[derive(Debug, Clone, Default)]
pub struct ScraperBlockExtractor;

impl ScraperBlockExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl BlockExtractor for ScraperBlockExtractor {
    fn extract(&self, html: &str) -> QuestionBank {
        let document = Html::parse_document(html);

        // html5ever always synthesizes a body; fall back to the root anyway
        let body = Selector::parse("body")
            .ok()
            .and_then(|selector| document.select(&selector).next())
            .unwrap_or_else(|| document.root_element());
        debug!("Walking <{}> with {} bytes of HTML", body.value().name(), html.len());

        parse_question_bank(&ScraperNode::new(body))
    }
}
