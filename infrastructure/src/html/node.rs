//! [`DocumentNode`] over `scraper` elements

use bilet_domain::DocumentNode;
use scraper::ElementRef;

/// A borrowed element of a parsed HTML document
#[derive(Debug, Clone, Copy)]
pub struct ScraperNode<'a> {
    element: ElementRef<'a>,
}

impl<'a> ScraperNode<'a> {
    pub fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }
}

impl DocumentNode for ScraperNode<'_> {
    fn tag_name(&self) -> &str {
        self.element.value().name()
    }

    fn element_children(&self) -> Vec<Self> {
        self.element
            .children()
            .filter_map(ElementRef::wrap)
            .map(ScraperNode::new)
            .collect()
    }

    /// Text nodes of the subtree, concatenated as-is
    fn text_content(&self) -> String {
        self.element.text().collect()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }

    fn descendants_named(&self, tag: &str) -> Vec<Self> {
        self.element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|element| element.value().name().eq_ignore_ascii_case(tag))
            .map(ScraperNode::new)
            .collect()
    }
}
