//! Abstract document tree
//!
//! The structure parser only needs a handful of DOM operations, so it is
//! written against [`DocumentNode`] rather than a concrete HTML library.
//! The infrastructure layer implements it over `scraper`.

/// An element in a parsed document tree
pub trait DocumentNode: Clone {
    /// Lowercase tag name (`p`, `ol`, `li`, `img`, ...)
    fn tag_name(&self) -> &str;

    /// Direct child elements in document order (text nodes excluded)
    fn element_children(&self) -> Vec<Self>;

    /// Concatenated text of the whole subtree
    fn text_content(&self) -> String;

    /// Attribute value by name
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Descendant elements with the given tag name, in document order,
    /// excluding the node itself
    fn descendants_named(&self, tag: &str) -> Vec<Self>;

    fn is(&self, tag: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(tag)
    }
}

#[cfg(test)]
pub(crate) mod fixture {
    use super::DocumentNode;

    /// Owned in-memory tree for parser tests
    #[derive(Debug, Clone, Default)]
    pub(crate) struct TestNode {
        tag: String,
        text: String,
        attrs: Vec<(String, String)>,
        children: Vec<TestNode>,
    }

    impl TestNode {
        pub(crate) fn element(tag: &str) -> Self {
            Self {
                tag: tag.to_string(),
                ..Default::default()
            }
        }

        pub(crate) fn with_text(tag: &str, text: &str) -> Self {
            Self {
                tag: tag.to_string(),
                text: text.to_string(),
                ..Default::default()
            }
        }

        pub(crate) fn attr(mut self, name: &str, value: &str) -> Self {
            self.attrs.push((name.to_string(), value.to_string()));
            self
        }

        pub(crate) fn child(mut self, child: TestNode) -> Self {
            self.children.push(child);
            self
        }

        pub(crate) fn img(src: &str) -> Self {
            Self::element("img").attr("src", src)
        }
    }

    impl DocumentNode for TestNode {
        fn tag_name(&self) -> &str {
            &self.tag
        }

        fn element_children(&self) -> Vec<Self> {
            self.children.clone()
        }

        fn text_content(&self) -> String {
            let mut text = self.text.clone();
            for child in &self.children {
                text.push_str(&child.text_content());
            }
            text
        }

        fn attribute(&self, name: &str) -> Option<&str> {
            self.attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        }

        fn descendants_named(&self, tag: &str) -> Vec<Self> {
            let mut found = Vec::new();
            for child in &self.children {
                if child.is(tag) {
                    found.push(child.clone());
                }
                found.extend(child.descendants_named(tag));
            }
            found
        }
    }
}
