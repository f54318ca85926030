//! Document body → blocks of questions.
//!
//! Walks the direct children of the body once, keeping a cursor on the
//! block currently being filled. Content before the first block header is
//! ignored, and blocks left without questions are dropped at the end.

use super::diagnostics::structure_warnings;
use super::header::is_block_header;
use super::images::extract_images;
use super::segmenter::split_numbered_questions;
use super::tree::DocumentNode;
use crate::exam::{Block, Question, QuestionBank, QuestionImage};

/// Parse the body into blocks, dropping the ones without questions
pub fn parse_blocks<N: DocumentNode>(body: &N) -> Vec<Block> {
    let mut cursor = BlockCursor::default();

    for element in body.element_children() {
        let text = element.text_content();
        let text = text.trim();

        if is_block_header(text) {
            cursor.open(text);
            continue;
        }

        if is_list(&element) {
            for item in element.element_children().iter().filter(|c| c.is("li")) {
                cursor.add_list_item(item);
            }
        } else {
            cursor.add_element(&element, text);
        }
    }

    cursor.finish()
}

/// Parse the body into a [`QuestionBank`], attaching structure warnings
pub fn parse_question_bank<N: DocumentNode>(body: &N) -> QuestionBank {
    QuestionBank::new(parse_blocks(body)).with_warnings(structure_warnings(body))
}

fn is_list<N: DocumentNode>(element: &N) -> bool {
    element.is("ol") || element.is("ul")
}

/// Mutable walk state for one parse call
#[derive(Default)]
struct BlockCursor {
    blocks: Vec<Block>,
}

impl BlockCursor {
    fn open(&mut self, name: &str) {
        self.blocks.push(Block::new(name));
    }

    fn current(&mut self) -> Option<&mut Block> {
        self.blocks.last_mut()
    }

    /// Each list item is its own unit; images keep the item whole.
    fn add_list_item<N: DocumentNode>(&mut self, item: &N) {
        let Some(block) = self.current() else {
            return;
        };
        let images = extract_images(item);
        let text = item.text_content();
        let text = text.trim();

        if images.is_empty() {
            push_segments(block, text);
        } else if let Some(question) = Question::try_new(text, images) {
            block.push(question);
        }
    }

    fn add_element<N: DocumentNode>(&mut self, element: &N, text: &str) {
        let Some(block) = self.current() else {
            return;
        };
        let images = extract_images(element);

        match (text.is_empty(), images.is_empty()) {
            (false, true) => push_segments(block, text),
            (false, false) => {
                if let Some(question) = Question::try_new(text, images) {
                    block.push(question);
                }
            }
            (true, false) => attach_bare_images(block, images),
            (true, true) => {}
        }
    }

    fn finish(self) -> Vec<Block> {
        self.blocks.into_iter().filter(|b| !b.is_empty()).collect()
    }
}

fn push_segments(block: &mut Block, text: &str) {
    for segment in split_numbered_questions(text) {
        if let Some(question) = Question::text_only(segment) {
            block.push(question);
        }
    }
}

/// A picture on its own paragraph belongs to the question above it
fn attach_bare_images(block: &mut Block, images: Vec<QuestionImage>) {
    match block.last_question_mut() {
        Some(question) => question.append_images(images),
        None => {
            if let Some(question) = Question::try_new("", images) {
                block.push(question);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::PixelSize;
    use crate::media::probe::fixtures;
    use crate::parsing::tree::fixture::TestNode;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    fn p(text: &str) -> TestNode {
        TestNode::with_text("p", text)
    }

    fn li(text: &str) -> TestNode {
        TestNode::with_text("li", text)
    }

    fn png_img(width: u32, height: u32) -> TestNode {
        TestNode::img(&format!(
            "data:image/png;base64,{}",
            STANDARD.encode(fixtures::png(width, height))
        ))
    }

    fn body(children: Vec<TestNode>) -> TestNode {
        children
            .into_iter()
            .fold(TestNode::element("body"), TestNode::child)
    }

    fn texts(block: &Block) -> Vec<&str> {
        block.questions().iter().map(Question::text).collect()
    }

    #[test]
    fn test_headers_open_blocks_in_document_order() {
        let doc = body(vec![
            p("Fənn: Şəbəkələr"),
            p("Ignored before any header"),
            p("I BLOK"),
            p("First question"),
            p("  ii blok - praktiki  "),
            p("Second question"),
        ]);

        let blocks = parse_blocks(&doc);
        let names: Vec<_> = blocks.iter().map(Block::name).collect();
        assert_eq!(names, vec!["I BLOK", "ii blok - praktiki"]);
        assert_eq!(texts(&blocks[0]), vec!["First question"]);
        assert_eq!(texts(&blocks[1]), vec!["Second question"]);
    }

    #[test]
    fn test_empty_blocks_are_dropped() {
        let doc = body(vec![p("I BLOK"), p("II BLOK"), p("Only question"), p("III BLOK")]);

        let blocks = parse_blocks(&doc);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name(), "II BLOK");
    }

    #[test]
    fn test_no_headers_yields_nothing() {
        let doc = body(vec![p("1. Orphan question"), p("2. Another")]);
        assert!(parse_blocks(&doc).is_empty());
        assert!(parse_question_bank(&doc).is_empty());
    }

    #[test]
    fn test_duplicate_block_names_stay_independent() {
        let doc = body(vec![p("I BLOK"), p("a"), p("I BLOK"), p("b")]);
        let blocks = parse_blocks(&doc);
        assert_eq!(blocks.len(), 2);
        assert_eq!(texts(&blocks[0]), vec!["a"]);
        assert_eq!(texts(&blocks[1]), vec!["b"]);
    }

    #[test]
    fn test_paragraph_text_is_segmented() {
        let doc = body(vec![
            p("I BLOK"),
            p("1. What is an IP address?\nExplain briefly.\n2. What is DNS?"),
            p("Unnumbered question"),
        ]);

        let blocks = parse_blocks(&doc);
        assert_eq!(
            texts(&blocks[0]),
            vec![
                "1. What is an IP address? Explain briefly.",
                "2. What is DNS?",
                "Unnumbered question",
            ]
        );
    }

    #[test]
    fn test_list_items_are_separate_units() {
        let list = TestNode::element("ol")
            .child(li("Define a process"))
            .child(li("   "))
            .child(li("1. Define a thread\n2. Define a fiber"))
            .child(TestNode::with_text("p", "not an item"));
        let doc = body(vec![p("I BLOK"), list]);

        let blocks = parse_blocks(&doc);
        assert_eq!(
            texts(&blocks[0]),
            vec!["Define a process", "1. Define a thread", "2. Define a fiber"]
        );
    }

    #[test]
    fn test_list_item_with_text_and_png_is_one_question() {
        let item = li("1. Identify the topology\n2. not split").child(png_img(640, 480));
        let doc = body(vec![p("I BLOK"), TestNode::element("ul").child(item)]);

        let blocks = parse_blocks(&doc);
        assert_eq!(blocks[0].len(), 1);
        let question = &blocks[0].questions()[0];
        assert_eq!(question.text(), "1. Identify the topology\n2. not split");
        assert_eq!(question.images().len(), 1);
        assert_eq!(question.images()[0].content_type(), "image/png");
        assert_eq!(question.images()[0].intrinsic(), PixelSize::try_new(640, 480));
    }

    #[test]
    fn test_image_only_list_item_does_not_attach_upwards() {
        let list = TestNode::element("ol")
            .child(li("Text item"))
            .child(TestNode::element("li").child(png_img(10, 10)));
        let doc = body(vec![p("I BLOK"), list]);

        let blocks = parse_blocks(&doc);
        assert_eq!(blocks[0].len(), 2);
        assert!(!blocks[0].questions()[0].has_images());
        assert_eq!(blocks[0].questions()[1].text(), "");
        assert_eq!(blocks[0].questions()[1].images().len(), 1);
    }

    #[test]
    fn test_paragraph_with_text_and_image_is_not_segmented() {
        let para = p("1. Look at the chart\n2. And this").child(png_img(100, 50));
        let doc = body(vec![p("I BLOK"), para]);

        let blocks = parse_blocks(&doc);
        assert_eq!(blocks[0].len(), 1);
        assert_eq!(blocks[0].questions()[0].images().len(), 1);
    }

    #[test]
    fn test_bare_image_attaches_to_previous_question() {
        let doc = body(vec![
            p("I BLOK"),
            p("1. Describe the circuit"),
            TestNode::element("p").child(png_img(300, 200)),
            TestNode::element("p").child(png_img(30, 20)),
            p("2. Next question"),
        ]);

        let blocks = parse_blocks(&doc);
        let questions = blocks[0].questions();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].images().len(), 2);
        assert!(!questions[1].has_images());
    }

    #[test]
    fn test_bare_image_before_any_question_starts_one() {
        let doc = body(vec![p("I BLOK"), png_img(20, 20), p("Follow-up text")]);

        let blocks = parse_blocks(&doc);
        let questions = blocks[0].questions();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text(), "");
        assert_eq!(questions[0].images().len(), 1);
    }

    #[test]
    fn test_unresolvable_images_and_empty_elements_are_skipped() {
        let doc = body(vec![
            p("I BLOK"),
            TestNode::element("p").child(TestNode::img("file:///C:/figure.png")),
            TestNode::element("div"),
            p("Real question"),
        ]);

        let blocks = parse_blocks(&doc);
        assert_eq!(texts(&blocks[0]), vec!["Real question"]);
        assert!(!blocks[0].questions()[0].has_images());
    }

    #[test]
    fn test_every_question_has_text_or_images() {
        let doc = body(vec![
            p("I BLOK"),
            TestNode::element("ul")
                .child(li(""))
                .child(TestNode::element("li").child(TestNode::img("http://x/y.png"))),
            p("\n\n"),
            TestNode::element("p").child(png_img(1, 1)),
            p("II BLOK"),
            p("q"),
        ]);

        for block in parse_blocks(&doc) {
            assert!(!block.is_empty());
            for question in block.questions() {
                assert!(!question.text().trim().is_empty() || question.has_images());
            }
        }
    }

    #[test]
    fn test_question_bank_carries_warnings() {
        let doc = body(vec![p("I BLOK"), p("q"), TestNode::element("table")]);
        let bank = parse_question_bank(&doc);
        assert_eq!(bank.question_count(), 1);
        assert_eq!(bank.warnings().len(), 1);
    }
}
