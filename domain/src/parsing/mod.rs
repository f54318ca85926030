//! Converted-document parsing
//!
//! The body of a converted exam document is split into blocks by
//! `I BLOK` … `V BLOK` headers, and each block into questions.

pub mod diagnostics;
pub mod header;
pub mod images;
pub mod segmenter;
pub mod structure;
pub mod tree;

pub use diagnostics::structure_warnings;
pub use header::is_block_header;
pub use images::extract_images;
pub use segmenter::split_numbered_questions;
pub use structure::{parse_blocks, parse_question_bank};
pub use tree::DocumentNode;
