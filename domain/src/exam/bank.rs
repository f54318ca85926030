//! The result of one document parse

use super::entities::Block;

/// Content the parser cannot turn into questions reliably
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureWarning {
    /// The document contains tables
    Tables(usize),
    /// The document contains math formulas
    Formulas(usize),
}

impl StructureWarning {
    pub fn message(&self) -> String {
        match self {
            StructureWarning::Tables(count) => format!(
                "Found {} table(s); insert them into the source document as images so they reach the tickets intact",
                count
            ),
            StructureWarning::Formulas(count) => format!(
                "Found {} formula(s); insert them into the source document as images so they reach the tickets intact",
                count
            ),
        }
    }
}

impl std::fmt::Display for StructureWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Ordered question blocks extracted from one document
///
/// Never holds an empty block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    blocks: Vec<Block>,
    warnings: Vec<StructureWarning>,
}

impl QuestionBank {
    /// Build a bank, dropping blocks without questions
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            blocks: blocks.into_iter().filter(|b| !b.is_empty()).collect(),
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<StructureWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn warnings(&self) -> &[StructureWarning] {
        &self.warnings
    }

    /// True when the document had no usable block
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn question_count(&self) -> usize {
        self.blocks.iter().map(Block::len).sum()
    }

    /// Largest ticket count possible without repeating a question
    pub fn max_unique_tickets(&self) -> usize {
        self.blocks.iter().map(Block::len).min().unwrap_or(0)
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}
