//! Ticket assembly: one question per block per ticket.
//!
//! Every block is shuffled once per run. Ticket `i` takes position `i` of
//! each shuffled block (strict) or position `i mod len` (wrap-allowed).
//! Blocks and questions are only borrowed; tickets hold references.

use super::policy::RepetitionPolicy;
use super::shuffle::{ShuffleSource, shuffled_indices};
use crate::exam::{Block, Question};
use thiserror::Error;

/// Why a ticket run was refused. No tickets are produced in any case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Ticket count must be at least 1")]
    InvalidTicketCount,

    #[error("No question blocks to draw from")]
    NoBlocks,

    #[error("Block '{block}' has no questions")]
    EmptyBlock { block: String },

    #[error(
        "Block '{block}' has {available} question(s) but {requested} ticket(s) were requested without repeats"
    )]
    InsufficientQuestions {
        block: String,
        available: usize,
        requested: usize,
    },
}

impl AssemblyError {
    /// Name of the offending block, when one is to blame
    pub fn block_name(&self) -> Option<&str> {
        match self {
            AssemblyError::EmptyBlock { block }
            | AssemblyError::InsufficientQuestions { block, .. } => Some(block),
            _ => None,
        }
    }
}

/// A question drawn for a ticket, tagged with its block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketQuestion<'a> {
    pub block_name: &'a str,
    pub question: &'a Question,
}

/// One generated exam variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<'a> {
    /// 1-based, sequential within a run
    pub number: usize,
    /// One entry per block, in block order
    pub questions: Vec<TicketQuestion<'a>>,
}

/// Validate a run before any randomness is consumed.
///
/// Checks, in order: the ticket count, the presence of blocks, empty
/// blocks, and (under the strict policy) block sizes. The first failure
/// wins.
pub fn check_preconditions(
    blocks: &[Block],
    count: usize,
    policy: RepetitionPolicy,
) -> Result<(), AssemblyError> {
    if count < 1 {
        return Err(AssemblyError::InvalidTicketCount);
    }
    if blocks.is_empty() {
        return Err(AssemblyError::NoBlocks);
    }
    if let Some(empty) = blocks.iter().find(|b| b.is_empty()) {
        return Err(AssemblyError::EmptyBlock {
            block: empty.name().to_string(),
        });
    }
    if policy.is_strict()
        && let Some(short) = blocks.iter().find(|b| b.len() < count)
    {
        return Err(AssemblyError::InsufficientQuestions {
            block: short.name().to_string(),
            available: short.len(),
            requested: count,
        });
    }
    Ok(())
}

/// Assemble `count` tickets from `blocks`.
///
/// # Examples
///
/// ```
/// use bilet_domain::exam::{Block, Question};
/// use bilet_domain::tickets::{FixedSequenceSource, RepetitionPolicy, assemble_tickets};
///
/// let blocks = vec![
///     Block::with_questions("I BLOK", vec![Question::text_only("a").unwrap()]),
///     Block::with_questions("II BLOK", vec![Question::text_only("b").unwrap()]),
/// ];
/// let tickets = assemble_tickets(
///     &blocks,
///     2,
///     RepetitionPolicy::WrapAllowed,
///     &mut FixedSequenceSource::identity(),
/// )
/// .unwrap();
///
/// assert_eq!(tickets.len(), 2);
/// assert_eq!(tickets[1].number, 2);
/// assert_eq!(tickets[1].questions[1].question.text(), "b");
/// ```
pub fn assemble_tickets<'a>(
    blocks: &'a [Block],
    count: usize,
    policy: RepetitionPolicy,
    source: &mut dyn ShuffleSource,
) -> Result<Vec<Ticket<'a>>, AssemblyError> {
    check_preconditions(blocks, count, policy)?;

    let orders: Vec<Vec<usize>> = blocks
        .iter()
        .map(|block| shuffled_indices(block.len(), source))
        .collect();

    let tickets = (0..count)
        .map(|i| Ticket {
            number: i + 1,
            questions: blocks
                .iter()
                .zip(&orders)
                .map(|(block, order)| {
                    // strict runs never reach i >= len
                    let position = order[i % order.len()];
                    TicketQuestion {
                        block_name: block.name(),
                        question: &block.questions()[position],
                    }
                })
                .collect(),
        })
        .collect();

    Ok(tickets)
}
