//! Exam material domain
//!
//! A document parse yields a [`QuestionBank`]: ordered [`Block`]s, each a
//! named list of [`Question`]s, each carrying text and/or [`QuestionImage`]s.

pub mod bank;
pub mod entities;

pub use bank::{QuestionBank, StructureWarning};
pub use entities::{Block, Question, QuestionImage};
