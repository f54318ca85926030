//! Exam entities: images, questions and blocks

use crate::core::error::DomainError;
use crate::media::PixelSize;

/// An image embedded in a question (Value Object)
///
/// Immutable once created. `intrinsic` is what the container header says;
/// `declared` is what the `<img>` markup claimed, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionImage {
    content_type: String,
    data: Vec<u8>,
    intrinsic: Option<PixelSize>,
    declared: Option<PixelSize>,
}

impl QuestionImage {
    pub fn new(
        content_type: impl Into<String>,
        data: Vec<u8>,
        intrinsic: Option<PixelSize>,
        declared: Option<PixelSize>,
    ) -> Self {
        Self {
            content_type: content_type.into(),
            data,
            intrinsic,
            declared,
        }
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixel size read from the container header
    pub fn intrinsic(&self) -> Option<PixelSize> {
        self.intrinsic
    }

    /// Pixel size hinted by the markup
    pub fn declared(&self) -> Option<PixelSize> {
        self.declared
    }
}

/// One exam item: text, images, or both (Entity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    images: Vec<QuestionImage>,
}

impl Question {
    /// Create a question
    ///
    /// Fails if the text is blank and there are no images.
    pub fn new(text: impl Into<String>, images: Vec<QuestionImage>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() && images.is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question needs text or at least one image".to_string(),
            ));
        }
        Ok(Self { text, images })
    }

    /// Try to create a question, returning None if invalid
    pub fn try_new(text: impl Into<String>, images: Vec<QuestionImage>) -> Option<Self> {
        Self::new(text, images).ok()
    }

    /// Try to create a question without images
    pub fn text_only(text: impl Into<String>) -> Option<Self> {
        Self::try_new(text, Vec::new())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn images(&self) -> &[QuestionImage] {
        &self.images
    }

    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    /// Attach images that follow the question in the source document
    pub fn append_images(&mut self, images: impl IntoIterator<Item = QuestionImage>) {
        self.images.extend(images);
    }
}

/// A named group of questions (Entity)
///
/// Names are kept verbatim and never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    name: String,
    questions: Vec<Question>,
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            questions: Vec::new(),
        }
    }

    pub fn with_questions(name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn push(&mut self, question: Question) {
        self.questions.push(question);
    }

    pub fn last_question_mut(&mut self) -> Option<&mut Question> {
        self.questions.last_mut()
    }
}
