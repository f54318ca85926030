//! Load question bank use case
//!
//! Reads a converted document through a [`DocumentSource`] and splits it
//! into blocks with a [`BlockExtractor`]. Finding no blocks is not an
//! error: the caller gets an empty bank and decides what to tell the user.

use crate::ports::block_extractor::BlockExtractor;
use crate::ports::document_source::{DocumentSource, DocumentSourceError};
use crate::ports::progress::{NoProgress, ProgressNotifier, Stage};
use bilet_domain::QuestionBank;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while loading a question bank
#[derive(Error, Debug)]
pub enum LoadQuestionBankError {
    #[error("Failed to load document: {0}")]
    Source(#[from] DocumentSourceError),
}

/// Input for the LoadQuestionBank use case
#[derive(Debug, Clone)]
pub struct LoadQuestionBankInput {
    /// Path to the converted HTML document
    pub path: PathBuf,
}

impl LoadQuestionBankInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Use case for turning a document into question blocks
pub struct LoadQuestionBankUseCase {
    source: Arc<dyn DocumentSource>,
    extractor: Arc<dyn BlockExtractor>,
}

impl LoadQuestionBankUseCase {
    pub fn new(source: Arc<dyn DocumentSource>, extractor: Arc<dyn BlockExtractor>) -> Self {
        Self { source, extractor }
    }

    pub async fn execute(
        &self,
        input: LoadQuestionBankInput,
    ) -> Result<QuestionBank, LoadQuestionBankError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        input: LoadQuestionBankInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<QuestionBank, LoadQuestionBankError> {
        progress.on_stage_start(Stage::Load);
        let html = match self.source.load(&input.path).await {
            Ok(html) => html,
            Err(e) => {
                progress.on_stage_complete(Stage::Load, false, &e.to_string());
                return Err(e.into());
            }
        };
        debug!("Loaded {} bytes from {}", html.len(), input.path.display());
        progress.on_stage_complete(Stage::Load, true, &format!("{} bytes", html.len()));

        progress.on_stage_start(Stage::Parse);
        let bank = self.extractor.extract(&html);

        for block in bank.blocks() {
            debug!("Block '{}': {} question(s)", block.name(), block.len());
        }
        for warning in bank.warnings() {
            warn!("{}", warning);
        }
        info!(
            "Parsed {} block(s) with {} question(s) from {}",
            bank.blocks().len(),
            bank.question_count(),
            input.path.display()
        );

        progress.on_stage_complete(
            Stage::Parse,
            !bank.is_empty(),
            &format!("{} block(s)", bank.blocks().len()),
        );

        Ok(bank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bilet_domain::{Block, Question};
    use std::path::Path;
    use std::sync::Mutex;

    struct StubSource {
        result: Result<&'static str, ()>,
    }

    #[async_trait]
    impl DocumentSource for StubSource {
        async fn load(&self, path: &Path) -> Result<String, DocumentSourceError> {
            match self.result {
                Ok(html) => Ok(html.to_string()),
                Err(()) => Err(DocumentSourceError::NotFound(path.display().to_string())),
            }
        }
    }

    /// Records the HTML it was given and returns one block per `<p>`
    struct StubExtractor {
        seen: Mutex<Vec<String>>,
    }

    impl BlockExtractor for StubExtractor {
        fn extract(&self, html: &str) -> QuestionBank {
            self.seen.lock().unwrap().push(html.to_string());
            let blocks = html
                .matches("<p>")
                .enumerate()
                .map(|(i, _)| {
                    Block::with_questions(
                        format!("I BLOK {i}"),
                        vec![Question::text_only("q").unwrap()],
                    )
                })
                .collect();
            QuestionBank::new(blocks)
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<(Stage, Option<bool>)>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_stage_start(&self, stage: Stage) {
            self.events.lock().unwrap().push((stage, None));
        }

        fn on_stage_complete(&self, stage: Stage, success: bool, _detail: &str) {
            self.events.lock().unwrap().push((stage, Some(success)));
        }
    }

    fn use_case(result: Result<&'static str, ()>) -> (LoadQuestionBankUseCase, Arc<StubExtractor>) {
        let extractor = Arc::new(StubExtractor {
            seen: Mutex::new(Vec::new()),
        });
        let use_case = LoadQuestionBankUseCase::new(
            Arc::new(StubSource { result }),
            extractor.clone(),
        );
        (use_case, extractor)
    }

    #[tokio::test]
    async fn test_loads_and_extracts() {
        let (use_case, extractor) = use_case(Ok("<p></p><p></p>"));
        let bank = use_case
            .execute(LoadQuestionBankInput::new("exam.html"))
            .await
            .unwrap();

        assert_eq!(bank.blocks().len(), 2);
        assert_eq!(extractor.seen.lock().unwrap().as_slice(), ["<p></p><p></p>"]);
    }

    #[tokio::test]
    async fn test_empty_document_is_not_an_error() {
        let (use_case, _) = use_case(Ok("<div></div>"));
        let progress = RecordingProgress::default();

        let bank = use_case
            .execute_with_progress(LoadQuestionBankInput::new("empty.html"), &progress)
            .await
            .unwrap();

        assert!(bank.is_empty());
        let events = progress.events.lock().unwrap();
        assert_eq!(events.last(), Some(&(Stage::Parse, Some(false))));
    }

    #[tokio::test]
    async fn test_source_failure_skips_parsing() {
        let (use_case, extractor) = use_case(Err(()));
        let progress = RecordingProgress::default();

        let err = use_case
            .execute_with_progress(LoadQuestionBankInput::new("missing.html"), &progress)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            LoadQuestionBankError::Source(DocumentSourceError::NotFound(_))
        ));
        assert!(extractor.seen.lock().unwrap().is_empty());
        assert_eq!(
            progress.events.lock().unwrap().as_slice(),
            [(Stage::Load, None), (Stage::Load, Some(false))]
        );
    }
}
