//! Generate tickets use case
//!
//! Assembles tickets from a loaded [`QuestionBank`], resolves image
//! placement sizes, and optionally hands the result to a [`TicketWriter`].
//! Randomness is injected so runs can be reproduced.

use crate::config::GenerationConfig;
use crate::ports::progress::{NoProgress, ProgressNotifier, Stage};
use crate::ports::ticket_writer::{TicketWriter, TicketWriterError};
use bilet_domain::{
    AssemblyError, QuestionBank, RenderedTicket, ShuffleSource, assemble_tickets, render_tickets,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during ticket generation
#[derive(Error, Debug)]
pub enum GenerateTicketsError {
    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error(transparent)]
    Write(#[from] TicketWriterError),
}

impl GenerateTicketsError {
    /// Whether retrying with fewer tickets (or without strict mode) could help
    pub fn is_retryable_with_fewer_tickets(&self) -> bool {
        matches!(
            self,
            GenerateTicketsError::Assembly(AssemblyError::InsufficientQuestions { .. })
        )
    }
}

/// Output of one run
#[derive(Debug)]
pub struct GenerateTicketsOutput<'a> {
    pub tickets: Vec<RenderedTicket<'a>>,
    /// Where the writer put the tickets, if a writer was configured
    pub destination: Option<String>,
}

/// Use case for assembling and exporting tickets
pub struct GenerateTicketsUseCase {
    writer: Option<Arc<dyn TicketWriter>>,
}

impl Default for GenerateTicketsUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerateTicketsUseCase {
    /// Create a use case that only assembles and renders
    pub fn new() -> Self {
        Self { writer: None }
    }

    pub fn with_writer(mut self, writer: Arc<dyn TicketWriter>) -> Self {
        self.writer = Some(writer);
        self
    }

    pub async fn execute<'a>(
        &self,
        bank: &'a QuestionBank,
        config: &GenerationConfig,
        source: &mut dyn ShuffleSource,
    ) -> Result<GenerateTicketsOutput<'a>, GenerateTicketsError> {
        self.execute_with_progress(bank, config, source, &NoProgress)
            .await
    }

    /// Run assembly, rendering and (if configured) writing.
    ///
    /// Assembly is all-or-nothing: on a precondition failure nothing is
    /// rendered or written.
    pub async fn execute_with_progress<'a>(
        &self,
        bank: &'a QuestionBank,
        config: &GenerationConfig,
        source: &mut dyn ShuffleSource,
        progress: &dyn ProgressNotifier,
    ) -> Result<GenerateTicketsOutput<'a>, GenerateTicketsError> {
        info!(
            "Assembling {} ticket(s) from {} block(s) ({})",
            config.count,
            bank.blocks().len(),
            config.policy
        );
        progress.on_stage_start(Stage::Assemble);

        let tickets = match assemble_tickets(bank.blocks(), config.count, config.policy, source) {
            Ok(tickets) => tickets,
            Err(e) => {
                progress.on_stage_complete(Stage::Assemble, false, &e.to_string());
                return Err(e.into());
            }
        };
        let rendered = render_tickets(&tickets, &config.layout);
        debug!(
            "Rendered {} ticket(s) with {} image(s)",
            rendered.len(),
            rendered.iter().map(RenderedTicket::image_count).sum::<usize>()
        );
        progress.on_stage_complete(
            Stage::Assemble,
            true,
            &format!("{} ticket(s)", rendered.len()),
        );

        let destination = match &self.writer {
            Some(writer) => {
                progress.on_stage_start(Stage::Write);
                match writer.write(&config.sheet, &rendered).await {
                    Ok(destination) => {
                        info!("Wrote {} ticket(s) to {}", rendered.len(), destination);
                        progress.on_stage_complete(Stage::Write, true, &destination);
                        Some(destination)
                    }
                    Err(e) => {
                        progress.on_stage_complete(Stage::Write, false, &e.to_string());
                        return Err(e.into());
                    }
                }
            }
            None => None,
        };

        Ok(GenerateTicketsOutput {
            tickets: rendered,
            destination,
        })
    }
}
