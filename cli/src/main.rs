//! CLI entrypoint for bilet
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use bilet_application::{
    GenerateTicketsUseCase, LoadQuestionBankInput, LoadQuestionBankUseCase, NoProgress,
    ProgressNotifier,
};
use bilet_domain::OutputFormat;
use bilet_infrastructure::{
    ConfigLoader, JsonTicketWriter, LocalDocumentSource, ScraperBlockExtractor, shuffle_source,
};
use bilet_presentation::{Cli, ConsoleFormatter, OutputConfig, ProgressReporter};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(&cli)?;

    info!("Starting bilet");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = file_config.validate();
    if !issues.is_empty() {
        eprint!("{}", ConsoleFormatter::format_config_issues(&issues));
    }
    if issues.iter().any(|issue| issue.is_error()) {
        bail!("Configuration has errors; fix them and run again");
    }

    let output = OutputConfig::new(
        file_config.output.format,
        file_config.output.color,
        file_config.output.path.clone(),
    )
    .with_cli(&cli);
    if !output.color {
        colored::control::set_override(false);
    }

    let generation = cli.apply_to(file_config.to_generation_config());

    let Some(input) = cli.input.clone() else {
        bail!("An input document is required. Save the exam as HTML and pass its path.");
    };

    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    // === Dependency Injection ===
    let loader = LoadQuestionBankUseCase::new(
        Arc::new(LocalDocumentSource::new()),
        Arc::new(ScraperBlockExtractor::new()),
    );
    let bank = loader
        .execute_with_progress(LoadQuestionBankInput::new(&input), progress.as_ref())
        .await?;

    if output.format == OutputFormat::Summary {
        print!("{}", ConsoleFormatter::format_summary(&bank));
        eprint!("{}", ConsoleFormatter::format_warnings(bank.warnings()));
        return Ok(());
    }

    if bank.is_empty() {
        eprint!("{}", ConsoleFormatter::format_summary(&bank));
        bail!("Nothing to generate from {}", input.display());
    }
    eprint!("{}", ConsoleFormatter::format_warnings(bank.warnings()));

    let mut generator = GenerateTicketsUseCase::new();
    if let Some(path) = &output.export_path {
        generator = generator.with_writer(Arc::new(JsonTicketWriter::new(path)));
    }

    let mut source = shuffle_source(generation.seed);
    let result = match generator
        .execute_with_progress(&bank, &generation, source.as_mut(), progress.as_ref())
        .await
    {
        Ok(result) => result,
        Err(e) if e.is_retryable_with_fewer_tickets() => bail!(
            "{}\nAt most {} ticket(s) can be generated without repeats; lower --count or drop --strict.",
            e,
            bank.max_unique_tickets()
        ),
        Err(e) => return Err(e.into()),
    };

    let rendered = match output.format {
        OutputFormat::Json => ConsoleFormatter::format_json(&generation.sheet, &result.tickets),
        OutputFormat::Text | OutputFormat::Summary => {
            ConsoleFormatter::format_tickets(&generation.sheet, &result.tickets)
        }
    };
    println!("{}", rendered);

    if let Some(destination) = result.destination {
        eprintln!("Tickets written to {}", destination);
    }

    Ok(())
}

/// Install the tracing subscriber; verbosity picks the level
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .map_err(|e| anyhow!("Cannot open log file {}: {}", path.display(), e))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}
