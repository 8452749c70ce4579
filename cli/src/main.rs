//! CLI entrypoint for Carcino
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use carcino_application::{
    Autocomplete, LookupExecutor, NoProgress, ResolutionPipeline, ResolutionProgress,
};
use carcino_domain::{OutputFormat, Term};
use carcino_infrastructure::{
    ConfigLoader, CorpusLoader, FileConfig, HtmlSanitizer, default_sources,
};
use carcino_presentation::{
    Cli, ConsoleFormatter, DisplayConfig, EMPTY_INPUT_MESSAGE, LookupRepl, SimpleProgress,
    SpinnerProgress,
};
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting Carcino Term Finder");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("Config: {}", issue);
        } else {
            warn!("Config: {}", issue);
        }
    }
    if FileConfig::has_errors(&issues) {
        bail!("Invalid configuration; run with -v for details");
    }

    let display = DisplayConfig {
        format: config
            .output
            .resolve_format(cli.output.map(OutputFormat::from)),
        color: config.output.color,
        show_progress: !cli.quiet,
    };
    display.apply_color();

    let mut lookup_config = config.lookup.to_lookup_config(&config.suggest);
    if let Some(limit) = cli.limit {
        lookup_config = lookup_config.with_suggest_limit(limit);
    }

    // === Dependency Injection ===
    let corpus_path = cli.corpus.as_deref().or(config.corpus.path.as_deref());
    let autocomplete = Autocomplete::from_load(CorpusLoader::load(corpus_path))
        .with_limit(lookup_config.suggest_limit);

    // Suggest mode needs no network
    if let Some(partial) = &cli.suggest {
        let suggestions = autocomplete.suggest(partial);
        let output = match display.format {
            OutputFormat::Text => ConsoleFormatter::format_suggestions(partial, &suggestions),
            OutputFormat::Json => ConsoleFormatter::format_suggestions_json(partial, &suggestions),
        };
        println!("{}", output.trim_end());
        return Ok(());
    }

    let sources = default_sources(
        config.medlineplus.to_client_config(),
        config.wikipedia.to_client_config(),
        &config.lookup.to_http_options(&lookup_config),
    )
    .context("Failed to set up definition sources")?;
    let pipeline = Arc::new(
        ResolutionPipeline::new(Arc::new(HtmlSanitizer::new())).with_sources(sources),
    );
    info!(
        "Source order: {:?}, timeout {:?}",
        pipeline.source_order(),
        lookup_config.timeout
    );

    // Interactive mode
    if cli.interactive {
        let executor = Arc::new(LookupExecutor::new(
            Arc::clone(&pipeline),
            Handle::current(),
            &lookup_config,
        ));
        let repl = LookupRepl::new(executor, autocomplete).with_display(display);
        repl.run().await?;
        return Ok(());
    }

    // Single lookup mode - term is required
    let Some(input) = cli.term else {
        bail!("A term is required. Use --interactive for interactive mode.");
    };
    let term = Term::new(&input);
    if term.is_blank() {
        println!("{}", EMPTY_INPUT_MESSAGE);
        return Ok(());
    }

    let progress: Box<dyn ResolutionProgress> = if !display.wants_spinner() {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(SpinnerProgress::new())
    } else {
        Box::new(SimpleProgress)
    };

    let result = tokio::select! {
        result = pipeline.resolve_with_progress(&term, progress.as_ref()) => result,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Interrupted");
            return Ok(());
        }
    };

    let output = match display.format {
        OutputFormat::Text => ConsoleFormatter::format(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };
    println!("{}", output.trim_end());

    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr unless `log_file` is given, so stdout carries only results.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}
