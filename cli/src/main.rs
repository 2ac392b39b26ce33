//! CLI entrypoint for route-assist
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use colored::Colorize;
use route_application::{
    ChatGateway, ConversationLogger, DocumentService, ExecutionParams, NoConversationLogger,
    NoProgress, RunWorkflowUseCase, WorkflowProgress,
};
use route_domain::{FlowGraph, OutputFormat, Query, SessionState, Variant};
use route_infrastructure::{
    ConfigLoader, FileConfig, InMemoryDocumentRepository, JsonlConversationLogger,
    PlainTextDecoder, RuleBasedEntityExtractor, build_chat_gateway,
};
use route_presentation::chat::EMPTY_INPUT;
use route_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputConfig, ProgressReporter, ReplConfig,
    SimpleProgress,
};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref());

    info!("Starting route-assist");

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load_validated(cli.config.as_ref())?
    };
    if let Some(model) = &cli.model {
        config.chat.model = model.clone();
    }

    let variant = resolve_variant(cli.variant, &config);

    if cli.dot {
        println!("{}", FlowGraph::for_variant(variant).to_dot(None));
        return Ok(());
    }

    let output = OutputConfig {
        format: resolve_format(cli.output.map(OutputFormat::from), &config),
        color: config.output.color,
    };
    if !output.color {
        colored::control::set_override(false);
    }

    let conversation_logger = conversation_logger(&config);

    // === Dependency Injection ===
    if cli.serve {
        let service = DocumentService::new(
            Arc::new(InMemoryDocumentRepository::new()),
            Arc::new(RuleBasedEntityExtractor::new()),
            Arc::new(PlainTextDecoder),
        )
        .with_conversation_logger(conversation_logger);
        let bind = cli.bind.unwrap_or(config.server.bind);
        route_presentation::serve(&bind, Arc::new(service)).await?;
        return Ok(());
    }

    let gateway = build_chat_gateway(&config.chat)?;
    let provider = gateway.provider().to_string();
    let params = ExecutionParams::default()
        .with_model(config.chat.parse_model())
        .with_request_timeout(Duration::from_secs(config.chat.timeout_secs.max(1)));
    info!("Variant {} using {} ({})", variant, provider, params.model);
    let use_case =
        RunWorkflowUseCase::new(gateway, params).with_conversation_logger(conversation_logger);

    // Chat mode
    if cli.chat {
        let repl_config = ReplConfig {
            show_progress: config.repl.show_progress && !cli.quiet,
            history_file: config.repl.history_file.clone(),
        };
        let mut repl = ChatRepl::new(use_case, variant, provider)
            .with_repl_config(repl_config)
            .with_output(output);
        repl.run().await?;
        return Ok(());
    }

    // Single query mode - query is required
    let Some(text) = cli.query else {
        bail!("Query is required. Use --chat for interactive mode or --serve for the document service.");
    };
    let Ok(query) = Query::try_new(text) else {
        println!("{}", EMPTY_INPUT.yellow());
        return Ok(());
    };

    let mut session = SessionState::new();
    let progress: Box<dyn WorkflowProgress> = if cli.quiet || !variant.uses_remote_model() {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };
    let outcome = use_case
        .execute_with_progress(variant, &query, &mut session, progress.as_ref())
        .await;

    println!("{}", ConsoleFormatter::format(&outcome, output.format));

    Ok(())
}

/// Stderr logging by verbosity, or a log file when one is given.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let file_target = log_file.and_then(|path| {
        let name = path.file_name()?;
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        Some((dir.to_path_buf(), name.to_owned()))
    });

    match file_target {
        Some((dir, name)) => {
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

/// `--variant` wins over `router.variant`; an unknown configured name
/// falls back to the default variant.
fn resolve_variant(flag: Option<Variant>, config: &FileConfig) -> Variant {
    flag.or_else(|| config.router.parse_variant())
        .unwrap_or_default()
}

fn resolve_format(flag: Option<OutputFormat>, config: &FileConfig) -> OutputFormat {
    flag.or(config.output.format).unwrap_or_default()
}

fn conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    let Some(path) = config.logging.conversation_log.as_deref() else {
        return Arc::new(NoConversationLogger);
    };
    match JsonlConversationLogger::open(path) {
        Some(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => {
            warn!("Could not open conversation log {}; continuing without it", path);
            Arc::new(NoConversationLogger)
        }
    }
}
