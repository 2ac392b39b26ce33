//! CLI command definitions

use clap::{Parser, ValueEnum};
use route_domain::Variant;
use std::path::PathBuf;

/// Output format for workflow results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Only the result string
    Text,
    /// Result plus route, handler and traversed path
    Detailed,
    /// JSON output
    Json,
}

impl From<OutputFormat> for route_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => route_domain::OutputFormat::Text,
            OutputFormat::Detailed => route_domain::OutputFormat::Detailed,
            OutputFormat::Json => route_domain::OutputFormat::Json,
        }
    }
}

fn parse_variant(s: &str) -> Result<Variant, String> {
    s.parse().map_err(|e: route_domain::DomainError| e.to_string())
}

/// CLI arguments for route-assist
#[derive(Parser, Debug)]
#[command(name = "route-assist")]
#[command(author, version, about = "Keyword-routing assistant with calculator, facts, to-dos and chat-model handlers")]
#[command(long_about = r#"
route-assist classifies each query with a fixed keyword table and hands it
to exactly one handler: calculator, fact lookup, echo, to-do list or a
hosted chat model.

Variants:
  basic       calculator / fact lookup / echo
  chatbot     calculator / remote Q&A / echo (default)
  organizer   to-do / calculator / fact lookup / echo
  tiered      to-do / calculator / AI (qa, conversation, summary, translate, sentiment)

Configuration files are loaded from (in priority order):
1. ROUTE_ASSIST_* environment variables (e.g. ROUTE_ASSIST_CHAT__MODEL)
2. --config <path>         Explicit config file
3. ./route-assist.toml     Project-level config
4. ~/.config/route-assist/config.toml   Global config

Example:
  route-assist "calculate 25 * 4"
  route-assist --variant organizer "todo add buy milk"
  route-assist --chat --variant tiered
  route-assist --serve --bind 0.0.0.0:8000
"#)]
pub struct Cli {
    /// The query to run (not required in chat or serve mode)
    pub query: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long, conflicts_with = "serve")]
    pub chat: bool,

    /// Start the HTTP document service
    #[arg(long)]
    pub serve: bool,

    /// Listen address for --serve (overrides server.bind)
    #[arg(long, value_name = "ADDR", requires = "serve")]
    pub bind: Option<String>,

    /// Assistant variant (overrides router.variant)
    #[arg(long, value_name = "VARIANT", value_parser = parse_variant)]
    pub variant: Option<Variant>,

    /// Chat model id (overrides chat.model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print the variant's decision graph as Graphviz DOT and exit
    #[arg(long)]
    pub dot: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
