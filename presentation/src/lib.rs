//! Presentation layer for route-assist
//!
//! This crate contains CLI definitions, output formatters, progress
//! reporters, the interactive chat REPL and the HTTP document service.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod server;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use server::{router, serve};
