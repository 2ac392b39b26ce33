//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use route_application::RunWorkflowUseCase;
use route_application::ports::progress::NoProgress;
use route_domain::{FlowGraph, Query, SessionState, Variant};
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// Shown when the user submits only whitespace
pub const EMPTY_INPUT: &str = "Please enter something.";

/// What a slash command asks the loop to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue(String),
    Quit,
}

/// Interactive chat REPL. Owns the state of one session.
pub struct ChatRepl {
    use_case: RunWorkflowUseCase,
    variant: Variant,
    session: SessionState,
    provider: String,
    repl_config: ReplConfig,
    output: OutputConfig,
}

impl ChatRepl {
    pub fn new(use_case: RunWorkflowUseCase, variant: Variant, provider: impl Into<String>) -> Self {
        Self {
            use_case,
            variant,
            session: SessionState::new(),
            provider: provider.into(),
            repl_config: ReplConfig::default(),
            output: OutputConfig::default(),
        }
    }

    pub fn with_repl_config(mut self, config: ReplConfig) -> Self {
        self.repl_config = config;
        self
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Run the interactive REPL until `/quit` or Ctrl-D
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = Reedline::create();
        if let Some(path) = self.repl_config.history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("Line history disabled ({}): {}", path.display(), e),
            }
        }

        println!("{}", ConsoleFormatter::welcome(self.variant, &self.provider));

        loop {
            let prompt = DefaultPrompt::new(
                DefaultPromptSegment::Basic(self.variant.as_str().to_string()),
                DefaultPromptSegment::Empty,
            );

            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if line.starts_with('/') {
                        match self.handle_command(line) {
                            CommandOutcome::Continue(text) => println!("{}\n", text),
                            CommandOutcome::Quit => {
                                println!("Bye!");
                                break;
                            }
                        }
                        continue;
                    }
                    let reply = self.process_query(line).await;
                    println!("{}\n", reply);
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                #[allow(unreachable_patterns)]
                _ => continue,
            }
        }

        Ok(())
    }

    /// Classify, dispatch and record one query; returns the formatted reply
    pub async fn process_query(&mut self, text: &str) -> String {
        let Ok(query) = Query::try_new(text) else {
            return EMPTY_INPUT.yellow().to_string();
        };

        let outcome = if self.repl_config.show_progress {
            let progress = ProgressReporter::new();
            self.use_case
                .execute_with_progress(self.variant, &query, &mut self.session, &progress)
                .await
        } else {
            self.use_case
                .execute_with_progress(self.variant, &query, &mut self.session, &NoProgress)
                .await
        };

        ConsoleFormatter::format(&outcome, self.output.format)
    }

    /// Handle slash commands
    pub fn handle_command(&mut self, line: &str) -> CommandOutcome {
        let mut parts = line.splitn(2, char::is_whitespace);
        let cmd = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        let text = match cmd {
            "/quit" | "/exit" | "/q" => return CommandOutcome::Quit,
            "/help" | "/h" | "/?" => ConsoleFormatter::help(),
            "/history" => ConsoleFormatter::format_history(self.session.history()),
            "/todos" => ConsoleFormatter::format_todos(&self.session.todos),
            "/graph" => FlowGraph::for_variant(self.variant).to_dot(self.session.last_trace()),
            "/clear" => {
                self.session.reset();
                "History and to-dos cleared.".to_string()
            }
            "/variant" => self.switch_variant(arg),
            _ => format!("Unknown command: {}\nType /help for available commands", cmd),
        };
        CommandOutcome::Continue(text)
    }

    fn switch_variant(&mut self, arg: Option<&str>) -> String {
        let Some(name) = arg else {
            return Variant::ALL
                .iter()
                .map(|v| {
                    let marker = if *v == self.variant { "*" } else { " " };
                    format!("{} {:<10} {}", marker, v.as_str(), v.description())
                })
                .collect::<Vec<_>>()
                .join("\n");
        };

        match name.parse::<Variant>() {
            Ok(variant) => {
                self.variant = variant;
                format!("Switched to {}.", variant)
            }
            Err(e) => e.to_string(),
        }
    }
}
