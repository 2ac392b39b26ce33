//! Console output formatter for workflow outcomes and session state

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use route_application::WorkflowOutcome;
use route_domain::{History, OutputFormat, TodoList, Variant};

/// Formats workflow outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format according to `format`
    pub fn format(outcome: &WorkflowOutcome, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format_text(outcome),
            OutputFormat::Detailed => Self::format_detailed(outcome),
            OutputFormat::Json => Self::format_json(outcome),
        }
    }

    /// The result string, unchanged
    pub fn format_text(outcome: &WorkflowOutcome) -> String {
        outcome.result.clone()
    }

    pub fn format_detailed(outcome: &WorkflowOutcome) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            format!("#{}", outcome.ordinal).dimmed(),
            outcome.result
        ));
        output.push_str(&format!(
            "{} {}  {} {}\n",
            "route:".cyan(),
            outcome.route,
            "handler:".cyan(),
            outcome.handler
        ));
        output.push_str(&format!("{} {}", "path:".cyan(), outcome.trace));
        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &WorkflowOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Numbered history, oldest first
    pub fn format_history(history: &History) -> String {
        if history.is_empty() {
            return "(no results yet)".dimmed().to_string();
        }
        history
            .entries()
            .iter()
            .map(|entry| {
                format!(
                    "{} {}",
                    format!("{:>3}.", entry.ordinal).dimmed(),
                    Self::indent_continuation(&entry.result, "     ")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn format_todos(todos: &TodoList) -> String {
        if todos.is_empty() {
            return "(no tasks)".dimmed().to_string();
        }
        todos.render_bullets()
    }

    pub fn welcome(variant: Variant, provider: &str) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&"╭─────────────────────────────────────────────╮\n".cyan().to_string());
        output.push_str(&"│          route-assist - Chat Mode           │\n".cyan().to_string());
        output.push_str(&"╰─────────────────────────────────────────────╯\n".cyan().to_string());
        output.push('\n');
        output.push_str(&format!(
            "{} {} ({})\n",
            "Variant:".bold(),
            variant,
            variant.description()
        ));
        if variant.uses_remote_model() {
            output.push_str(&format!("{} {}\n", "Chat gateway:".bold(), provider));
        }
        output.push_str(&format!("\n{}\n", Self::help()));
        output
    }

    pub fn help() -> String {
        [
            "Commands:",
            "  /help, /h, /?       - Show this help",
            "  /history            - Show every result of this session",
            "  /todos              - Show the to-do list",
            "  /graph              - Print the decision graph (DOT), last path highlighted",
            "  /variant [name]     - Show or switch the variant",
            "  /clear              - Forget history and to-dos",
            "  /quit, /exit, /q    - Exit chat",
        ]
        .join("\n")
    }

    /// Indent every line after the first
    fn indent_continuation(text: &str, prefix: &str) -> String {
        text.lines()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    line.to_string()
                } else {
                    format!("{}{}", prefix, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_text(&self, outcome: &WorkflowOutcome) -> String {
        Self::format_text(outcome)
    }

    fn format_detailed(&self, outcome: &WorkflowOutcome) -> String {
        Self::format_detailed(outcome)
    }

    fn format_json(&self, outcome: &WorkflowOutcome) -> String {
        Self::format_json(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_domain::{HandlerKind, Route, WorkflowTrace};

    fn outcome() -> WorkflowOutcome {
        let mut trace = WorkflowTrace::new();
        trace.visit("calculator");
        WorkflowOutcome {
            route: Route::Calculator,
            handler: HandlerKind::Calculator,
            result: "🧮 Result: 100".to_string(),
            trace,
            ordinal: 3,
        }
    }

    #[test]
    fn test_text_is_result_only() {
        assert_eq!(
            ConsoleFormatter::format(&outcome(), OutputFormat::Text),
            "🧮 Result: 100"
        );
    }

    #[test]
    fn test_detailed_mentions_route_and_path() {
        let text = ConsoleFormatter::format(&outcome(), OutputFormat::Detailed);
        assert!(text.contains("🧮 Result: 100"));
        assert!(text.contains("calculator"));
        assert!(text.contains("decide -> calculator"));
    }

    #[test]
    fn test_json_round_trips_fields() {
        let json = ConsoleFormatter::format(&outcome(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["route"], "calculator");
        assert_eq!(value["ordinal"], 3);
        assert_eq!(value["handler"]["kind"], "calculator");
        assert_eq!(value["trace"]["nodes"][1], "calculator");
    }

    #[test]
    fn test_history_lists_every_entry() {
        let mut history = History::new();
        history.append("one");
        history.append("two\nlines");
        let text = ConsoleFormatter::format_history(&history);
        assert!(text.contains("1."));
        assert!(text.contains("two\n     lines"));
    }

    #[test]
    fn test_todos() {
        let mut todos = TodoList::new();
        todos.push("buy milk");
        assert_eq!(ConsoleFormatter::format_todos(&todos), "- buy milk");
    }
}
