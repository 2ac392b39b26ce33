//! Output formatter trait

use route_application::WorkflowOutcome;

/// Trait for formatting workflow outcomes
pub trait OutputFormatter {
    /// Result string only
    fn format_text(&self, outcome: &WorkflowOutcome) -> String;

    /// Result plus route, handler and path
    fn format_detailed(&self, outcome: &WorkflowOutcome) -> String;

    /// Format as JSON
    fn format_json(&self, outcome: &WorkflowOutcome) -> String;
}
