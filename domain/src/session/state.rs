//! Session state entity

use super::history::History;
use crate::routing::WorkflowTrace;
use serde::{Deserialize, Serialize};

/// Ordered to-do tasks for one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    tasks: Vec<String>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, task: impl Into<String>) {
        self.tasks.push(task.into());
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Newline-joined `- task` lines
    pub fn render_bullets(&self) -> String {
        self.tasks
            .iter()
            .map(|t| format!("- {}", t))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Everything one user session accumulates (Entity)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub todos: TodoList,
    history: History,
    last_trace: Option<WorkflowTrace>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished run's result to the history and remember its path.
    pub fn record(&mut self, result: &str, trace: WorkflowTrace) -> usize {
        self.last_trace = Some(trace);
        self.history.append(result)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Path of the most recent run, for highlighting the decision graph
    pub fn last_trace(&self) -> Option<&WorkflowTrace> {
        self.last_trace.as_ref()
    }

    /// Drop history and to-dos, as a process restart would.
    pub fn reset(&mut self) {
        self.history.clear();
        self.todos = TodoList::new();
        self.last_trace = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_and_remembers_trace() {
        let mut state = SessionState::new();
        let mut trace = WorkflowTrace::new();
        trace.visit("echo_reply");

        assert_eq!(state.record("first", trace), 1);
        assert_eq!(state.record("second", WorkflowTrace::new()), 2);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.last_trace(), Some(&WorkflowTrace::new()));
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = SessionState::new();
        let b = SessionState::new();
        a.todos.push("buy milk");
        a.record("x", WorkflowTrace::new());
        assert!(b.todos.is_empty());
        assert!(b.history().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut state = SessionState::new();
        state.todos.push("task");
        state.record("x", WorkflowTrace::new());
        state.reset();
        assert!(state.todos.is_empty());
        assert!(state.history().is_empty());
        assert!(state.last_trace().is_none());
    }

    #[test]
    fn test_render_bullets() {
        let mut todos = TodoList::new();
        todos.push("a");
        todos.push("b");
        assert_eq!(todos.render_bullets(), "- a\n- b");
    }
}
