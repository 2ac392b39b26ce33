//! To-do manager handler

use crate::session::TodoList;
use crate::util::{contains_keyword, strip_keyword};

/// Shown by `show`/`list` when nothing has been added yet
pub const TODO_EMPTY: &str = "📭 Your to-do list is empty.";
/// Shown when neither `add` nor `show`/`list` is present
pub const TODO_USAGE: &str = "💡 Use 'todo add <task>' or 'todo show'.";

/// Sub-command carried by a to-do query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoCommand {
    Add(String),
    Show,
    Usage,
}

impl TodoCommand {
    /// Strip the first "todo", then look for "add" before "show"/"list".
    pub fn parse(text: &str) -> Self {
        let rest = strip_keyword(text, "todo", 1);
        if contains_keyword(&rest, "add") {
            let task = strip_keyword(&rest, "add", 1).trim().to_string();
            if task.is_empty() {
                TodoCommand::Usage
            } else {
                TodoCommand::Add(task)
            }
        } else if contains_keyword(&rest, "show") || contains_keyword(&rest, "list") {
            TodoCommand::Show
        } else {
            TodoCommand::Usage
        }
    }
}

/// Apply a to-do query to the session's list and describe the outcome.
pub fn manage_todo(text: &str, todos: &mut TodoList) -> String {
    match TodoCommand::parse(text) {
        TodoCommand::Add(task) => {
            let reply = format!("✅ Added task: {}", task);
            todos.push(task);
            reply
        }
        TodoCommand::Show if todos.is_empty() => TODO_EMPTY.to_string(),
        TodoCommand::Show => format!("📝 Your tasks:\n{}", todos.render_bullets()),
        TodoCommand::Usage => TODO_USAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_show() {
        let mut todos = TodoList::new();
        assert_eq!(manage_todo("todo add buy milk", &mut todos), "✅ Added task: buy milk");
        let shown = manage_todo("todo show", &mut todos);
        assert!(shown.contains("buy milk"));
        assert_eq!(shown, "📝 Your tasks:\n- buy milk");
    }

    #[test]
    fn test_show_empty() {
        let mut todos = TodoList::new();
        assert_eq!(manage_todo("todo show", &mut todos), TODO_EMPTY);
        assert_eq!(manage_todo("todo list", &mut todos), TODO_EMPTY);
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut todos = TodoList::new();
        manage_todo("todo add first", &mut todos);
        manage_todo("TODO ADD second", &mut todos);
        assert_eq!(
            manage_todo("todo list", &mut todos),
            "📝 Your tasks:\n- first\n- second"
        );
    }

    #[test]
    fn test_usage_hint() {
        let mut todos = TodoList::new();
        assert_eq!(manage_todo("todo", &mut todos), TODO_USAGE);
        assert_eq!(manage_todo("remind me", &mut todos), TODO_USAGE);
    }

    #[test]
    fn test_add_without_task_does_not_mutate() {
        let mut todos = TodoList::new();
        assert_eq!(manage_todo("todo add   ", &mut todos), TODO_USAGE);
        assert!(todos.is_empty());
    }

    #[test]
    fn test_only_first_add_is_stripped() {
        assert_eq!(
            TodoCommand::parse("todo add add-ons"),
            TodoCommand::Add("add-ons".to_string())
        );
    }
}
