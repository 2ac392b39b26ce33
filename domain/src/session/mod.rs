//! Per-session state: result history and the to-do list.
//!
//! Both are owned by a [`SessionState`] value that the caller passes into
//! every run, so two sessions never observe each other's data.

pub mod history;
pub mod state;

pub use history::{History, HistoryEntry};
pub use state::{SessionState, TodoList};
