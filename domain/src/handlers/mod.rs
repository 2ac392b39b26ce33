//! Local handlers: each turns query text into a result string.
//!
//! None of them fail. Errors are folded into fixed, user-visible messages.
//! Remote-model handlers live in the application layer because they need
//! the chat-completion gateway.

pub mod calculator;
pub mod echo;
pub mod expression;
pub mod facts;
pub mod todo;

pub use calculator::{CALCULATION_FAILED, calculate};
pub use echo::echo_reply;
pub use expression::{EvalError, evaluate};
pub use facts::{FACT_NOT_FOUND, known_questions, lookup_fact};
pub use todo::{TODO_EMPTY, TODO_USAGE, TodoCommand, manage_todo};
