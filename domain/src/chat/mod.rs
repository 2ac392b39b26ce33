//! Chat-completion request vocabulary shared by the gateway port and its
//! adapters.

pub mod message;
pub mod model;
pub mod request;

pub use message::{Message, Role};
pub use model::Model;
pub use request::ChatRequest;
