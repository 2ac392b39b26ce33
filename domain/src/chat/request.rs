//! Single-turn chat request

use super::message::Message;
use super::model::Model;
use serde::{Deserialize, Serialize};

/// Everything the gateway needs for one completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: Model,
    pub messages: Vec<Message>,
    /// Sampling temperature in `[0, 1]`
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ChatRequest {
    /// One user message, nothing else.
    ///
    /// `temperature` is clamped into `[0, 1]`.
    pub fn single_turn(
        model: Model,
        prompt: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            model,
            messages: vec![Message::user(prompt)],
            temperature: temperature.clamp(0.0, 1.0),
            max_tokens,
        }
    }

    /// Content of the last user message
    pub fn prompt(&self) -> &str {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == super::message::Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or("")
    }
}
