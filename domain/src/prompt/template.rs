//! Per-task prompt templates and sampling settings

use crate::chat::{ChatRequest, Model};
use crate::routing::AiTask;

/// Prompt prefix and sampling configuration for one remote task
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChatProfile {
    pub task: AiTask,
    /// Instruction placed before the user's text, if any
    pub prefix: Option<&'static str>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ChatProfile {
    /// Build the single-turn prompt for `text`
    pub fn prompt(&self, text: &str) -> String {
        match self.prefix {
            Some(prefix) => format!("{}\n{}", prefix, text),
            None => text.to_string(),
        }
    }

    pub fn request(&self, model: Model, text: &str) -> ChatRequest {
        ChatRequest::single_turn(model, self.prompt(text), self.temperature, self.max_tokens)
    }
}

/// Templates for the remote-model handlers
pub struct PromptTemplate;

impl PromptTemplate {
    pub fn profile(task: AiTask) -> ChatProfile {
        match task {
            AiTask::Qa => ChatProfile {
                task,
                prefix: None,
                temperature: 0.7,
                max_tokens: 300,
            },
            AiTask::Conversation => ChatProfile {
                task,
                prefix: None,
                temperature: 0.9,
                max_tokens: 400,
            },
            AiTask::Summary => ChatProfile {
                task,
                prefix: Some("Summarize this:"),
                temperature: 0.3,
                max_tokens: 300,
            },
            AiTask::Translate => ChatProfile {
                task,
                prefix: Some("Translate this to English:"),
                temperature: 0.3,
                max_tokens: 300,
            },
            AiTask::Sentiment => ChatProfile {
                task,
                prefix: Some(
                    "Analyze the sentiment (positive, negative, or neutral) of this text:",
                ),
                temperature: 0.0,
                max_tokens: 60,
            },
        }
    }

    /// Template wrapping any gateway failure
    pub fn remote_error(message: &str) -> String {
        format!("❌ Chatbot error: {}", message)
    }
}
