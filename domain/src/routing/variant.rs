//! Assistant variants

use super::route::Route;
use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Assistant variant (Value Object)
///
/// Every variant runs the same classify-then-dispatch engine; they differ only
/// in their keyword table and the leaves reachable from `decide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// calculator / static fact lookup / echo
    Basic,
    /// calculator / remote Q&A / echo
    #[default]
    Chatbot,
    /// to-do manager / calculator / static fact lookup / echo
    Organizer,
    /// to-do manager / calculator / AI cluster with its own sub-router
    Tiered,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Basic,
        Variant::Chatbot,
        Variant::Organizer,
        Variant::Tiered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Basic => "basic",
            Variant::Chatbot => "chatbot",
            Variant::Organizer => "organizer",
            Variant::Tiered => "tiered",
        }
    }

    /// Leaves reachable from the first decision node, in priority order
    /// with the fallback last.
    pub fn routes(&self) -> &'static [Route] {
        match self {
            Variant::Basic => &[Route::Calculator, Route::FactLookup, Route::EchoReply],
            Variant::Chatbot => &[Route::Calculator, Route::Qa, Route::EchoReply],
            Variant::Organizer => &[
                Route::Manager,
                Route::Calculator,
                Route::FactLookup,
                Route::EchoReply,
            ],
            Variant::Tiered => &[Route::Manager, Route::Calculator, Route::Ai],
        }
    }

    /// Route taken when no keyword rule matches
    pub fn fallback(&self) -> Route {
        match self {
            Variant::Basic | Variant::Chatbot | Variant::Organizer => Route::EchoReply,
            Variant::Tiered => Route::Ai,
        }
    }

    /// Whether any route of this variant needs the chat-completion gateway
    pub fn uses_remote_model(&self) -> bool {
        self.routes().iter().any(Route::is_remote)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Variant::Basic => "Calculator, static facts and echo",
            Variant::Chatbot => "Calculator, hosted-model Q&A and echo",
            Variant::Organizer => "To-do list, calculator, static facts and echo",
            Variant::Tiered => "To-do list, calculator and an AI cluster with its own router",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Variant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" | "static" => Ok(Variant::Basic),
            "chatbot" | "chat" => Ok(Variant::Chatbot),
            "organizer" | "todo" => Ok(Variant::Organizer),
            "tiered" | "ai" => Ok(Variant::Tiered),
            other => Err(DomainError::UnknownVariant(other.to_string())),
        }
    }
}

impl Serialize for Variant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
