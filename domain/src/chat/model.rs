//! Model value object

use serde::{Deserialize, Serialize};

/// Identifier of a hosted chat model, as the provider spells it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model(String);

impl Model {
    /// Router model the hosted endpoint serves by default
    pub const DEFAULT: &'static str = "katanemo/Arch-Router-1.5B:hf-inference";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Model::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model() {
        assert_eq!(Model::default().as_str(), "katanemo/Arch-Router-1.5B:hf-inference");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Model::new("gpt-4o-mini")).unwrap();
        assert_eq!(json, "\"gpt-4o-mini\"");
    }
}
