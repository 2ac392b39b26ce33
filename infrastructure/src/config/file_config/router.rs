//! Router configuration from TOML (`[router]` section)

use route_domain::Variant;
use serde::{Deserialize, Serialize};

/// Raw router configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRouterConfig {
    /// Assistant variant: "basic", "chatbot", "organizer" or "tiered"
    pub variant: String,
}

impl Default for FileRouterConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default().as_str().to_string(),
        }
    }
}

impl FileRouterConfig {
    /// Parsed variant, `None` when the value is unknown
    pub fn parse_variant(&self) -> Option<Variant> {
        self.variant.parse().ok()
    }
}
