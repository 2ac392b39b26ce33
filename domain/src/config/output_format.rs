//! Output format value object

use serde::{Deserialize, Serialize};

/// How a workflow result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Only the result string (default)
    #[default]
    Text,
    /// Result, route and traversed path
    Detailed,
    /// JSON output
    Json,
}
