//! Query value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A user query to be routed (Value Object)
///
/// Immutable once created. Blank input is rejected so that every query that
/// reaches the classifier carries some text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    text: String,
}

impl Query {
    /// Try to create a new query, rejecting empty or whitespace-only text
    pub fn try_new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            Err(DomainError::EmptyQuery)
        } else {
            Ok(Self { text })
        }
    }

    /// Get the raw query text, exactly as entered
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower-cased copy used for keyword matching
    pub fn normalized(&self) -> String {
        self.text.to_lowercase()
    }

    /// Consume and return the inner text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl TryFrom<&str> for Query {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Query::try_new(s)
    }
}

impl TryFrom<String> for Query {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Query::try_new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_creation_keeps_text_verbatim() {
        let q = Query::try_new("  Calculate 25*4 ").unwrap();
        assert_eq!(q.text(), "  Calculate 25*4 ");
    }

    #[test]
    fn test_normalized_is_lowercase() {
        let q = Query::try_new("Who Is Elon Musk").unwrap();
        assert_eq!(q.normalized(), "who is elon musk");
    }

    #[test]
    fn test_try_new_empty() {
        assert_eq!(Query::try_new(""), Err(DomainError::EmptyQuery));
        assert_eq!(Query::try_new("   \t"), Err(DomainError::EmptyQuery));
    }

    #[test]
    fn test_try_from_str() {
        let q: Query = "hello".try_into().unwrap();
        assert_eq!(q.to_string(), "hello");
    }
}
