//! Static fact lookup

/// Returned when the question is not in the table
pub const FACT_NOT_FOUND: &str = "🤔 Sorry, I don't have that fact.";

const FACTS: &[(&str, &str)] = &[
    (
        "who is elon musk",
        "Elon Musk is the CEO of Tesla and SpaceX.",
    ),
    (
        "what is langgraph",
        "LangGraph is a library for building stateful, multi-step workflows as graphs.",
    ),
    (
        "where is the eiffel tower",
        "The Eiffel Tower is in Paris, France.",
    ),
    (
        "what is rust",
        "Rust is a systems programming language focused on safety, speed and concurrency.",
    ),
];

/// Exact match of the lower-cased, trimmed text against the fact table.
pub fn lookup_fact(text: &str) -> String {
    let key = text.trim().to_lowercase();
    FACTS
        .iter()
        .find(|(question, _)| *question == key)
        .map(|(_, answer)| format!("📚 {}", answer))
        .unwrap_or_else(|| FACT_NOT_FOUND.to_string())
}

/// Questions the table can answer
pub fn known_questions() -> impl Iterator<Item = &'static str> {
    FACTS.iter().map(|(question, _)| *question)
}
