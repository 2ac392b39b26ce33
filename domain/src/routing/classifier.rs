//! Keyword intent classifier.
//!
//! Classification lower-cases the input and walks an ordered rule list; the
//! first rule with any keyword contained in the text wins, regardless of
//! what later rules would also match. No rule matching means the variant's
//! fallback route. Classification never fails.

use super::route::{AiTask, Route};
use super::variant::Variant;

/// Arithmetic operators and words
pub const CALCULATOR_KEYWORDS: &[&str] =
    &["+", "-", "*", "/", "calculate", "sum", "add", "multiply"];

/// Interrogative prefixes answered by a fact table or the remote model
pub const QUESTION_KEYWORDS: &[&str] = &["who is", "what is", "where is"];

/// Task-management words
pub const MANAGER_KEYWORDS: &[&str] = &["todo", "task", "remind"];

const TRANSLATE_KEYWORDS: &[&str] = &["translate"];
const SUMMARY_KEYWORDS: &[&str] = &["summarize", "summary"];
const SENTIMENT_KEYWORDS: &[&str] = &["sentiment", "feel"];
const AI_QUESTION_KEYWORDS: &[&str] = &["who is", "what is", "where is", "question"];

/// One row of a keyword table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub route: Route,
    /// Edge label used when drawing the decision graph
    pub label: &'static str,
}

impl KeywordRule {
    pub const fn new(
        keywords: &'static [&'static str],
        route: Route,
        label: &'static str,
    ) -> Self {
        Self {
            keywords,
            route,
            label,
        }
    }

    /// `lowered` must already be lower-case.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Ordered keyword rules plus a fallback route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    rules: Vec<KeywordRule>,
    fallback: Route,
}

impl KeywordTable {
    pub fn new(rules: Vec<KeywordRule>, fallback: Route) -> Self {
        Self { rules, fallback }
    }

    /// Fixed table for a variant.
    ///
    /// Where the to-do manager exists it is checked before the calculator:
    /// "todo add ..." contains the arithmetic keyword "add".
    pub fn for_variant(variant: Variant) -> Self {
        let calculator =
            KeywordRule::new(CALCULATOR_KEYWORDS, Route::Calculator, "if math keywords");
        let manager = KeywordRule::new(MANAGER_KEYWORDS, Route::Manager, "if todo/task/remind");

        let rules = match variant {
            Variant::Basic => vec![
                calculator,
                KeywordRule::new(QUESTION_KEYWORDS, Route::FactLookup, "if who/what/where"),
            ],
            Variant::Chatbot => vec![
                calculator,
                KeywordRule::new(QUESTION_KEYWORDS, Route::Qa, "if who/what/where"),
            ],
            Variant::Organizer => vec![
                manager,
                calculator,
                KeywordRule::new(QUESTION_KEYWORDS, Route::FactLookup, "if who/what/where"),
            ],
            Variant::Tiered => vec![manager, calculator],
        };

        Self::new(rules, variant.fallback())
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn fallback(&self) -> Route {
        self.fallback
    }

    /// Pick the route for `text`.
    pub fn classify(&self, text: &str) -> Route {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.route)
            .unwrap_or(self.fallback)
    }
}

/// Second-tier decision used by the `tiered` variant once `decide` chose
/// [`Route::Ai`]. Falls back to [`AiTask::Conversation`].
pub fn classify_ai_task(text: &str) -> AiTask {
    let lowered = text.to_lowercase();
    let rules: [(&[&str], AiTask); 4] = [
        (TRANSLATE_KEYWORDS, AiTask::Translate),
        (SUMMARY_KEYWORDS, AiTask::Summary),
        (SENTIMENT_KEYWORDS, AiTask::Sentiment),
        (AI_QUESTION_KEYWORDS, AiTask::Qa),
    ];

    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, task)| *task)
        .unwrap_or(AiTask::Conversation)
}

/// Edge label for the AI sub-router, used when drawing the decision graph
pub fn ai_task_label(task: AiTask) -> &'static str {
    match task {
        AiTask::Translate => "if translate",
        AiTask::Summary => "if summarize/summary",
        AiTask::Sentiment => "if sentiment/feel",
        AiTask::Qa => "if who/what/where/question",
        AiTask::Conversation => "otherwise",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic() -> KeywordTable {
        KeywordTable::for_variant(Variant::Basic)
    }

    #[test]
    fn test_arithmetic_goes_to_calculator() {
        let table = basic();
        assert_eq!(table.classify("calculate 25*4"), Route::Calculator);
        assert_eq!(table.classify("3 + 4"), Route::Calculator);
        assert_eq!(table.classify("MULTIPLY these"), Route::Calculator);
    }

    #[test]
    fn test_question_goes_to_fact_lookup() {
        assert_eq!(basic().classify("Who is Elon Musk"), Route::FactLookup);
        assert_eq!(basic().classify("where is the eiffel tower"), Route::FactLookup);
    }

    #[test]
    fn test_otherwise_echo() {
        assert_eq!(basic().classify("good morning"), Route::EchoReply);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Calculator is checked before the question rule.
        assert_eq!(basic().classify("what is 2+2"), Route::Calculator);
    }

    #[test]
    fn test_chatbot_routes_questions_to_qa() {
        let table = KeywordTable::for_variant(Variant::Chatbot);
        assert_eq!(table.classify("What is Rust?"), Route::Qa);
        assert_eq!(table.classify("hello there"), Route::EchoReply);
    }

    #[test]
    fn test_manager_precedes_calculator() {
        let table = KeywordTable::for_variant(Variant::Organizer);
        assert_eq!(table.classify("todo add buy milk"), Route::Manager);
        assert_eq!(table.classify("Remind me later"), Route::Manager);
        assert_eq!(table.classify("add 2 and 3"), Route::Calculator);
    }

    #[test]
    fn test_tiered_falls_back_to_ai() {
        let table = KeywordTable::for_variant(Variant::Tiered);
        assert_eq!(table.classify("please translate bonjour"), Route::Ai);
        assert_eq!(table.classify("todo show"), Route::Manager);
        assert_eq!(table.classify("4 * 5"), Route::Calculator);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let table = KeywordTable::for_variant(Variant::Organizer);
        for text in ["todo show", "calculate 1+1", "who is elon musk", "hey"] {
            assert_eq!(table.classify(text), table.classify(text));
        }
    }

    #[test]
    fn test_ai_sub_router() {
        assert_eq!(classify_ai_task("Translate hola mundo"), AiTask::Translate);
        assert_eq!(classify_ai_task("summarize this article"), AiTask::Summary);
        assert_eq!(classify_ai_task("how do you feel about it"), AiTask::Sentiment);
        assert_eq!(classify_ai_task("I have a question"), AiTask::Qa);
        assert_eq!(classify_ai_task("tell me a story"), AiTask::Conversation);
    }

    #[test]
    fn test_ai_sub_router_priority() {
        assert_eq!(
            classify_ai_task("what is the sentiment of this review"),
            AiTask::Sentiment
        );
    }

    #[test]
    fn test_every_variant_table_ends_in_its_fallback() {
        for variant in Variant::ALL {
            let table = KeywordTable::for_variant(variant);
            assert_eq!(table.fallback(), variant.fallback());
            assert_eq!(table.rules().len() + 1, variant.routes().len());
        }
    }
}
