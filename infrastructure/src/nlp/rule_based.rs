//! Rule-based named-entity extractor.
//!
//! Sentences end at `.`, `!` or `?` followed by whitespace (unless the word
//! before the period is a known abbreviation) and at every newline. Inside a
//! sentence:
//!
//! - digit tokens become `CARDINAL`, or `DATE` when they look like a year
//! - month and weekday names, with any trailing day/year numbers, become `DATE`
//! - runs of capitalised words become `ORG` (corporate suffix or acronym),
//!   `GPE` (known place, or preceded by in/at/from/near) or `PERSON`
//!
//! Offsets are character offsets into the whole input.

use regex::Regex;
use route_application::ports::entity_extractor::EntityExtractor;
use route_domain::{AnnotatedSentence, Entity};
use std::sync::LazyLock;

pub const PERSON: &str = "PERSON";
pub const ORG: &str = "ORG";
pub const GPE: &str = "GPE";
pub const DATE: &str = "DATE";
pub const CARDINAL: &str = "CARDINAL";

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’&-][\p{L}\p{N}]+)*").expect("token pattern is valid")
});

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "inc", "corp", "ltd", "co", "vs", "etc",
    "e.g", "i.e", "u.s",
];

const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

/// Capitalised words that never start an entity
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "i", "he", "she", "it", "we", "they", "you", "his", "her", "its", "our",
    "their", "my", "your", "this", "that", "these", "those", "in", "on", "at", "from", "to", "by",
    "for", "with", "and", "or", "but", "if", "when", "while", "after", "before", "since", "as",
    "there", "here", "what", "who", "where", "why", "how", "yesterday", "today", "tomorrow",
    "mr", "mrs", "ms", "dr", "prof", "sir", "dear", "hello", "hi", "yes", "no",
];

/// Lower-case words allowed inside a capitalised run
const CONNECTORS: &[&str] = &["of", "de", "da", "van", "von", "la", "&"];

const ORG_SUFFIXES: &[&str] = &[
    "inc", "corp", "corporation", "ltd", "llc", "co", "company", "university", "institute",
    "foundation", "group", "bank", "agency", "association", "council", "ministry", "department",
    "labs", "technologies", "systems", "school", "college", "party", "committee",
];

const PLACE_PREPOSITIONS: &[&str] = &["in", "at", "from", "near"];

const KNOWN_PLACES: &[&str] = &[
    "paris", "london", "berlin", "tokyo", "beijing", "moscow", "rome", "madrid", "new york",
    "san francisco", "los angeles", "washington", "france", "germany", "japan", "china",
    "india", "italy", "spain", "canada", "mexico", "brazil", "russia", "england",
    "united kingdom", "united states", "europe", "asia", "africa", "america", "texas",
    "california",
];

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    /// Byte range inside the sentence
    byte_start: usize,
    byte_end: usize,
}

impl Token<'_> {
    fn lower(&self) -> String {
        self.text.to_lowercase()
    }

    fn is_number(&self) -> bool {
        self.text.chars().all(|c| c.is_ascii_digit())
    }

    fn is_capitalised(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }

    fn is_acronym(&self) -> bool {
        self.text.chars().count() >= 2 && self.text.chars().all(|c| c.is_uppercase())
    }
}

/// Sentence splitter plus capitalisation and gazetteer rules
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedEntityExtractor;

impl RuleBasedEntityExtractor {
    pub fn new() -> Self {
        Self
    }

    /// `(char_start, text)` of each non-blank sentence, trimmed.
    pub fn split_sentences(text: &str) -> Vec<(usize, String)> {
        let chars: Vec<char> = text.chars().collect();
        let mut sentences = Vec::new();
        let mut start = 0;

        for i in 0..chars.len() {
            let c = chars[i];
            let boundary = match c {
                '\n' => true,
                '!' | '?' => chars.get(i + 1).is_none_or(|n| n.is_whitespace()),
                '.' => {
                    chars.get(i + 1).is_none_or(|n| n.is_whitespace())
                        && !is_abbreviation(&chars[start..i])
                }
                _ => false,
            };
            if boundary {
                let end = if c == '\n' { i } else { i + 1 };
                push_sentence(&chars, start, end, &mut sentences);
                start = i + 1;
            }
        }
        push_sentence(&chars, start, chars.len(), &mut sentences);
        sentences
    }

    fn entities_in(sentence: &str, offset: usize) -> Vec<Entity> {
        let tokens: Vec<Token> = TOKEN
            .find_iter(sentence)
            .map(|m| Token {
                text: m.as_str(),
                byte_start: m.start(),
                byte_end: m.end(),
            })
            .collect();

        let make = |from: usize, to: usize, label: &str| {
            let (b_start, b_end) = (tokens[from].byte_start, tokens[to].byte_end);
            let start_char = offset + sentence[..b_start].chars().count();
            let text = &sentence[b_start..b_end];
            Entity::new(text, label, start_char, start_char + text.chars().count())
        };

        let mut entities = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i];
            let lower = token.lower();

            if MONTHS.contains(&lower.as_str()) || WEEKDAYS.contains(&lower.as_str()) {
                let mut j = i;
                while j + 1 < tokens.len()
                    && tokens[j + 1].is_number()
                    && tokens[j + 1].text.len() <= 4
                    && gap_is(sentence, &tokens[j], &tokens[j + 1], |c| {
                        c.is_whitespace() || c == ','
                    })
                {
                    j += 1;
                }
                entities.push(make(i, j, DATE));
                i = j + 1;
            } else if token.is_number() {
                let label = if looks_like_year(token.text) { DATE } else { CARDINAL };
                entities.push(make(i, i, label));
                i += 1;
            } else if token.is_capitalised() {
                let mut j = i;
                while j + 1 < tokens.len() {
                    let next = &tokens[j + 1];
                    if !gap_is(sentence, &tokens[j], next, char::is_whitespace) {
                        break;
                    }
                    let next_lower = next.lower();
                    let continues = (next.is_capitalised() && !MONTHS.contains(&next_lower.as_str()))
                        || (CONNECTORS.contains(&next_lower.as_str())
                            && tokens.get(j + 2).is_some_and(|t| t.is_capitalised()));
                    if !continues {
                        break;
                    }
                    j += 1;
                }

                let mut first = i;
                while first <= j && STOPWORDS.contains(&tokens[first].lower().as_str()) {
                    first += 1;
                }
                if first <= j {
                    let label = classify_span(&tokens, first, j, &make(first, j, PERSON).text);
                    entities.push(make(first, j, label));
                }
                i = j + 1;
            } else {
                i += 1;
            }
        }
        entities
    }
}

impl EntityExtractor for RuleBasedEntityExtractor {
    fn annotate(&self, text: &str) -> Vec<AnnotatedSentence> {
        Self::split_sentences(text)
            .into_iter()
            .map(|(offset, sentence)| AnnotatedSentence {
                entities: Self::entities_in(&sentence, offset),
                text: sentence,
            })
            .collect()
    }
}

fn push_sentence(chars: &[char], start: usize, end: usize, out: &mut Vec<(usize, String)>) {
    let slice = &chars[start..end];
    let Some(first) = slice.iter().position(|c| !c.is_whitespace()) else {
        return;
    };
    let last = slice.iter().rposition(|c| !c.is_whitespace()).unwrap_or(first);
    out.push((start + first, slice[first..=last].iter().collect()));
}

/// Whether the word right before a period is a known abbreviation
fn is_abbreviation(before: &[char]) -> bool {
    let word: String = before
        .iter()
        .rev()
        .take_while(|c| !c.is_whitespace())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<String>()
        .to_lowercase();
    ABBREVIATIONS.contains(&word.as_str())
        || (word.chars().count() == 1 && word.chars().all(char::is_alphabetic))
}

fn gap_is(sentence: &str, left: &Token, right: &Token, allowed: impl Fn(char) -> bool) -> bool {
    sentence[left.byte_end..right.byte_start].chars().all(allowed)
}

fn looks_like_year(digits: &str) -> bool {
    digits.len() == 4 && digits.parse::<u32>().is_ok_and(|y| (1000..=2100).contains(&y))
}

fn classify_span(tokens: &[Token], first: usize, last: usize, text: &str) -> &'static str {
    let last_lower = tokens[last].lower();
    if ORG_SUFFIXES.contains(&last_lower.as_str()) || (first == last && tokens[first].is_acronym())
    {
        return ORG;
    }
    if KNOWN_PLACES.contains(&text.to_lowercase().as_str()) {
        return GPE;
    }
    let after_preposition = first
        .checked_sub(1)
        .is_some_and(|prev| PLACE_PREPOSITIONS.contains(&tokens[prev].lower().as_str()));
    if after_preposition {
        return GPE;
    }
    PERSON
}
