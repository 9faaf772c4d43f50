//! Literal, case-insensitive note search.
//!
//! User input is escaped before it becomes a pattern, so `a.b*` only ever
//! matches the five characters `a.b*`. The escaped pattern is also what the
//! Postgres store hands to `~*`, which keeps both backends in agreement.

use regex::{Regex, RegexBuilder};

use crate::types::Note;

/// Characters that carry meaning in a regular expression.
const METACHARACTERS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Escape every regex metacharacter in `input` with a backslash.
pub fn escape_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len() * 2);
    for c in input.chars() {
        if METACHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Errors building a search query.
#[derive(Debug, thiserror::Error)]
pub enum SearchQueryError {
    /// The query text was empty.
    #[error("query is required")]
    Empty,

    /// The escaped pattern failed to compile.
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// A compiled literal search over note titles, contents and tags.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    raw: String,
    pattern: String,
    regex: Regex,
}

impl SearchQuery {
    /// Build a query from raw user input.
    pub fn new(raw: impl Into<String>) -> Result<Self, SearchQueryError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(SearchQueryError::Empty);
        }

        let pattern = escape_pattern(&raw);
        let regex = RegexBuilder::new(&pattern).case_insensitive(true).build()?;

        Ok(Self {
            raw,
            pattern,
            regex,
        })
    }

    /// The text as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The escaped pattern, suitable for a case-insensitive regex operator.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether `text` contains the query literally, ignoring case.
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Whether the note's title, content or any tag contains the query.
    pub fn matches_note(&self, note: &Note) -> bool {
        self.matches(&note.title)
            || self.matches(&note.content)
            || note.tags.iter().any(|tag| self.matches(tag))
    }
}
