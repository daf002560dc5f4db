//! Lightweight text utilities shared by the extractors

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]+").unwrap());

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Function words excluded from semantic fields and context keywords
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "although", "am",
        "an", "and", "any", "are", "around", "as", "at", "be", "because", "been", "before",
        "being", "below", "between", "both", "but", "by", "can", "cannot", "could", "did",
        "does", "doing", "done", "down", "during", "each", "either", "even", "ever", "every",
        "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
        "hers", "herself", "him", "himself", "his", "how", "however", "i", "if", "in", "into",
        "is", "it", "its", "itself", "just", "may", "might", "more", "most", "much", "must",
        "my", "myself", "neither", "no", "nor", "not", "now", "of", "off", "on", "once",
        "one", "only", "or", "other", "others", "ought", "our", "ours", "ourselves", "out",
        "over", "own", "same", "shall", "she", "should", "since", "so", "some", "such",
        "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
        "therefore", "these", "they", "this", "those", "though", "through", "thus", "to",
        "too", "under", "until", "up", "upon", "us", "very", "was", "we", "were", "what",
        "whatever", "when", "where", "whereas", "whether", "which", "while", "who", "whom",
        "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your",
        "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// Check if a word is on the stopword list
pub(crate) fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Split text into trimmed, non-empty sentences
pub(crate) fn sentences(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Lowercase alphabetic tokens
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Non-overlapping, case-insensitive substring count
///
/// Counts raw substrings, so "agent" is also counted inside "agentic".
pub(crate) fn count_occurrences(haystack: &str, needle: &str) -> usize {
    let needle = needle.to_lowercase();
    if needle.is_empty() {
        return 0;
    }
    haystack.to_lowercase().matches(needle.as_str()).count()
}

/// Case-insensitive containment test; `term_lower` must already be lowercase
pub(crate) fn contains_term(text: &str, term_lower: &str) -> bool {
    text.to_lowercase().contains(term_lower)
}

/// Truncate to at most `max_chars` characters
///
/// Returns the (possibly) shortened text and whether anything was cut.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => (text[..idx].to_string(), true),
        None => (text.to_string(), false),
    }
}

/// Filters tokens down to content words relevant for one term
pub(crate) struct ContentWords {
    term_tokens: HashSet<String>,
    min_len: usize,
}

impl ContentWords {
    pub(crate) fn new(term: &str, min_len: usize) -> Self {
        Self {
            term_tokens: tokenize(term).into_iter().collect(),
            min_len,
        }
    }

    /// Keep tokens that are long enough, not stopwords and not the term
    pub(crate) fn accepts(&self, token: &str) -> bool {
        token.len() >= self.min_len && !is_stopword(token) && !self.term_tokens.contains(token)
    }

    /// Content words of a text, in order of appearance
    pub(crate) fn extract(&self, text: &str) -> Vec<String> {
        tokenize(text).into_iter().filter(|t| self.accepts(t)).collect()
    }
}
