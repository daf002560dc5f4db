//! Pattern-based definition extraction
//!
//! The pattern table and its order are fixed: downstream narratives and
//! tests rely on which candidate comes first.

use crate::text::{contains_term, sentences, truncate_chars};
use crate::types::{DefinitionCandidate, DefinitionPattern};
use once_cell::sync::Lazy;
use ontext_domain::CorpusDocument;
use regex::Regex;
use std::collections::HashSet;
use tracing::warn;

/// Definition patterns, tried in order. `{term}` is replaced by the escaped term.
const PATTERN_TABLE: &[(DefinitionPattern, &str)] = &[
    (DefinitionPattern::DefinedAs, r"(?i){term}\s+is\s+defined\s+as\s+([^.]+)"),
    (DefinitionPattern::Means, r"(?i){term}\s+means\s+([^.]+)"),
    (DefinitionPattern::RefersTo, r"(?i){term}\s+refers\s+to\s+([^.]+)"),
    (DefinitionPattern::Colon, r"(?i){term}:\s*([^.\n]+)"),
    (DefinitionPattern::Define, r"(?i)define\s+{term}\s+as\s+([^.]+)"),
    (DefinitionPattern::Parenthetical, r"(?i){term}\s*\(([^)]+)\)"),
];

/// Cue words marking a sentence as definitional
static CUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(is an?|means|defined|refers to|denotes)\b").unwrap());

/// Finds definition candidates for one term
pub(crate) struct DefinitionMatcher {
    term_lower: String,
    patterns: Vec<(DefinitionPattern, Regex)>,
    max_chars: usize,
}

impl DefinitionMatcher {
    /// Compile the pattern table for `term`
    ///
    /// A pattern that fails to compile is skipped with a warning; the
    /// remaining patterns still run.
    pub(crate) fn new(term: &str, max_chars: usize) -> Self {
        let escaped = regex::escape(term);
        let patterns = PATTERN_TABLE
            .iter()
            .filter_map(|(kind, template)| {
                match Regex::new(&template.replace("{term}", &escaped)) {
                    Ok(re) => Some((*kind, re)),
                    Err(e) => {
                        warn!("Skipping {:?} definition pattern for '{}': {}", kind, term, e);
                        None
                    }
                }
            })
            .collect();

        Self {
            term_lower: term.to_lowercase(),
            patterns,
            max_chars,
        }
    }

    /// All candidates found in one document, in pattern-table order
    ///
    /// When no pattern matches, sentences containing the term and a cue
    /// word are used instead.
    pub(crate) fn candidates(&self, document: &CorpusDocument) -> Vec<DefinitionCandidate> {
        let mut found = Vec::new();

        for (kind, re) in &self.patterns {
            for caps in re.captures_iter(&document.text) {
                if let Some(m) = caps.get(1) {
                    self.push(&mut found, m.as_str(), document, *kind);
                }
            }
        }

        if found.is_empty() {
            for sentence in sentences(&document.text) {
                if contains_term(sentence, &self.term_lower) && CUE_RE.is_match(sentence) {
                    self.push(&mut found, sentence, document, DefinitionPattern::CueSentence);
                }
            }
        }

        found
    }

    fn push(
        &self,
        found: &mut Vec<DefinitionCandidate>,
        text: &str,
        document: &CorpusDocument,
        pattern: DefinitionPattern,
    ) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        let (text, _) = truncate_chars(trimmed, self.max_chars);
        found.push(DefinitionCandidate {
            text,
            source: document.display_name().to_string(),
            pattern,
        });
    }
}

/// Drop candidates whose case-folded leading `prefix_chars` characters were
/// already seen; keeps first occurrences in order
pub(crate) fn dedupe(
    candidates: Vec<DefinitionCandidate>,
    prefix_chars: usize,
) -> Vec<DefinitionCandidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| {
            let (prefix, _) = truncate_chars(&c.text.to_lowercase(), prefix_chars);
            seen.insert(prefix)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> CorpusDocument {
        CorpusDocument::new(text).with_name("doc.txt")
    }

    #[test]
    fn test_defined_as() {
        let matcher = DefinitionMatcher::new("agent", 500);
        let found = matcher.candidates(&doc("An agent is defined as one who acts for another."));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "one who acts for another");
        assert_eq!(found[0].pattern, DefinitionPattern::DefinedAs);
        assert_eq!(found[0].source, "doc.txt");
    }

    #[test]
    fn test_pattern_order() {
        let matcher = DefinitionMatcher::new("agent", 500);
        let found = matcher.candidates(&doc(
            "Agent (from Latin agere) is old. Here agent means a representative.",
        ));
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].pattern, DefinitionPattern::Means);
        assert_eq!(found[0].text, "a representative");
        assert_eq!(found[1].pattern, DefinitionPattern::Parenthetical);
        assert_eq!(found[1].text, "from Latin agere");
    }

    #[test]
    fn test_case_insensitive_and_define() {
        let matcher = DefinitionMatcher::new("Agent", 500);
        let found = matcher.candidates(&doc("We define AGENT as a system that perceives."));
        assert_eq!(found[0].pattern, DefinitionPattern::Define);
        assert_eq!(found[0].text, "a system that perceives");
    }

    #[test]
    fn test_colon_pattern() {
        let matcher = DefinitionMatcher::new("agent", 500);
        let found = matcher.candidates(&doc("agent: a person who acts on behalf of another"));
        assert_eq!(found[0].pattern, DefinitionPattern::Colon);
    }

    #[test]
    fn test_cue_sentence_fallback() {
        let matcher = DefinitionMatcher::new("agent", 500);
        let found = matcher.candidates(&doc(
            "The agent performs tasks. An agent is an autonomous entity that acts.",
        ));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].pattern, DefinitionPattern::CueSentence);
        assert_eq!(found[0].text, "An agent is an autonomous entity that acts");
    }

    #[test]
    fn test_no_candidates() {
        let matcher = DefinitionMatcher::new("agent", 500);
        assert!(matcher.candidates(&doc("The agent performs tasks.")).is_empty());
    }

    #[test]
    fn test_regex_metacharacters_in_term() {
        let matcher = DefinitionMatcher::new("C++", 500);
        let found = matcher.candidates(&doc("C++ means a programming language"));
        assert_eq!(found[0].text, "a programming language");
    }

    #[test]
    fn test_truncation() {
        let matcher = DefinitionMatcher::new("agent", 10);
        let found = matcher.candidates(&doc("agent means something rather long indeed"));
        assert_eq!(found[0].text.chars().count(), 10);
    }

    #[test]
    fn test_dedupe_by_prefix() {
        let make = |text: &str| DefinitionCandidate {
            text: text.to_string(),
            source: "doc".to_string(),
            pattern: DefinitionPattern::Means,
        };
        let deduped = dedupe(
            vec![make("A person who acts"), make("a PERSON who acts for others"), make("A system")],
            8,
        );
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].text, "A person who acts");
        assert_eq!(deduped[1].text, "A system");
    }
}
