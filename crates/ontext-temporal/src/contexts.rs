//! Usage-context windows and keyword clustering

use crate::text::{contains_term, sentences, ContentWords};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Extracts short word windows around term occurrences
pub(crate) struct ContextWindows {
    term_lower: String,
    term_word_count: usize,
    radius: usize,
}

impl ContextWindows {
    pub(crate) fn new(term: &str, radius: usize) -> Self {
        Self {
            term_lower: term.to_lowercase(),
            term_word_count: term.split_whitespace().count().max(1),
            radius,
        }
    }

    /// One window per term occurrence, in order of appearance
    pub(crate) fn extract(&self, text: &str) -> Vec<String> {
        let mut windows = Vec::new();

        for sentence in sentences(text) {
            if !contains_term(sentence, &self.term_lower) {
                continue;
            }

            let words: Vec<&str> = sentence.split_whitespace().collect();
            let n = self.term_word_count;
            let before = windows.len();
            let mut i = 0;

            while i + n <= words.len() {
                let span = words[i..i + n].join(" ").to_lowercase();
                if span.contains(&self.term_lower) {
                    let start = i.saturating_sub(self.radius);
                    let end = (i + n + self.radius).min(words.len());
                    windows.push(words[start..end].join(" "));
                    i += n;
                } else {
                    i += 1;
                }
            }

            // Term only matched across irregular spacing
            if windows.len() == before {
                windows.push(words.join(" "));
            }
        }

        windows
    }
}

/// Group contexts by their alphabetically first keyword and keep the longest
/// context of each group, in order of first appearance
///
/// Contexts without any keyword form their own group keyed by their
/// lowercased text.
pub(crate) fn cluster_contexts(
    contexts: Vec<String>,
    words: &ContentWords,
    max: usize,
) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut best: HashMap<String, String> = HashMap::new();

    for context in contexts {
        let key = words
            .extract(&context)
            .into_iter()
            .min()
            .unwrap_or_else(|| context.to_lowercase());

        match best.entry(key) {
            Entry::Vacant(slot) => {
                order.push(slot.key().clone());
                slot.insert(context);
            }
            Entry::Occupied(mut slot) => {
                if context.chars().count() > slot.get().chars().count() {
                    slot.insert(context);
                }
            }
        }
    }

    order
        .into_iter()
        .take(max)
        .filter_map(|key| best.remove(&key))
        .collect()
}
