//! Tokenization for the word cloud.
//!
//! Mirrors what the dashboard needs and nothing more: split tweet bodies,
//! drop link/mention/retweet noise and stopwords, count what is left.

use crate::domain::model::WordFrequencies;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z][a-zA-Z']*").unwrap());

pub struct Tokenizer {
    stopwords: HashSet<String>,
    min_length: usize,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            stopwords: Self::default_stopwords(),
            min_length: 2,
        }
    }

    /// Common English stopwords plus the contraction fragments left behind
    /// by the word pattern.
    fn default_stopwords() -> HashSet<String> {
        let words = vec![
            "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
            "by", "from", "as", "is", "was", "are", "were", "been", "be", "am", "have", "has",
            "had", "do", "does", "did", "will", "would", "could", "should", "may", "might",
            "must", "can", "it", "its", "it's", "this", "that", "these", "those", "i", "i'm",
            "i've", "i'll", "you", "your", "you're", "he", "she", "we", "we're", "they", "them",
            "my", "our", "me", "us", "what", "which", "who", "when", "where", "why", "how",
            "all", "each", "both", "more", "most", "other", "some", "such", "no", "nor", "not",
            "only", "own", "same", "so", "than", "too", "very", "just", "also", "now", "then",
            "there", "here", "if", "because", "about", "into", "out", "up", "down", "again",
            "don't", "doesn't", "didn't", "can't", "won't", "isn't", "aren't", "wasn't", "get",
            "got", "u", "ur", "via", "amp",
        ];
        words.into_iter().map(String::from).collect()
    }

    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Tokenize one tweet body. Whitespace tokens containing `http`,
    /// starting with `@`, or equal to `RT` are dropped before any word
    /// extraction, exactly like the original feed into the cloud.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for raw in text.split_whitespace() {
            if raw.contains("http") || raw.starts_with('@') || raw == "RT" {
                continue;
            }

            for mat in WORD_PATTERN.find_iter(raw) {
                let token = mat.as_str().to_lowercase();

                if token.len() < self.min_length {
                    continue;
                }
                if self.stopwords.contains(&token) {
                    continue;
                }

                tokens.push(token);
            }
        }

        tokens
    }

    /// Count tokens across a corpus and keep the `top` most frequent.
    /// Ties break alphabetically so the cloud is stable between redraws.
    pub fn frequencies<'a>(
        &self,
        texts: impl Iterator<Item = &'a str>,
        top: usize,
    ) -> WordFrequencies {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for text in texts {
            for token in self.tokenize(text) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }

        let mut rows: Vec<(String, u64)> = counts.into_iter().collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        rows.truncate(top);

        WordFrequencies { rows }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_links_mentions_and_retweet_markers() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("RT @united thanks http://t.co/x delayed flight");

        assert_eq!(tokens, vec!["thanks", "delayed", "flight"]);
    }

    #[test]
    fn drops_stopwords_and_short_tokens() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("I am SO happy with the crew, a 5 star trip");

        assert!(tokens.contains(&"happy".to_string()));
        assert!(tokens.contains(&"crew".to_string()));
        assert!(!tokens.contains(&"so".to_string()));
        assert!(!tokens.contains(&"am".to_string()));
        assert!(!tokens.iter().any(|t| t.len() < 2));
    }

    #[test]
    fn frequencies_are_descending_with_alphabetic_ties() {
        let tokenizer = Tokenizer::new();
        let texts = ["delayed delayed bags", "bags crew delayed", "crew"];
        let freq = tokenizer.frequencies(texts.iter().copied(), 10);

        assert_eq!(
            freq.rows,
            vec![
                ("delayed".to_string(), 3),
                ("bags".to_string(), 2),
                ("crew".to_string(), 2),
            ]
        );
    }

    #[test]
    fn custom_stopwords_apply() {
        let mut tokenizer = Tokenizer::new();
        tokenizer.add_stopwords(&["flight"]);
        let tokens = tokenizer.tokenize("flight Cancelled Flightled again");

        assert!(!tokens.contains(&"flight".to_string()));
        assert!(tokens.contains(&"cancelled".to_string()));
    }
}
