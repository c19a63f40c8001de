use std::sync::OnceLock;

use regex::Regex;

static SENTENCE_BREAK: OnceLock<Regex> = OnceLock::new();

fn sentence_break() -> &'static Regex {
    SENTENCE_BREAK.get_or_init(|| Regex::new(r"[.!?]\s+").expect("Invalid sentence pattern"))
}

/// Extractive summarizer that keeps the leading sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct Summarizer;

impl Summarizer {
    pub fn new() -> Self {
        Self
    }

    /// First `max_sentences` sentences joined by single spaces
    pub fn summarize(&self, text: &str, max_sentences: usize) -> String {
        split_sentences(text)
            .into_iter()
            .take(max_sentences)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Split on `.`, `!` or `?` followed by whitespace, keeping the punctuation
pub fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in sentence_break().find_iter(text) {
        // punctuation is one ASCII byte
        let end = m.start() + 1;
        sentences.push(text[start..end].trim());
        start = m.end();
    }
    sentences.push(text[start..].trim());

    sentences.retain(|s| !s.is_empty());
    sentences
}
