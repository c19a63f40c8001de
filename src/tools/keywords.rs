use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

static WORD: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD.get_or_init(|| Regex::new(r"[a-z]{4,}").expect("Invalid word pattern"))
}

/// Words never reported as keywords
pub const STOPWORDS: &[&str] = &[
    "this", "that", "with", "from", "your", "will", "into", "about", "have", "there", "their",
    "which", "such", "also", "been", "they", "them", "then", "than", "when", "where", "what",
    "would", "could", "should", "video", "youtube", "using",
];

/// Frequency-based keyword extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordExtractor;

impl KeywordExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Most frequent words, ties broken by first occurrence
    pub fn extract(&self, text: &str, max_keywords: usize) -> Vec<String> {
        let lowered = text.to_lowercase();
        // word -> (count, first position)
        let mut freq: HashMap<&str, (usize, usize)> = HashMap::new();

        for (pos, m) in word_pattern().find_iter(&lowered).enumerate() {
            let word = m.as_str();
            if STOPWORDS.contains(&word) {
                continue;
            }
            freq.entry(word).or_insert((0, pos)).0 += 1;
        }

        let mut ranked: Vec<(&str, usize, usize)> = freq
            .into_iter()
            .map(|(word, (count, first))| (word, count, first))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        ranked
            .into_iter()
            .take(max_keywords)
            .map(|(word, _, _)| word.to_string())
            .collect()
    }
}
