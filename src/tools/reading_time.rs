use std::sync::OnceLock;

use regex::Regex;

/// Smallest estimate reported for text that has any words
pub const MIN_READING_MINUTES: f64 = 0.1;

static WORD: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD.get_or_init(|| Regex::new(r"\w+").expect("Invalid word pattern"))
}

/// Estimated minutes to read `text` at `words_per_minute`.
///
/// Text without words reads in 0.0 minutes, anything else in at least
/// [`MIN_READING_MINUTES`].
pub fn estimate_reading_time(text: &str, words_per_minute: u32) -> f64 {
    let words = word_pattern().find_iter(text).count();
    if words == 0 {
        return 0.0;
    }
    let wpm = f64::from(words_per_minute.max(1));
    (words as f64 / wpm).max(MIN_READING_MINUTES)
}
