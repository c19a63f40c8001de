//! Markdown layout of the generated article.

use crate::tools::TranscriptSegment;

/// Title used when no keyword could be extracted
pub const GENERIC_TITLE: &str = "Blog Article based on YouTube Video";

/// Build the article title from the top keyword
pub fn title_for(keywords: &[String]) -> String {
    match keywords.first() {
        Some(top) => format!("{} – A Blog Based on a YouTube Video", capitalize(top)),
        None => GENERIC_TITLE.to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// `MM:SS`, minutes keep counting past the hour
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// `MM:SS - MM:SS: text`
pub fn timestamp_line(segment: &TranscriptSegment) -> String {
    format!(
        "{} - {}: {}",
        format_timestamp(segment.start),
        format_timestamp(segment.end()),
        segment.text.trim()
    )
}

/// Title, reading time, optional summary and keyword lines
pub fn header_block(title: &str, reading_minutes: f64, summary: &str, keywords: &[String]) -> String {
    let mut lines = vec![
        format!("# {}", title),
        String::new(),
        format!("**Estimated reading time:** {:.1} minutes", reading_minutes),
        String::new(),
    ];
    if !summary.is_empty() {
        lines.push(format!("**Summary:** {}\n", summary));
    }
    if !keywords.is_empty() {
        lines.push(format!("**SEO Keywords:** {}\n", keywords.join(", ")));
    }
    lines.join("\n")
}

/// One `## Section N` block per summary, numbered from 1
pub fn section_blocks(summaries: &[String]) -> String {
    summaries
        .iter()
        .enumerate()
        .map(|(i, summary)| format!("## Section {}\n\n{}\n", i + 1, summary))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Timed transcript listing
pub fn timestamp_block(segments: &[TranscriptSegment]) -> String {
    let lines: Vec<String> = segments.iter().map(timestamp_line).collect();
    format!("## Transcript\n\n{}\n", lines.join("\n"))
}

/// Horizontal rule followed by the attribution text
pub fn attribution_footer(text: &str) -> String {
    format!("\n---\n\n{}\n", text.trim())
}
