/// Separator placed between paragraphs inside a chunk
pub const PARAGRAPH_SEPARATOR: &str = "\n";

/// Split text into paragraph-aligned chunks of at most `max_chars` characters.
///
/// Each non-blank line is a paragraph. A paragraph is never split, so one
/// longer than `max_chars` becomes its own oversized chunk.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for para in text.lines().map(str::trim).filter(|p| !p.is_empty()) {
        let para_len = para.chars().count();
        if current.is_empty() {
            current.push_str(para);
            current_len = para_len;
        } else if current_len + para_len + 1 <= max_chars {
            current.push_str(PARAGRAPH_SEPARATOR);
            current.push_str(para);
            current_len += para_len + 1;
        } else {
            chunks.push(std::mem::take(&mut current));
            current.push_str(para);
            current_len = para_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Keep the first `max_chunks` chunks, separated by a blank line
pub fn compact_context(chunks: &[String], max_chunks: usize) -> String {
    chunks
        .iter()
        .take(max_chunks)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n")
}
