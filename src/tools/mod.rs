mod chunker;
mod keywords;
mod reading_time;
mod summarizer;
mod transcript;

pub use chunker::{chunk_text, compact_context, PARAGRAPH_SEPARATOR};
pub use keywords::{KeywordExtractor, STOPWORDS};
pub use reading_time::{estimate_reading_time, MIN_READING_MINUTES};
pub use summarizer::{split_sentences, Summarizer};
pub use transcript::{
    LocalTranscriptSource, SimulatedTranscriptSource, TranscriptSegment, TranscriptSource,
    VideoRef,
};
