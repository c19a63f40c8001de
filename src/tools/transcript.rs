use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result, TranscriptErrorKind};
use crate::tools::summarizer::split_sentences;

/// One timed piece of a transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Offset from the start of the video, in seconds
    pub start: f64,
    /// Length in seconds
    pub duration: f64,
    pub text: String,
}

impl TranscriptSegment {
    pub fn new(start: f64, duration: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            duration,
            text: text.into(),
        }
    }

    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

static BARE_ID: OnceLock<Regex> = OnceLock::new();
static URL_ID: OnceLock<Regex> = OnceLock::new();

fn bare_id() -> &'static Regex {
    BARE_ID.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("Invalid video id pattern"))
}

fn url_id() -> &'static Regex {
    URL_ID.get_or_init(|| {
        Regex::new(
            r"^(?:https?://)?(?:[A-Za-z0-9-]+\.)*(?:youtube(?:-nocookie)?\.com/(?:watch\?(?:[^#\s]*&)?v=|embed/|shorts/|live/|v/)|youtu\.be/)([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
        )
        .expect("Invalid video url pattern")
    })
}

/// A resolved video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoRef {
    id: String,
}

impl VideoRef {
    /// Resolve a URL or bare id to a video id
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PipelineError::input_extraction(input, "input is empty"));
        }
        if bare_id().is_match(trimmed) {
            return Ok(Self {
                id: trimmed.to_string(),
            });
        }
        url_id()
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| Self {
                id: m.as_str().to_string(),
            })
            .ok_or_else(|| PipelineError::input_extraction(input, "no video id found"))
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for VideoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Where transcripts come from
pub trait TranscriptSource: Send + Sync {
    /// Full transcript text for `reference`
    fn fetch(&self, reference: &str) -> Result<String>;

    /// Timed segments for `reference`, ordered by start time
    fn fetch_timestamped(&self, reference: &str) -> Result<Vec<TranscriptSegment>> {
        Err(PipelineError::transcript_unavailable(
            reference,
            TranscriptErrorKind::TimingUnsupported,
        ))
    }
}

const DEMO_TEXT: &str = "Welcome to this YouTube video. In this session, we discuss how to convert videos into blog articles. \
We cover the main ideas, break down the content into sections, and show how AI can automate this process. \
By the end, you will understand how to design a YouTube to blog converter using multi-agent systems.";

/// Offline demo source that fabricates a transcript for any input
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedTranscriptSource;

impl SimulatedTranscriptSource {
    const HEADER_SECONDS: f64 = 4.0;
    const SENTENCE_SECONDS: f64 = 6.0;
}

impl TranscriptSource for SimulatedTranscriptSource {
    fn fetch(&self, reference: &str) -> Result<String> {
        Ok(format!("Simulated transcript for: {}\n\n{}", reference, DEMO_TEXT))
    }

    fn fetch_timestamped(&self, reference: &str) -> Result<Vec<TranscriptSegment>> {
        let mut segments = vec![TranscriptSegment::new(
            0.0,
            Self::HEADER_SECONDS,
            format!("Simulated transcript for: {}", reference),
        )];
        for (i, sentence) in split_sentences(DEMO_TEXT).into_iter().enumerate() {
            segments.push(TranscriptSegment::new(
                Self::HEADER_SECONDS + i as f64 * Self::SENTENCE_SECONDS,
                Self::SENTENCE_SECONDS,
                sentence,
            ));
        }
        Ok(segments)
    }
}

/// Reads transcripts saved on disk, keyed by video id.
///
/// `<id>.txt` holds plain text, `<id>.json` an array of segments and an
/// `<id>.disabled` marker reports captions as turned off.
#[derive(Debug, Clone)]
pub struct LocalTranscriptSource {
    dir: PathBuf,
}

impl LocalTranscriptSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, video: &VideoRef, ext: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", video.id(), ext))
    }

    fn resolve(&self, reference: &str) -> Result<VideoRef> {
        let video = VideoRef::parse(reference)?;
        tracing::debug!(video = %video, dir = %self.dir().display(), "Reading transcript");
        if self.path_for(&video, "disabled").exists() {
            return Err(PipelineError::transcript_unavailable(
                reference,
                TranscriptErrorKind::Disabled,
            ));
        }
        Ok(video)
    }

    fn read_segments(&self, reference: &str, path: &Path) -> Result<Vec<TranscriptSegment>> {
        let content = read_file(reference, path)?;
        let mut segments: Vec<TranscriptSegment> = serde_json::from_str(&content).map_err(|e| {
            PipelineError::transcript_unavailable(
                reference,
                TranscriptErrorKind::Fetch(format!("invalid segments in {}: {}", path.display(), e)),
            )
        })?;
        segments.sort_by(|a, b| a.start.total_cmp(&b.start));
        Ok(segments)
    }
}

fn read_file(reference: &str, path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        let kind = match e.kind() {
            io::ErrorKind::NotFound => TranscriptErrorKind::NotFound,
            _ => TranscriptErrorKind::Fetch(format!("{}: {}", path.display(), e)),
        };
        PipelineError::transcript_unavailable(reference, kind)
    })
}

impl TranscriptSource for LocalTranscriptSource {
    fn fetch(&self, reference: &str) -> Result<String> {
        let video = self.resolve(reference)?;
        let text_path = self.path_for(&video, "txt");
        if text_path.exists() {
            return read_file(reference, &text_path);
        }

        let json_path = self.path_for(&video, "json");
        if json_path.exists() {
            let segments = self.read_segments(reference, &json_path)?;
            return Ok(segments
                .iter()
                .map(|s| s.text.trim())
                .collect::<Vec<_>>()
                .join("\n"));
        }

        Err(PipelineError::transcript_unavailable(
            reference,
            TranscriptErrorKind::NotFound,
        ))
    }

    fn fetch_timestamped(&self, reference: &str) -> Result<Vec<TranscriptSegment>> {
        let video = self.resolve(reference)?;
        let json_path = self.path_for(&video, "json");
        if json_path.exists() {
            return self.read_segments(reference, &json_path);
        }

        let kind = if self.path_for(&video, "txt").exists() {
            TranscriptErrorKind::TimingUnsupported
        } else {
            TranscriptErrorKind::NotFound
        };
        Err(PipelineError::transcript_unavailable(reference, kind))
    }
}
