use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a transcript could not be retrieved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptErrorKind {
    /// Captions are turned off for the video
    Disabled,
    /// No transcript exists for the reference
    NotFound,
    /// The video itself cannot be reached
    VideoUnavailable,
    /// The source has no per-segment timing data
    TimingUnsupported,
    /// Any other retrieval failure
    Fetch(String),
}

impl fmt::Display for TranscriptErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "transcripts are disabled"),
            Self::NotFound => write!(f, "no transcript found"),
            Self::VideoUnavailable => write!(f, "video unavailable"),
            Self::TimingUnsupported => write!(f, "timed transcript not supported by this source"),
            Self::Fetch(reason) => write!(f, "fetch failed: {}", reason),
        }
    }
}

/// Errors raised by the pipeline and its collaborators
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid message: {reason}")]
    InvalidMessage { reason: String },

    #[error("transcript unavailable for '{reference}': {kind}")]
    TranscriptUnavailable {
        reference: String,
        kind: TranscriptErrorKind,
    },

    #[error("cannot extract a video reference from '{input}': {reason}")]
    InputExtraction { input: String, reason: String },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    pub fn invalid_message(reason: impl Into<String>) -> Self {
        Self::InvalidMessage {
            reason: reason.into(),
        }
    }

    pub fn transcript_unavailable(reference: impl Into<String>, kind: TranscriptErrorKind) -> Self {
        Self::TranscriptUnavailable {
            reference: reference.into(),
            kind,
        }
    }

    pub fn input_extraction(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InputExtraction {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_error_names_reference_and_kind() {
        let err = PipelineError::transcript_unavailable("abc123DEF45", TranscriptErrorKind::Disabled);
        let msg = err.to_string();
        assert!(msg.contains("abc123DEF45"));
        assert!(msg.contains("disabled"));
    }

    #[test]
    fn test_input_extraction_message() {
        let err = PipelineError::input_extraction("not a url", "no video id");
        assert_eq!(
            err.to_string(),
            "cannot extract a video reference from 'not a url': no video id"
        );
    }

    #[test]
    fn test_kind_can_be_matched() {
        let err = PipelineError::transcript_unavailable(
            "x",
            TranscriptErrorKind::Fetch("timeout".into()),
        );
        match err {
            PipelineError::TranscriptUnavailable {
                kind: TranscriptErrorKind::Fetch(reason),
                ..
            } => assert_eq!(reason, "timeout"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
