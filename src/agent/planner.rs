use crate::config::PipelineConfig;
use crate::error::Result;
use crate::memory::{SessionMemory, LAST_PLAN, STYLE_PREFERENCES};
use crate::tools::{chunk_text, TranscriptSource};

use super::artifact::{PlanArtifact, StylePreferences, PIPELINE_TASK};

/// Fetches the transcript and splits it into sections
pub struct Planner {
    source: Box<dyn TranscriptSource>,
    chunk_max_chars: usize,
    default_style: StylePreferences,
    timestamps: bool,
}

impl Planner {
    pub fn new(source: Box<dyn TranscriptSource>, config: &PipelineConfig) -> Self {
        Self {
            source,
            chunk_max_chars: config.chunk_max_chars,
            default_style: config.default_style.clone(),
            timestamps: config.timestamps,
        }
    }

    /// Build the plan for `user_input` and record it in memory.
    ///
    /// Retrieval failures are returned untouched. An empty transcript is not
    /// an error and yields no sections.
    pub fn create_plan(&self, user_input: &str, memory: &mut SessionMemory) -> Result<PlanArtifact> {
        tracing::info!(input = user_input, timestamps = self.timestamps, "Creating plan");
        let style = memory.get(STYLE_PREFERENCES, self.default_style.clone());

        let (transcript, segments) = if self.timestamps {
            let segments = self.source.fetch_timestamped(user_input)?;
            let transcript = segments
                .iter()
                .map(|s| s.text.trim())
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            (transcript, segments)
        } else {
            (self.source.fetch(user_input)?, Vec::new())
        };
        // Whitespace-only text counts as no transcript at all
        let transcript = if transcript.trim().is_empty() {
            String::new()
        } else {
            transcript
        };

        let sections = chunk_text(&transcript, self.chunk_max_chars);

        let plan = PlanArtifact {
            task: PIPELINE_TASK.to_string(),
            original_input: user_input.to_string(),
            transcript,
            sections,
            segments,
            style,
        };

        memory.set(LAST_PLAN, &plan);
        tracing::info!(
            sections = plan.sections.len(),
            segments = plan.segments.len(),
            "Plan created"
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PipelineError, TranscriptErrorKind};
    use crate::tools::{SimulatedTranscriptSource, TranscriptSegment};

    struct FixedSource(String);

    impl TranscriptSource for FixedSource {
        fn fetch(&self, _reference: &str) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl TranscriptSource for FailingSource {
        fn fetch(&self, reference: &str) -> Result<String> {
            Err(PipelineError::transcript_unavailable(
                reference,
                TranscriptErrorKind::VideoUnavailable,
            ))
        }
    }

    #[test]
    fn test_plan_from_simulated_source() {
        let planner = Planner::new(Box::new(SimulatedTranscriptSource), &PipelineConfig::default());
        let mut memory = SessionMemory::new();

        let plan = planner.create_plan("https://youtu.be/demo", &mut memory).unwrap();

        assert_eq!(plan.task, PIPELINE_TASK);
        assert_eq!(plan.original_input, "https://youtu.be/demo");
        assert!(plan.transcript.contains("https://youtu.be/demo"));
        assert_eq!(plan.sections.len(), 1);
        assert!(plan.segments.is_empty());
        assert_eq!(plan.style, StylePreferences::default());

        let stored: Option<PlanArtifact> = memory.get(LAST_PLAN, None);
        assert_eq!(stored, Some(plan));
    }

    #[test]
    fn test_style_comes_from_memory() {
        let planner = Planner::new(Box::new(FixedSource("text".into())), &PipelineConfig::default());
        let mut memory = SessionMemory::new();
        let style = StylePreferences {
            tone: "playful".into(),
            length: "short".into(),
        };
        memory.set(STYLE_PREFERENCES, &style);

        let plan = planner.create_plan("x", &mut memory).unwrap();
        assert_eq!(plan.style, style);
    }

    #[test]
    fn test_empty_transcript_is_not_an_error() {
        let planner = Planner::new(Box::new(FixedSource(String::new())), &PipelineConfig::default());
        let mut memory = SessionMemory::new();

        let plan = planner.create_plan("x", &mut memory).unwrap();
        assert_eq!(plan.transcript, "");
        assert!(plan.sections.is_empty());
    }

    #[test]
    fn test_whitespace_transcript_is_empty() {
        let planner = Planner::new(
            Box::new(FixedSource("  \n\t\n ".into())),
            &PipelineConfig::default(),
        );
        let mut memory = SessionMemory::new();

        let plan = planner.create_plan("x", &mut memory).unwrap();
        assert_eq!(plan.transcript, "");
        assert!(plan.sections.is_empty());

        let stored: PlanArtifact = memory.get(LAST_PLAN, plan.clone());
        assert_eq!(stored.transcript, "");
    }

    #[test]
    fn test_sections_respect_budget() {
        let text = (0..10).map(|i| format!("Paragraph number {}.", i)).collect::<Vec<_>>().join("\n");
        let config = PipelineConfig {
            chunk_max_chars: 45,
            ..PipelineConfig::default()
        };
        let planner = Planner::new(Box::new(FixedSource(text)), &config);

        let plan = planner.create_plan("x", &mut SessionMemory::new()).unwrap();
        assert_eq!(plan.sections.len(), 5);
        assert!(plan.sections.iter().all(|s| s.chars().count() <= 45));
    }

    #[test]
    fn test_retrieval_failure_propagates() {
        let planner = Planner::new(Box::new(FailingSource), &PipelineConfig::default());
        let mut memory = SessionMemory::new();

        let err = planner.create_plan("gone", &mut memory).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::TranscriptUnavailable { kind: TranscriptErrorKind::VideoUnavailable, .. }
        ));
        assert!(!memory.contains(LAST_PLAN));
    }

    #[test]
    fn test_timestamped_plan_carries_segments() {
        let config = PipelineConfig {
            timestamps: true,
            ..PipelineConfig::default()
        };
        let planner = Planner::new(Box::new(SimulatedTranscriptSource), &config);

        let plan = planner.create_plan("demo", &mut SessionMemory::new()).unwrap();
        assert!(plan.is_timestamped());
        let first: &TranscriptSegment = &plan.segments[0];
        assert!(plan.transcript.starts_with(&first.text));
    }

    #[test]
    fn test_timestamps_on_text_only_source_fail() {
        let config = PipelineConfig {
            timestamps: true,
            ..PipelineConfig::default()
        };
        let planner = Planner::new(Box::new(FixedSource("text".into())), &config);

        let err = planner.create_plan("x", &mut SessionMemory::new()).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::TranscriptUnavailable { kind: TranscriptErrorKind::TimingUnsupported, .. }
        ));
    }
}
