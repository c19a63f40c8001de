use crate::config::PipelineConfig;
use crate::memory::{SessionMemory, LAST_DRAFT};
use crate::render;
use crate::tools::{estimate_reading_time, KeywordExtractor, Summarizer, MIN_READING_MINUTES};

use super::artifact::{DraftArtifact, PlanArtifact};

/// Turns a plan into a blog draft
pub struct Worker {
    summarizer: Summarizer,
    keywords: KeywordExtractor,
    summary_sentences: usize,
    section_summary_sentences: usize,
    max_keywords: usize,
    words_per_minute: u32,
    attribution: Option<String>,
}

impl Worker {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            summarizer: Summarizer::new(),
            keywords: KeywordExtractor::new(),
            summary_sentences: config.summary_sentences,
            section_summary_sentences: config.section_summary_sentences,
            max_keywords: config.max_keywords,
            words_per_minute: config.words_per_minute,
            attribution: config.attribution.clone(),
        }
    }

    /// Write the draft for `plan` and record it in memory.
    ///
    /// Plans with timed segments get a timestamped transcript body, the rest
    /// get one summary block per section. A blank transcript produces an
    /// empty body.
    pub fn generate_blog(&self, plan: &PlanArtifact, memory: &mut SessionMemory) -> DraftArtifact {
        tracing::info!(timestamped = plan.is_timestamped(), "Generating blog content from plan");
        let transcript = plan.transcript.as_str();
        let has_content = !transcript.trim().is_empty();

        let summary = if has_content {
            self.summarizer.summarize(transcript, self.summary_sentences)
        } else {
            String::new()
        };
        let keywords = self.keywords.extract(transcript, self.max_keywords);
        let reading_time_minutes =
            estimate_reading_time(transcript, self.words_per_minute).max(MIN_READING_MINUTES);
        let title = render::title_for(&keywords);

        let body = if has_content {
            self.render_body(plan, &title, reading_time_minutes, &summary, &keywords)
        } else {
            String::new()
        };

        let draft = DraftArtifact {
            title,
            summary,
            keywords,
            reading_time_minutes,
            body,
            style: plan.style.clone(),
        };

        memory.set(LAST_DRAFT, &draft);
        tracing::info!(chars = draft.body.len(), "Draft generated");
        draft
    }

    fn render_body(
        &self,
        plan: &PlanArtifact,
        title: &str,
        reading_time_minutes: f64,
        summary: &str,
        keywords: &[String],
    ) -> String {
        let mut body = render::header_block(title, reading_time_minutes, summary, keywords);

        if plan.is_timestamped() {
            body.push_str(&render::timestamp_block(&plan.segments));
        } else {
            let section_summaries: Vec<String> = plan
                .sections
                .iter()
                .map(|sec| self.summarizer.summarize(sec, self.section_summary_sentences))
                .collect();
            body.push_str(&render::section_blocks(&section_summaries));
        }

        if let Some(text) = self.attribution.as_deref().filter(|t| !t.trim().is_empty()) {
            body.push_str(&render::attribution_footer(text));
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::artifact::{StylePreferences, PIPELINE_TASK};
    use crate::tools::{chunk_text, TranscriptSegment};

    fn plan_for(transcript: &str) -> PlanArtifact {
        PlanArtifact {
            task: PIPELINE_TASK.into(),
            original_input: "input".into(),
            transcript: transcript.into(),
            sections: chunk_text(transcript, 800),
            segments: vec![],
            style: StylePreferences::default(),
        }
    }

    #[test]
    fn test_section_mode_body() {
        let plan = plan_for("Rust makes agents fast. Agents plan work. Agents review drafts. Extra.");
        let mut memory = SessionMemory::new();

        let draft = Worker::new(&PipelineConfig::default()).generate_blog(&plan, &mut memory);

        assert_eq!(draft.title, "Agents – A Blog Based on a YouTube Video");
        assert_eq!(
            draft.summary,
            "Rust makes agents fast. Agents plan work. Agents review drafts."
        );
        assert_eq!(draft.keywords[0], "agents");
        assert!(draft.body.starts_with("# Agents – A Blog Based on a YouTube Video\n\n"));
        assert!(draft.body.contains("**Estimated reading time:** 0.1 minutes"));
        assert!(draft.body.contains("**SEO Keywords:** agents, rust"));
        assert!(draft.body.contains("## Section 1\n\nRust makes agents fast. Agents plan work.\n"));
        assert!(!draft.body.contains("## Transcript"));

        let stored: Option<DraftArtifact> = memory.get(LAST_DRAFT, None);
        assert_eq!(stored, Some(draft));
    }

    #[test]
    fn test_sections_numbered_in_order() {
        let mut plan = plan_for("one");
        plan.transcript = "First part here. Second part here.".into();
        plan.sections = vec!["First part here.".into(), "Second part here.".into()];

        let draft = Worker::new(&PipelineConfig::default()).generate_blog(&plan, &mut SessionMemory::new());
        let first = draft.body.find("## Section 1\n\nFirst part here.").unwrap();
        let second = draft.body.find("## Section 2\n\nSecond part here.").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_empty_transcript_draft() {
        let plan = plan_for("");
        let draft = Worker::new(&PipelineConfig::default()).generate_blog(&plan, &mut SessionMemory::new());

        assert_eq!(draft.summary, "");
        assert!(draft.keywords.is_empty());
        assert_eq!(draft.title, render::GENERIC_TITLE);
        assert_eq!(draft.reading_time_minutes, MIN_READING_MINUTES);
        assert!(draft.body.is_empty());
    }

    #[test]
    fn test_timestamped_mode_body() {
        let mut plan = plan_for("Intro\nBody");
        plan.segments = vec![
            TranscriptSegment::new(0.0, 5.0, "Intro"),
            TranscriptSegment::new(5.0, 3.0, "Body"),
        ];

        let draft = Worker::new(&PipelineConfig::default()).generate_blog(&plan, &mut SessionMemory::new());

        assert!(draft.body.starts_with("# Intro – A Blog Based on a YouTube Video"));
        assert!(draft.body.contains("## Transcript\n\n00:00 - 00:05: Intro\n00:05 - 00:08: Body\n"));
        assert!(!draft.body.contains("## Section"));
    }

    #[test]
    fn test_attribution_footer_is_optional() {
        let plan = plan_for("Some words worth reading.");
        let plain = Worker::new(&PipelineConfig::default()).generate_blog(&plan, &mut SessionMemory::new());
        assert!(!plain.body.contains("---"));

        let config = PipelineConfig {
            attribution: Some("Generated by vidscribe".into()),
            ..PipelineConfig::default()
        };
        let draft = Worker::new(&config).generate_blog(&plan, &mut SessionMemory::new());
        assert!(draft.body.ends_with("\n---\n\nGenerated by vidscribe\n"));
    }

    #[test]
    fn test_style_carried_through() {
        let mut plan = plan_for("Words.");
        plan.style = StylePreferences {
            tone: "formal".into(),
            length: "long".into(),
        };
        let draft = Worker::new(&PipelineConfig::default()).generate_blog(&plan, &mut SessionMemory::new());
        assert_eq!(draft.style, plan.style);
    }
}
