use crate::memory::{SessionMemory, LAST_EVALUATION};

use super::artifact::{DraftArtifact, EvaluationResult, PlanArtifact};

pub const EMPTY_FEEDBACK: &str = "No article content generated.";
pub const EMPTY_ARTICLE: &str = "No article generated.";
pub const ACCEPTED_FEEDBACK: &str = "For this demo, the generated article looks acceptable.";

/// Scores the draft and picks the final article.
///
/// Scoring is a placeholder: 0.0 for a blank body, 1.0 for anything else.
/// Richer judgement belongs in a replacement for this type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(
        &self,
        draft: &DraftArtifact,
        _plan: &PlanArtifact,
        memory: &mut SessionMemory,
    ) -> EvaluationResult {
        tracing::info!("Evaluating draft");

        let result = if draft.body.trim().is_empty() {
            EvaluationResult {
                score: 0.0,
                feedback: EMPTY_FEEDBACK.to_string(),
                final_article: EMPTY_ARTICLE.to_string(),
            }
        } else {
            EvaluationResult {
                score: 1.0,
                feedback: ACCEPTED_FEEDBACK.to_string(),
                final_article: draft.body.clone(),
            }
        };

        memory.set(LAST_EVALUATION, &result);
        tracing::info!(score = result.score, "Evaluation complete");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::artifact::{StylePreferences, PIPELINE_TASK};

    fn plan() -> PlanArtifact {
        PlanArtifact {
            task: PIPELINE_TASK.into(),
            original_input: "x".into(),
            transcript: String::new(),
            sections: vec![],
            segments: vec![],
            style: StylePreferences::default(),
        }
    }

    fn draft(body: &str) -> DraftArtifact {
        DraftArtifact {
            title: "T".into(),
            summary: String::new(),
            keywords: vec![],
            reading_time_minutes: 0.1,
            body: body.into(),
            style: StylePreferences::default(),
        }
    }

    #[test]
    fn test_blank_body_scores_zero() {
        for body in ["", "  \n\t "] {
            let mut memory = SessionMemory::new();
            let result = Evaluator::new().evaluate(&draft(body), &plan(), &mut memory);

            assert_eq!(result.score, 0.0);
            assert_eq!(result.feedback, EMPTY_FEEDBACK);
            assert_eq!(result.final_article, EMPTY_ARTICLE);
        }
    }

    #[test]
    fn test_body_returned_verbatim() {
        let body = "# Title\n\nContent with trailing space \n";
        let mut memory = SessionMemory::new();
        let result = Evaluator::new().evaluate(&draft(body), &plan(), &mut memory);

        assert_eq!(result.score, 1.0);
        assert_eq!(result.feedback, ACCEPTED_FEEDBACK);
        assert_eq!(result.final_article, body);

        let stored: Option<EvaluationResult> = memory.get(LAST_EVALUATION, None);
        assert_eq!(stored, Some(result));
    }
}
