use serde::{Deserialize, Serialize};

use crate::tools::TranscriptSegment;

/// Pipeline kind recorded in every plan
pub const PIPELINE_TASK: &str = "youtube_to_blog";

/// Presentation preferences carried from plan to draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePreferences {
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_length")]
    pub length: String,
}

fn default_tone() -> String {
    "simple".into()
}

fn default_length() -> String {
    "medium".into()
}

impl Default for StylePreferences {
    fn default() -> Self {
        Self {
            tone: default_tone(),
            length: default_length(),
        }
    }
}

/// Planner output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanArtifact {
    pub task: String,
    pub original_input: String,
    pub transcript: String,
    pub sections: Vec<String>,
    /// Timed segments; when present the Worker renders a timestamped view
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<TranscriptSegment>,
    pub style: StylePreferences,
}

impl PlanArtifact {
    pub fn is_timestamped(&self) -> bool {
        !self.segments.is_empty()
    }
}

/// Worker output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftArtifact {
    pub title: String,
    pub summary: String,
    pub keywords: Vec<String>,
    pub reading_time_minutes: f64,
    pub body: String,
    pub style: StylePreferences,
}

/// Evaluator output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub score: f64,
    pub feedback: String,
    pub final_article: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_defaults() {
        let style = StylePreferences::default();
        assert_eq!(style.tone, "simple");
        assert_eq!(style.length, "medium");
    }

    #[test]
    fn test_style_partial_json_fills_defaults() {
        let style: StylePreferences = serde_json::from_str(r#"{"tone": "formal"}"#).unwrap();
        assert_eq!(style.tone, "formal");
        assert_eq!(style.length, "medium");
    }

    #[test]
    fn test_plan_without_segments_omits_field() {
        let plan = PlanArtifact {
            task: PIPELINE_TASK.into(),
            original_input: "input".into(),
            transcript: String::new(),
            sections: vec![],
            segments: vec![],
            style: StylePreferences::default(),
        };
        let json = serde_json::to_value(&plan).unwrap();
        assert!(json.get("segments").is_none());
        assert!(!plan.is_timestamped());
    }
}
