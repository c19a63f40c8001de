use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::agent::StylePreferences;
use crate::error::{PipelineError, Result};
use crate::tools::{LocalTranscriptSource, SimulatedTranscriptSource, TranscriptSource};

/// Transcript source selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TranscriptSourceConfig {
    /// Fabricated demo transcript
    #[default]
    Simulated,
    /// Transcripts saved on disk
    Local { dir: PathBuf },
}

impl TranscriptSourceConfig {
    /// Instantiate the configured source
    pub fn build(&self) -> Box<dyn TranscriptSource> {
        match self {
            Self::Simulated => Box::new(SimulatedTranscriptSource),
            Self::Local { dir } => Box::new(LocalTranscriptSource::new(dir.clone())),
        }
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Character budget per transcript section
    pub chunk_max_chars: usize,
    /// Sentences kept in the overall summary
    pub summary_sentences: usize,
    /// Sentences kept per section
    pub section_summary_sentences: usize,
    pub max_keywords: usize,
    pub words_per_minute: u32,
    /// Style used when the session carries no preferences
    pub default_style: StylePreferences,
    /// Render a timestamped transcript instead of section summaries
    pub timestamps: bool,
    /// Footer appended to the article body
    pub attribution: Option<String>,
    pub transcript_source: TranscriptSourceConfig,
    pub log_level: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_max_chars: 800,
            summary_sentences: 3,
            section_summary_sentences: 2,
            max_keywords: 8,
            words_per_minute: 200,
            default_style: StylePreferences::default(),
            timestamps: false,
            attribution: None,
            transcript_source: TranscriptSourceConfig::Simulated,
            log_level: "info".into(),
        }
    }
}

impl PipelineConfig {
    /// Default configuration directory
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("vidscribe"))
    }

    /// Load from `config.json` in `config_dir`
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join("config.json");
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| {
            PipelineError::Config(format!("failed to read {}: {}", config_path.display(), e))
        })?;
        let config: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
            PipelineError::Config(format!("failed to parse {}: {}", config_path.display(), e))
        })?;

        // Load pipeline section if exists
        match config.get("pipeline") {
            Some(section) => serde_json::from_value(section.clone())
                .map_err(|e| PipelineError::Config(format!("invalid pipeline section: {}", e))),
            None => Ok(Self::default()),
        }
    }
}
