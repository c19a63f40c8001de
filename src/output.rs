use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{PipelineError, Result};
use crate::memory::SessionMemory;

/// Writes generated articles to disk
pub struct ArticleWriter {
    out_dir: PathBuf,
}

impl ArticleWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// File name for an article saved at `at`; `index` tells batch outputs apart
    pub fn file_name(at: DateTime<Local>, index: Option<usize>) -> String {
        let stamp = at.format("%Y%m%d_%H%M%S");
        match index {
            Some(i) => format!("youtube_transcript_{}_{}.txt", stamp, i),
            None => format!("youtube_transcript_{}.txt", stamp),
        }
    }

    /// Save article content, creating the output directory if needed
    pub fn save(&self, content: &str, index: Option<usize>) -> Result<PathBuf> {
        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(Self::file_name(Local::now(), index));
        fs::write(&path, content)?;
        tracing::info!(path = %path.display(), "Article saved");
        Ok(path)
    }
}

/// Dump a session snapshot as pretty JSON
pub fn save_session(path: &Path, memory: &SessionMemory) -> Result<()> {
    let content = serde_json::to_string_pretty(&memory.snapshot())
        .map_err(|e| PipelineError::Config(format!("failed to serialize session: {}", e)))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    #[test]
    fn test_file_name_format() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(
            ArticleWriter::file_name(at, None),
            "youtube_transcript_20240309_140507.txt"
        );
        assert_eq!(
            ArticleWriter::file_name(at, Some(2)),
            "youtube_transcript_20240309_140507_2.txt"
        );
    }

    #[test]
    fn test_save_writes_content() {
        let dir = tempdir().unwrap();
        let writer = ArticleWriter::new(dir.path().join("articles"));

        let path = writer.save("# Article", None).unwrap();
        assert!(path.starts_with(dir.path().join("articles")));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Article");
    }

    #[test]
    fn test_save_session_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let mut memory = SessionMemory::new();
        memory.set("last_plan", &serde_json::json!({"task": "youtube_to_blog"}));

        save_session(&path, &memory).unwrap();

        let loaded: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded["last_plan"]["task"], "youtube_to_blog");
    }
}
