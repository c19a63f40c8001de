//! vidscribe
//!
//! Turns a video transcript into a blog article. A run passes through three
//! stages, Planner → Worker → Evaluator, wired together by [`Orchestrator`].
//! Stages hand off through [`protocol::AgentMessage`] envelopes and share a
//! per-run [`memory::SessionMemory`].

pub mod agent;
pub mod config;
pub mod error;
pub mod logging;
pub mod memory;
pub mod output;
pub mod protocol;
pub mod render;
pub mod tools;

pub use agent::{Orchestrator, OrchestratorResult};
pub use config::PipelineConfig;
pub use error::{PipelineError, Result, TranscriptErrorKind};
