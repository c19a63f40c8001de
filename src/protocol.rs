//! Agent-to-agent message envelope.
//!
//! An [`AgentMessage`] records one handoff between stages. It is built once
//! and never mutated; the next handoff gets a new message with a new payload.
//! Messages are kept for traceability only, the orchestrator always knows
//! the next stage without looking at them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::agent::{DraftArtifact, PlanArtifact};
use crate::error::{PipelineError, Result};

/// Participants in the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentId {
    User,
    Planner,
    Worker,
    Evaluator,
}

impl AgentId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Planner => "planner",
            Self::Worker => "worker",
            Self::Evaluator => "evaluator",
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentId {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        parse_agent(s).map_err(PipelineError::invalid_message)
    }
}

/// Resolve an identifier, returning the bare rejection reason on failure
fn parse_agent(s: &str) -> std::result::Result<AgentId, String> {
    match s.trim() {
        "" => Err("empty agent identifier".to_string()),
        "user" => Ok(AgentId::User),
        "planner" => Ok(AgentId::Planner),
        "worker" => Ok(AgentId::Worker),
        "evaluator" => Ok(AgentId::Evaluator),
        other => Err(format!("unknown agent identifier '{}'", other)),
    }
}

/// What one stage hands to the next
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Payload {
    UserInput { user_input: String },
    Plan { plan: PlanArtifact },
    Review { draft: DraftArtifact, plan: PlanArtifact },
}

/// One handoff record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentMessage {
    sender: AgentId,
    receiver: AgentId,
    task: String,
    payload: Payload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta: Option<Map<String, Value>>,
}

impl AgentMessage {
    pub fn sender(&self) -> AgentId {
        self.sender
    }

    pub fn receiver(&self) -> AgentId {
        self.receiver
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn meta(&self) -> Option<&Map<String, Value>> {
        self.meta.as_ref()
    }

    /// Look up a single meta entry
    pub fn meta_value(&self, key: &str) -> Option<&Value> {
        self.meta.as_ref().and_then(|m| m.get(key))
    }

    /// Consume the message, keeping only its payload
    pub fn into_payload(self) -> Payload {
        self.payload
    }
}

/// Builds [`AgentMessage`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct Protocol;

impl Protocol {
    pub fn new() -> Self {
        Self
    }

    /// Build a message from textual identifiers.
    ///
    /// Fails with `InvalidMessage` when `sender` or `receiver` is empty or
    /// not a known participant, or when `task` is blank.
    pub fn build(
        &self,
        sender: &str,
        receiver: &str,
        task: &str,
        payload: Payload,
        meta: Option<Map<String, Value>>,
    ) -> Result<AgentMessage> {
        let sender = parse_agent(sender)
            .map_err(|reason| PipelineError::invalid_message(format!("sender: {}", reason)))?;
        let receiver = parse_agent(receiver)
            .map_err(|reason| PipelineError::invalid_message(format!("receiver: {}", reason)))?;
        self.build_typed(sender, receiver, task, payload, meta)
    }

    /// Build a message between known participants
    pub fn build_typed(
        &self,
        sender: AgentId,
        receiver: AgentId,
        task: &str,
        payload: Payload,
        meta: Option<Map<String, Value>>,
    ) -> Result<AgentMessage> {
        if task.trim().is_empty() {
            return Err(PipelineError::invalid_message("empty task name"));
        }
        Ok(AgentMessage {
            sender,
            receiver,
            task: task.to_string(),
            payload,
            meta,
        })
    }
}
