use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::memory::SessionMemory;
use crate::protocol::{AgentId, AgentMessage, Payload, Protocol};
use crate::tools::TranscriptSource;

use super::artifact::{DraftArtifact, EvaluationResult, PlanArtifact};
use super::evaluator::Evaluator;
use super::planner::Planner;
use super::worker::Worker;

pub const PLAN_TASK: &str = "plan_youtube_to_blog";
pub const DRAFT_TASK: &str = "generate_blog";
pub const EVALUATE_TASK: &str = "evaluate_blog";

/// Everything a run produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestratorResult {
    /// Article handed back to the caller
    pub response: String,
    pub plan: PlanArtifact,
    pub draft: DraftArtifact,
    pub evaluation: EvaluationResult,
}

/// Drives Planner → Worker → Evaluator for one input at a time.
///
/// Every run starts from a fresh copy of the seed memory, so nothing leaks
/// from one run into the next. Errors from any stage are returned as-is.
pub struct Orchestrator {
    seed: SessionMemory,
    planner: Planner,
    worker: Worker,
    evaluator: Evaluator,
    protocol: Protocol,
    last_session: Option<SessionMemory>,
}

impl Orchestrator {
    /// Orchestrator using the transcript source named in `config`
    pub fn new(config: &PipelineConfig) -> Self {
        Self::with_source(config, config.transcript_source.build())
    }

    pub fn with_source(config: &PipelineConfig, source: Box<dyn TranscriptSource>) -> Self {
        Self {
            seed: SessionMemory::new(),
            planner: Planner::new(source, config),
            worker: Worker::new(config),
            evaluator: Evaluator::new(),
            protocol: Protocol::new(),
            last_session: None,
        }
    }

    /// Entries every run starts with (e.g. style preferences)
    pub fn with_memory(mut self, seed: SessionMemory) -> Self {
        self.seed = seed;
        self
    }

    /// Memory of the last successful run
    pub fn last_session(&self) -> Option<&SessionMemory> {
        self.last_session.as_ref()
    }

    /// Run the full pipeline for `user_input`
    pub fn run(&mut self, user_input: &str) -> Result<OrchestratorResult> {
        self.last_session = None;
        let run_id = new_run_id();
        let _span = tracing::info_span!("run", run_id = %run_id).entered();
        tracing::info!(input = user_input, "Handling user input");

        let mut memory = self.seed.clone();

        let plan_msg = self.handoff(
            AgentId::User,
            AgentId::Planner,
            PLAN_TASK,
            Payload::UserInput {
                user_input: user_input.to_string(),
            },
            &run_id,
        )?;
        let Payload::UserInput { user_input } = plan_msg.into_payload() else {
            return Err(unexpected_payload(AgentId::Planner));
        };
        let plan = self.planner.create_plan(&user_input, &mut memory)?;

        let worker_msg = self.handoff(
            AgentId::Planner,
            AgentId::Worker,
            DRAFT_TASK,
            Payload::Plan { plan: plan.clone() },
            &run_id,
        )?;
        let Payload::Plan { plan: worker_plan } = worker_msg.into_payload() else {
            return Err(unexpected_payload(AgentId::Worker));
        };
        let draft = self.worker.generate_blog(&worker_plan, &mut memory);

        let evaluator_msg = self.handoff(
            AgentId::Worker,
            AgentId::Evaluator,
            EVALUATE_TASK,
            Payload::Review {
                draft: draft.clone(),
                plan: plan.clone(),
            },
            &run_id,
        )?;
        let Payload::Review {
            draft: review_draft,
            plan: review_plan,
        } = evaluator_msg.into_payload()
        else {
            return Err(unexpected_payload(AgentId::Evaluator));
        };
        let evaluation = self.evaluator.evaluate(&review_draft, &review_plan, &mut memory);

        self.last_session = Some(memory);
        tracing::info!(score = evaluation.score, "Run finished");

        Ok(OrchestratorResult {
            response: evaluation.final_article.clone(),
            plan,
            draft,
            evaluation,
        })
    }

    fn handoff(
        &self,
        sender: AgentId,
        receiver: AgentId,
        task: &str,
        payload: Payload,
        run_id: &str,
    ) -> Result<AgentMessage> {
        let msg = self
            .protocol
            .build_typed(sender, receiver, task, payload, Some(trace_meta(run_id)))?;
        tracing::debug!(
            sender = %msg.sender(),
            receiver = %msg.receiver(),
            task = msg.task(),
            "Handoff"
        );
        Ok(msg)
    }
}

fn new_run_id() -> String {
    let uuid = Uuid::new_v4().to_string();
    format!("run-{}", uuid.split('-').next().unwrap_or(&uuid))
}

fn trace_meta(run_id: &str) -> Map<String, Value> {
    let mut meta = Map::new();
    meta.insert("run_id".into(), Value::from(run_id));
    meta.insert("sent_at".into(), Value::from(Utc::now().to_rfc3339()));
    meta
}

fn unexpected_payload(receiver: AgentId) -> PipelineError {
    PipelineError::invalid_message(format!("unexpected payload for {}", receiver))
}

/// Run a single input with `config` and return the final article
pub fn run_agent(user_input: &str, config: &PipelineConfig) -> Result<String> {
    let mut orchestrator = Orchestrator::new(config);
    orchestrator.run(user_input).map(|result| result.response)
}
