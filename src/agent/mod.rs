mod artifact;
mod evaluator;
mod orchestrator;
mod planner;
mod worker;

pub use artifact::{DraftArtifact, EvaluationResult, PlanArtifact, StylePreferences, PIPELINE_TASK};
pub use evaluator::{Evaluator, ACCEPTED_FEEDBACK, EMPTY_ARTICLE, EMPTY_FEEDBACK};
pub use orchestrator::{
    run_agent, Orchestrator, OrchestratorResult, DRAFT_TASK, EVALUATE_TASK, PLAN_TASK,
};
pub use planner::Planner;
pub use worker::Worker;
