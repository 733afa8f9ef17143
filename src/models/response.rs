//! Generation Response Models
//!
//! Typed shapes the generation layer's JSON replies parse into.

use serde::{Deserialize, Serialize};

use super::project::Project;

/// Reply shape of a plan generation call: `{ "project": { ... } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub project: Project,
}

/// Reply shape of a task execution simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    /// Markdown-formatted output blob
    pub output: String,
    pub tokens_used: u32,
    pub cost: f64,
    pub next_steps: Vec<String>,
}
