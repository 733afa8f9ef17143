//! Planning Service
//!
//! Templated generation operations: plan generation, sub-task breakdown,
//! and task execution simulation. Builds the prompt, routes it through the
//! provider layer, and parses the returned JSON into typed models. Nothing
//! here touches game state; a failed call leaves the tree untouched.

use chrono::Utc;
use launch_quest_llm::{route_model, GenerationOptions, LlmError, DEFAULT_MODEL};
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{ExecutionResult, IntegrationTool, PlanResponse, Task};

/// Sentinel rendered when no integrations are connected
const NO_INTEGRATIONS: &str = "None";

/// Generation service for the three roadmap operations
#[derive(Debug, Clone, Copy, Default)]
pub struct Planner;

impl Planner {
    pub fn new() -> Self {
        Self
    }

    /// Route the prompt to the model's provider and return the reply text.
    async fn generate_content(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> AppResult<String> {
        let model = options.model.as_deref().unwrap_or(DEFAULT_MODEL);
        let generator = route_model(model, options.api_keys.as_ref())?;

        tracing::debug!(
            dialect = generator.name(),
            model = generator.model(),
            prompt_len = prompt.len(),
            "sending generation request"
        );

        Ok(generator.generate(prompt).await?)
    }

    /// Generate a gamified roadmap for a free-text project idea.
    ///
    /// The prompt's level/task counts and numeric ranges are guidance to the
    /// model, not validated constraints. The parsed project gets a fresh id
    /// and creation timestamp when the reply omits them.
    pub async fn generate_plan(
        &self,
        description: &str,
        options: &GenerationOptions,
    ) -> AppResult<PlanResponse> {
        let prompt = format!(
            r#"You are an Expert Project Planner and AI Agent Orchestrator.
Your goal is to break the following project idea down into a roadmap of gamified levels. The number of levels must match the ambition of the project (minimum 6, maximum 15).

PROJECT: "{description}"

RULES:
1. Generate as many levels as the project's ambition requires.
2. Each level must have between 4 and 6 tasks.
3. Each task must have:
   - id (e.g. "1.1")
   - title (short and direct)
   - detail (a 1-2 sentence explanation)
   - aiType: "ai", "human" or "hybrid"
   - estimatedTokens: number between 1000 and 10000
   - estimatedCostAI: number between 50 and 500
   - estimatedTimeAI: string (e.g. "5m", "15m")
   - estimatedTimeHuman: string (e.g. "1h", "4h")
   - costHuman: 0
   - xp: number between 50 and 200

SUGGESTED STRUCTURE (adapt to the project):
- Foundation and Validation
- Product Core
- Technical Integrations
- UI/UX and Frontend
- Go-To-Market and Growth
- Scaling and Optimization

Respond ONLY with a valid JSON document following this structure:
{{
  "project": {{
    "name": "Project Name",
    "description": "Short description",
    "context": "A detailed technical summary of the project so other agents understand the stack, architecture and goals",
    "levels": [
      {{
        "id": 1,
        "title": "Level Title",
        "description": "Level description",
        "xp": 1000,
        "tasks": [...]
      }}
    ]
  }}
}}"#
        );

        let text = self.generate_content(&prompt, options).await?;
        let mut response: PlanResponse = parse_reply(&text)?;

        if response.project.id.is_empty() {
            response.project.id = Uuid::new_v4().to_string();
        }
        if response.project.created_at.is_empty() {
            response.project.created_at = Utc::now().to_rfc3339();
        }

        Ok(response)
    }

    /// Break a task down into exactly 7 sub-tasks.
    ///
    /// The count is a prompt rule; no count validation happens here. A
    /// correctness-focused caller rejects or repairs a reply with a
    /// different length.
    pub async fn generate_subtasks(
        &self,
        task_title: &str,
        task_detail: &str,
        project_context: Option<&str>,
        options: &GenerationOptions,
    ) -> AppResult<Vec<Task>> {
        let prompt = format!(
            r#"You are an Expert Project Planner.
Break the following task down into 7 detailed sub-tasks to go deeper into its execution.

TASK: "{task_title}"
DETAIL: "{task_detail}"
PROJECT CONTEXT: "{context}"

RULES:
1. Generate exactly 7 sub-tasks.
2. Each sub-task must be executable and specific.
3. Use the same task format as the original plan.

Respond ONLY with a valid JSON document that is an ARRAY of 7 task objects:
[
  {{
    "id": "sub-1",
    "title": "Sub-task Title",
    "detail": "Detailed explanation",
    "aiType": "ai" | "human" | "hybrid",
    "estimatedTokens": 500,
    "estimatedCostAI": 50,
    "estimatedTimeAI": "5m",
    "estimatedTimeHuman": "0m",
    "costHuman": 0,
    "xp": 50,
    "aiSteps": [{{ "tool": "Tool Name", "detail": "What to do", "prompt": "AI prompt" }}],
    "humanSteps": [{{ "title": "Step title", "detail": "What to do", "checklist": true }}]
  }}
]"#,
            context = project_context.unwrap_or("Not defined"),
        );

        let text = self.generate_content(&prompt, options).await?;
        parse_reply(&text)
    }

    /// Simulate executing a task via the same generative call.
    ///
    /// Connected integrations are named in the prompt (or a "none" sentinel)
    /// but no external tool is actually invoked.
    pub async fn execute_task(
        &self,
        task: &Task,
        project_context: Option<&str>,
        integrations: &[IntegrationTool],
        options: &GenerationOptions,
    ) -> AppResult<ExecutionResult> {
        let connected: Vec<&str> = integrations
            .iter()
            .filter(|t| t.connected)
            .map(|t| t.name.as_str())
            .collect();
        let connected = if connected.is_empty() {
            NO_INTEGRATIONS.to_string()
        } else {
            connected.join(", ")
        };

        let prompt = format!(
            r#"You are an Autonomous AI Agent specialized in technical execution.
Your goal is to perform the following task within the project's context.

PROJECT: "{context}"
TASK: "{title}"
DETAIL: "{detail}"
CONNECTED TOOLS: "{connected}"

RULES:
1. Produce a real technical response (code, configuration, or detailed steps).
2. If tools are connected, simulate how you would interact with them.
3. Be specific and professional.

Respond ONLY with a valid JSON document following this structure:
{{
  "output": "The execution result in Markdown format (code, tables, etc.)",
  "tokensUsed": 2500,
  "cost": 120,
  "nextSteps": ["Step 1", "Step 2"]
}}"#,
            context = project_context.unwrap_or("Not defined"),
            title = task.title,
            detail = task.detail,
        );

        let text = self.generate_content(&prompt, options).await?;
        parse_reply(&text)
    }
}

/// Parse a reply body into the expected shape, surfacing failures as
/// malformed-response errors. The extractor never repairs malformed JSON.
fn parse_reply<T: serde::de::DeserializeOwned>(text: &str) -> AppResult<T> {
    serde_json::from_str(text).map_err(|e| {
        LlmError::MalformedResponse {
            message: e.to_string(),
        }
        .into()
    })
}
