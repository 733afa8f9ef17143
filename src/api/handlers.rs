use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use launch_quest_llm::{ApiKeyOverrides, GenerationOptions};
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::models::{IntegrationTool, Task};
use crate::services::Planner;

// ============================================================
// Error Handling
// ============================================================

/// Map a service error to a JSON error body. Generation failures carry
/// messages meant for the caller (missing credential, provider status), so
/// they pass through verbatim rather than being sanitized.
fn service_error(e: AppError) -> (StatusCode, Json<serde_json::Value>) {
    tracing::error!("request failed: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.to_string() })),
    )
}

fn bad_request(msg: &str) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": msg })))
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

// ============================================================
// Generation
// ============================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub api_keys: Option<ApiKeyOverrides>,
}

pub async fn generate_plan(
    State(planner): State<Planner>,
    Json(req): Json<PlanRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    let description = match req.description.as_deref() {
        Some(d) if !d.trim().is_empty() => d,
        _ => return Err(bad_request("A project description is required")),
    };

    let options = GenerationOptions {
        model: req.model,
        api_keys: req.api_keys,
    };
    let plan = planner
        .generate_plan(description, &options)
        .await
        .map_err(service_error)?;
    Ok(Json(plan))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownRequest {
    #[serde(default)]
    pub task_title: Option<String>,
    #[serde(default)]
    pub task_detail: Option<String>,
    #[serde(default)]
    pub project_context: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub api_keys: Option<ApiKeyOverrides>,
}

pub async fn break_down_task(
    State(planner): State<Planner>,
    Json(req): Json<BreakdownRequest>,
) -> Result<Json<Vec<Task>>, (StatusCode, Json<serde_json::Value>)> {
    let title = match req.task_title.as_deref() {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Err(bad_request("A task title is required")),
    };

    let options = GenerationOptions {
        model: req.model,
        api_keys: req.api_keys,
    };
    let sub_tasks = planner
        .generate_subtasks(
            title,
            req.task_detail.as_deref().unwrap_or_default(),
            req.project_context.as_deref(),
            &options,
        )
        .await
        .map_err(service_error)?;
    Ok(Json(sub_tasks))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteRequest {
    #[serde(default)]
    pub task: Option<Task>,
    #[serde(default)]
    pub project_context: Option<String>,
    #[serde(default)]
    pub integrations: Option<Vec<IntegrationTool>>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub api_keys: Option<ApiKeyOverrides>,
}

pub async fn execute_task(
    State(planner): State<Planner>,
    Json(req): Json<ExecuteRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    let Some(task) = req.task else {
        return Err(bad_request("A task is required"));
    };

    let options = GenerationOptions {
        model: req.model,
        api_keys: req.api_keys,
    };
    let result = planner
        .execute_task(
            &task,
            req.project_context.as_deref(),
            req.integrations.as_deref().unwrap_or_default(),
            &options,
        )
        .await
        .map_err(service_error)?;
    Ok(Json(result))
}
