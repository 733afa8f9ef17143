//! Project Models
//!
//! The roadmap tree: a project owns ordered levels, a level owns ordered
//! tasks, and a task may recursively own sub-tasks to arbitrary depth.
//! Field names serialize in the camelCase wire/persistence format.

use serde::{Deserialize, Serialize};

/// Who executes a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    Ai,
    Human,
    Hybrid,
}

/// One generated step an AI agent would run for a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiStep {
    pub tool: String,
    pub detail: String,
    pub prompt: String,
}

/// One human checklist step for a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HumanStep {
    pub title: String,
    pub detail: String,
    pub checklist: bool,
}

/// A roadmap task.
///
/// Task ids follow a dotted convention (`"2.3"`) at the top level and
/// `"sub-N"` one layer down; uniqueness is only guaranteed within a sibling
/// set. A task with `sub_tasks` defers its leaf behavior to its children.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub detail: String,
    pub ai_type: ExecutionMode,
    pub estimated_tokens: u32,
    #[serde(rename = "estimatedCostAI")]
    pub estimated_cost_ai: f64,
    #[serde(rename = "estimatedTimeAI")]
    pub estimated_time_ai: String,
    pub estimated_time_human: String,
    /// Always zero in generated output
    pub cost_human: f64,
    pub xp: u32,
    /// Generated output omits this; it defaults to false on deserialize.
    #[serde(default)]
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_steps: Option<Vec<AiStep>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_steps: Option<Vec<HumanStep>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_tasks: Option<Vec<Task>>,
}

/// Partial update applied to a task (shallow merge)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    pub title: Option<String>,
    pub detail: Option<String>,
    pub ai_type: Option<ExecutionMode>,
    pub estimated_tokens: Option<u32>,
    pub xp: Option<u32>,
    pub completed: Option<bool>,
    pub actual_tokens: Option<u32>,
}

impl Task {
    /// Shallow-merge a patch into this task.
    pub fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(detail) = patch.detail {
            self.detail = detail;
        }
        if let Some(ai_type) = patch.ai_type {
            self.ai_type = ai_type;
        }
        if let Some(estimated_tokens) = patch.estimated_tokens {
            self.estimated_tokens = estimated_tokens;
        }
        if let Some(xp) = patch.xp {
            self.xp = xp;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(actual_tokens) = patch.actual_tokens {
            self.actual_tokens = Some(actual_tokens);
        }
    }
}

/// A roadmap level: numeric 1-based id, order-significant within a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub xp: u32,
    pub tasks: Vec<Task>,
}

/// Partial update applied to a level (shallow merge)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LevelPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub xp: Option<u32>,
}

impl Level {
    /// Shallow-merge a patch into this level.
    pub fn apply_patch(&mut self, patch: LevelPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(xp) = patch.xp {
            self.xp = xp;
        }
    }
}

/// A project roadmap.
///
/// Generated plans arrive without an id or creation timestamp; both default
/// to empty and are filled before the project reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub levels: Vec<Level>,
    #[serde(default)]
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<super::game::Skill>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<super::game::IntegrationTool>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task_json() -> &'static str {
        r#"{
            "id": "1.1",
            "title": "Define MVP scope",
            "detail": "Write down the three core flows.",
            "aiType": "hybrid",
            "estimatedTokens": 2000,
            "estimatedCostAI": 120.0,
            "estimatedTimeAI": "5m",
            "estimatedTimeHuman": "1h",
            "costHuman": 0,
            "xp": 100
        }"#
    }

    #[test]
    fn test_generated_task_defaults_completed_to_false() {
        let task: Task = serde_json::from_str(sample_task_json()).unwrap();
        assert!(!task.completed);
        assert!(task.sub_tasks.is_none());
        assert_eq!(task.ai_type, ExecutionMode::Hybrid);
    }

    #[test]
    fn test_task_wire_field_names() {
        let task: Task = serde_json::from_str(sample_task_json()).unwrap();
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["estimatedCostAI"], 120.0);
        assert_eq!(json["estimatedTimeAI"], "5m");
        assert_eq!(json["aiType"], "hybrid");
    }

    #[test]
    fn test_task_patch_is_shallow() {
        let mut task: Task = serde_json::from_str(sample_task_json()).unwrap();
        task.apply_patch(TaskPatch {
            title: Some("Define scope".to_string()),
            ..Default::default()
        });
        assert_eq!(task.title, "Define scope");
        assert_eq!(task.detail, "Write down the three core flows.");
        assert_eq!(task.xp, 100);
    }

    #[test]
    fn test_nested_subtasks_deserialize_recursively() {
        let json = format!(
            r#"{{
                "id": "2.3", "title": "t", "detail": "d", "aiType": "ai",
                "estimatedTokens": 1000, "estimatedCostAI": 50.0,
                "estimatedTimeAI": "5m", "estimatedTimeHuman": "0m",
                "costHuman": 0, "xp": 50,
                "subTasks": [{}]
            }}"#,
            sample_task_json()
        );
        let task: Task = serde_json::from_str(&json).unwrap();
        let subs = task.sub_tasks.unwrap();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].id, "1.1");
    }

    #[test]
    fn test_generated_project_defaults_id_and_timestamp() {
        let project: Project = serde_json::from_str(
            r#"{"name":"Bakery","description":"An app","levels":[]}"#,
        )
        .unwrap();
        assert!(project.id.is_empty());
        assert!(project.created_at.is_empty());
        assert!(project.context.is_none());
    }
}
