//! Game State Models
//!
//! The aggregate the store owns: projects, gamification progression,
//! integration catalog, settings, and the token accuracy ledger.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::project::Project;

/// An inferred skill accumulating experience from completed tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub xp: u32,
}

/// Integration tool category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolCategory {
    Communication,
    Development,
    #[serde(rename = "Project Management")]
    ProjectManagement,
    Marketing,
    Finance,
}

/// How an integration authenticates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthType {
    ApiKey,
    Oauth2,
    Webhook,
}

/// A third-party integration the user can connect
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationTool {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub connected: bool,
    pub category: ToolCategory,
    pub auth_type: AuthType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<String>>,
}

/// Partial update applied to an integration (shallow merge)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationPatch {
    pub name: Option<String>,
    pub connected: Option<bool>,
    pub description: Option<String>,
    pub capabilities: Option<Vec<String>>,
}

impl IntegrationTool {
    /// Shallow-merge a patch into this integration.
    pub fn apply_patch(&mut self, patch: IntegrationPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(connected) = patch.connected {
            self.connected = connected;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(capabilities) = patch.capabilities {
            self.capabilities = Some(capabilities);
        }
    }
}

/// One estimate-vs-actual precision sample
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    pub date: String,
    pub estimated: u32,
    pub actual: u32,
    pub precision: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_title: Option<String>,
}

/// Display currency for cost estimates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "ARS")]
    Ars,
    #[serde(rename = "USD")]
    Usd,
}

/// User-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub preferred_model: String,
    pub currency: Currency,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preferred_model: launch_quest_llm::DEFAULT_MODEL.to_string(),
            currency: Currency::Ars,
        }
    }
}

/// Partial update applied to settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub preferred_model: Option<String>,
    pub currency: Option<Currency>,
}

/// The aggregate root owned by the store.
///
/// `current_project` is a denormalized snapshot of the selected project;
/// task-level transitions operate on it, while the projects list tracks
/// creation, deletion, and cloning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub projects: Vec<Project>,
    pub current_project_id: Option<String>,
    pub current_project: Option<Project>,
    #[serde(rename = "userXP")]
    pub user_xp: u32,
    pub user_level: u32,
    pub skills: Vec<Skill>,
    pub api_keys: HashMap<String, String>,
    pub integrations: Vec<IntegrationTool>,
    pub settings: Settings,
    pub token_history: Vec<TokenRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            current_project_id: None,
            current_project: None,
            user_xp: 0,
            user_level: 1,
            skills: Vec::new(),
            api_keys: HashMap::new(),
            integrations: default_integrations(),
            settings: Settings::default(),
            token_history: Vec::new(),
        }
    }
}

/// The seeded integration catalog new state starts with.
pub fn default_integrations() -> Vec<IntegrationTool> {
    vec![
        IntegrationTool {
            id: "slack".to_string(),
            name: "Slack".to_string(),
            provider: "Slack".to_string(),
            connected: false,
            category: ToolCategory::Communication,
            auth_type: AuthType::Oauth2,
            description: Some("Send notifications and reports to channels.".to_string()),
            capabilities: Some(vec!["Notifications".to_string(), "Reports".to_string()]),
        },
        IntegrationTool {
            id: "github".to_string(),
            name: "GitHub".to_string(),
            provider: "GitHub".to_string(),
            connected: false,
            category: ToolCategory::Development,
            auth_type: AuthType::Oauth2,
            description: Some("Create repositories and manage issues.".to_string()),
            capabilities: Some(vec![
                "Repo Management".to_string(),
                "Issue Tracking".to_string(),
            ]),
        },
        IntegrationTool {
            id: "linear".to_string(),
            name: "Linear".to_string(),
            provider: "Linear".to_string(),
            connected: false,
            category: ToolCategory::ProjectManagement,
            auth_type: AuthType::Oauth2,
            description: Some("Sync tasks and sprints.".to_string()),
            capabilities: Some(vec![
                "Task Sync".to_string(),
                "Sprint Management".to_string(),
            ]),
        },
        IntegrationTool {
            id: "stripe".to_string(),
            name: "Stripe".to_string(),
            provider: "Stripe".to_string(),
            connected: false,
            category: ToolCategory::Finance,
            auth_type: AuthType::ApiKey,
            description: Some("Monitor revenue and payments.".to_string()),
            capabilities: Some(vec![
                "Revenue Tracking".to_string(),
                "Payment Alerts".to_string(),
            ]),
        },
        IntegrationTool {
            id: "mailchimp".to_string(),
            name: "Mailchimp".to_string(),
            provider: "Mailchimp".to_string(),
            connected: false,
            category: ToolCategory::Marketing,
            auth_type: AuthType::ApiKey,
            description: Some("Automate email campaigns.".to_string()),
            capabilities: Some(vec![
                "Email Automation".to_string(),
                "Audience Sync".to_string(),
            ]),
        },
    ]
}
