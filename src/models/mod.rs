//! Data Models
//!
//! Serde models for the project roadmap tree, the game-state aggregate, and
//! generation reply shapes.

pub mod game;
pub mod project;
pub mod response;

pub use game::{
    default_integrations, AuthType, Currency, GameState, IntegrationPatch, IntegrationTool,
    Settings, SettingsPatch, Skill, TokenRecord, ToolCategory,
};
pub use project::{
    AiStep, ExecutionMode, HumanStep, Level, LevelPatch, Project, Task, TaskPatch,
};
pub use response::{ExecutionResult, PlanResponse};
