//! LaunchQuest
//!
//! Turns a free-text project idea into a hierarchical, gamified execution
//! roadmap. Three pieces: a provider-routed generation layer (the
//! `launch-quest-llm` crate), a planning service that templates and parses
//! the three generation operations, and a project-state engine that owns
//! the roadmap tree, experience, skills, integrations, and the token
//! accuracy ledger.

pub mod api;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
