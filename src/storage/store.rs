//! Game State Persistence
//!
//! One JSON blob holds the full serialized aggregate under a fixed path.
//! There is no schema versioning or migration; a missing or unreadable file
//! falls back to the default state.

use std::fs;
use std::path::PathBuf;

use crate::error::AppResult;
use crate::models::GameState;
use crate::storage::paths::{ensure_launch_quest_dir, state_path};

/// Persistence collaborator for the game-state aggregate.
///
/// A store without a path is in-memory only (used in tests and by the
/// stateless API surface); saves become no-ops.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    path: Option<PathBuf>,
}

impl StateStore {
    /// Create a store backed by the default on-disk location
    pub fn open_default() -> AppResult<Self> {
        ensure_launch_quest_dir()?;
        Ok(Self {
            path: Some(state_path()?),
        })
    }

    /// Create a store backed by an explicit file path
    pub fn at_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Create a store that never touches disk
    pub fn in_memory() -> Self {
        Self { path: None }
    }

    /// Load the persisted aggregate, defaulting when the file is absent.
    pub fn load(&self) -> AppResult<GameState> {
        let Some(path) = &self.path else {
            return Ok(GameState::default());
        };
        if !path.exists() {
            return Ok(GameState::default());
        }
        let content = fs::read_to_string(path)?;
        let state: GameState = serde_json::from_str(&content)?;
        Ok(state)
    }

    /// Persist the full aggregate.
    pub fn save(&self, state: &GameState) -> AppResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let content = serde_json::to_string_pretty(state)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check whether the backing file is reachable
    pub fn is_healthy(&self) -> bool {
        match &self.path {
            Some(path) => path.parent().map(|p| p.exists()).unwrap_or(false),
            None => true,
        }
    }
}
