//! Cross-Platform Path Utilities
//!
//! Functions for resolving the application's data directory.

use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the LaunchQuest directory (~/.launch-quest/)
pub fn launch_quest_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".launch-quest"))
}

/// Get the persisted game-state path (~/.launch-quest/state.json)
pub fn state_path() -> AppResult<PathBuf> {
    Ok(launch_quest_dir()?.join("state.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &PathBuf) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the LaunchQuest directory, creating if it doesn't exist
pub fn ensure_launch_quest_dir() -> AppResult<PathBuf> {
    let path = launch_quest_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_quest_dir() {
        let dir = launch_quest_dir().unwrap();
        assert!(dir.to_string_lossy().contains(".launch-quest"));
    }

    #[test]
    fn test_state_path() {
        let path = state_path().unwrap();
        assert!(path.to_string_lossy().ends_with("state.json"));
    }
}
