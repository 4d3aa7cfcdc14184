//! File I/O for window layout persistence
//!
//! State is stored in `~/.config/term-views/last_session.yaml`

use super::SessionState;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use term_views_config::Config;

/// Get the path to the session state file
pub fn session_path() -> PathBuf {
    Config::session_state_path()
}

/// Save session state to a specific file
pub fn save_session_to(state: &SessionState, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    let contents = serde_yaml_ng::to_string(state).context("Failed to serialize session state")?;

    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write session state to {:?}", path))?;

    log::info!(
        "Saved session state ({} windows, {} sessions) to {:?}",
        state.windows.len(),
        state.sessions.len(),
        path
    );
    Ok(())
}

/// Load session state from a specific file
///
/// Returns `None` if the file doesn't exist or is empty.
/// Returns an error if the file exists but is corrupt.
pub fn load_session_from(path: &Path) -> Result<Option<SessionState>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read session state from {:?}", path))?;

    if contents.trim().is_empty() {
        return Ok(None);
    }

    let state: SessionState = serde_yaml_ng::from_str(&contents)
        .with_context(|| format!("Failed to parse session state from {:?}", path))?;

    log::info!(
        "Loaded session state ({} windows) from {:?}",
        state.windows.len(),
        path
    );
    Ok(Some(state))
}

/// Remove a session state file if present
pub fn clear_session_at(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path)
            .with_context(|| format!("Failed to remove session state file {:?}", path))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SavedSession, WindowSessions};
    use tempfile::tempdir;

    fn sample_state() -> SessionState {
        SessionState {
            saved_at: "2025-01-01T00:00:00Z".to_string(),
            sessions: vec![
                SavedSession {
                    restore_id: 1,
                    profile: "Default".to_string(),
                    working_directory: Some("/home/user/work".to_string()),
                    title: "work".to_string(),
                },
                SavedSession {
                    restore_id: 2,
                    profile: "Logs".to_string(),
                    working_directory: None,
                    title: "logs".to_string(),
                },
            ],
            windows: vec![WindowSessions {
                sessions: vec![2, 1],
                active: 2,
            }],
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp = tempdir().unwrap();
        let result = load_session_from(&temp.path().join("nonexistent.yaml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_empty_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("empty.yaml");
        std::fs::write(&path, "  \n").unwrap();
        assert!(load_session_from(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("corrupt.yaml");
        std::fs::write(&path, "windows: [[[ not yaml").unwrap();
        assert!(load_session_from(&path).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("last_session.yaml");

        let state = sample_state();
        save_session_to(&state, &path).unwrap();
        let loaded = load_session_from(&path).unwrap().unwrap();
        assert_eq!(loaded, state);

        clear_session_at(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_sections_default() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("partial.yaml");
        std::fs::write(&path, "saved_at: now\nwindows:\n  - sessions: [3]\n").unwrap();
        let loaded = load_session_from(&path).unwrap().unwrap();
        assert!(loaded.sessions.is_empty());
        assert_eq!(loaded.windows[0].sessions, vec![3]);
        assert_eq!(loaded.windows[0].active, 0);
    }
}
