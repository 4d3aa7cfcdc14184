//! Helpers for restoring session state

use std::path::Path;

/// Validate a working directory path, falling back to $HOME if invalid
pub fn validate_cwd(cwd: &Option<String>) -> Option<String> {
    if let Some(dir) = cwd {
        if Path::new(dir).is_dir() {
            return Some(dir.clone());
        }
        log::warn!(
            "Session restore: directory '{}' no longer exists, falling back to home",
            dir
        );
    }
    dirs::home_dir().map(|p| p.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_cwd_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = Some(dir.path().to_string_lossy().to_string());
        assert_eq!(validate_cwd(&cwd), cwd);
    }

    #[test]
    fn test_validate_cwd_missing_dir_falls_back_to_home() {
        let cwd = Some("/nonexistent/path/that/does/not/exist".to_string());
        let home = dirs::home_dir().map(|p| p.to_string_lossy().to_string());
        assert_eq!(validate_cwd(&cwd), home);
    }

    #[test]
    fn test_validate_cwd_none_falls_back_to_home() {
        let home = dirs::home_dir().map(|p| p.to_string_lossy().to_string());
        assert_eq!(validate_cwd(&None), home);
    }
}
