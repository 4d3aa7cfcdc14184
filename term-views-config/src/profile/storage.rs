//! Storage utilities for profile persistence
//!
//! Profiles are stored in `~/.config/term-views/profiles.yaml`

use super::{Profile, ProfileManager};
use crate::config::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the default profiles file path
pub fn profiles_path() -> PathBuf {
    Config::config_dir().join("profiles.yaml")
}

/// Load profiles from a specific file
///
/// A missing or empty file yields an empty manager (which still resolves the
/// built-in default profile).
pub fn load_profiles_from(path: &Path) -> Result<ProfileManager> {
    if !path.exists() {
        log::info!("No profiles file found at {:?}, starting with built-in profile", path);
        return Ok(ProfileManager::new());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profiles from {:?}", path))?;

    if contents.trim().is_empty() {
        return Ok(ProfileManager::new());
    }

    let profiles: Vec<Profile> = serde_yaml_ng::from_str(&contents)
        .with_context(|| format!("Failed to parse profiles from {:?}", path))?;

    log::info!("Loaded {} profiles from {:?}", profiles.len(), path);
    Ok(ProfileManager::from_profiles(profiles))
}

/// Save profiles to a specific file
pub fn save_profiles_to(manager: &ProfileManager, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    let contents =
        serde_yaml_ng::to_string(&manager.to_vec()).context("Failed to serialize profiles")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write profiles to {:?}", path))?;

    log::info!("Saved {} profiles to {:?}", manager.len(), path);
    Ok(())
}
