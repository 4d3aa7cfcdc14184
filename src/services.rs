//! Application-wide registries shared by every window.

use crate::session::SessionManager;
use crate::types::DisplayId;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use term_views_config::{ColorSchemeManager, ProfileManager};

/// Handles to the session registry, profile and color scheme managers
///
/// Cloning is cheap; every clone refers to the same registries.
#[derive(Debug, Clone)]
pub struct Services {
    pub sessions: Arc<Mutex<SessionManager>>,
    pub profiles: Arc<RwLock<ProfileManager>>,
    pub color_schemes: Arc<RwLock<ColorSchemeManager>>,
    next_display_id: Arc<AtomicU64>,
}

impl Default for Services {
    fn default() -> Self {
        Self::new(ProfileManager::new(), ColorSchemeManager::new())
    }
}

impl Services {
    pub fn new(profiles: ProfileManager, color_schemes: ColorSchemeManager) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(SessionManager::new())),
            profiles: Arc::new(RwLock::new(profiles)),
            color_schemes: Arc::new(RwLock::new(color_schemes)),
            next_display_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Allocate a display id unique across all windows
    pub fn next_display_id(&self) -> DisplayId {
        self.next_display_id.fetch_add(1, Ordering::Relaxed)
    }
}
