//! Session registry and window layout persistence
//!
//! A `Session` stands in for a running shell: the view layer only needs its
//! identity, running state, attached displays, environment and directories.
//! `SessionManager` owns every session of the application; views reference
//! sessions by id.
//!
//! The persisted format records, per window, the ordered restore ids of its
//! tabs and the 1-based index of the active tab.

mod manager;
mod record;
pub mod restore;
pub mod storage;

pub use manager::SessionManager;
pub use record::Session;

use crate::types::RestoreId;
use serde::{Deserialize, Serialize};

/// Top-level saved state: every session and every window at the time of save
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Timestamp when the state was saved (RFC 3339)
    pub saved_at: String,
    /// Sessions that can be recreated, keyed by restore id
    #[serde(default)]
    pub sessions: Vec<SavedSession>,
    /// Tab layout of each window
    #[serde(default)]
    pub windows: Vec<WindowSessions>,
}

/// A session as written to the restore file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSession {
    pub restore_id: RestoreId,
    /// Profile name; unknown names fall back to the default profile
    pub profile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    #[serde(default)]
    pub title: String,
}

/// Tabs of one window, in tab order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSessions {
    /// Restore ids: tabs of the active container first, then any other sessions
    #[serde(default)]
    pub sessions: Vec<RestoreId>,
    /// 1-based index of the active tab, 0 when none
    #[serde(default)]
    pub active: usize,
}
