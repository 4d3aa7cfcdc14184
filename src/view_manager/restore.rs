//! Saving and restoring the sessions shown in a window.

use super::{ViewManager, WINDOW_ENV_VAR};
use crate::session::WindowSessions;
use crate::types::{DisplayId, RestoreId, SessionId};
use std::collections::HashSet;

impl ViewManager {
    /// Describe this window for the restore file
    ///
    /// Tabs of the active container come first, in order, one restore id per
    /// tab (the session of its first pane); `active` is the 1-based position
    /// of the current tab. Every other session shown in the window follows.
    /// Sessions without a restore id are skipped, so the registry must have
    /// assigned ids with `saved_sessions` beforehand.
    pub fn save_sessions(&self) -> WindowSessions {
        let sessions = self.services.sessions.lock();
        let mut ids: Vec<RestoreId> = Vec::new();
        let mut seen: HashSet<SessionId> = HashSet::new();
        let mut active = 0;

        let Some(container) = self.splitter.active_container() else {
            return WindowSessions::default();
        };
        let current = container.current_tab_id();
        for tab in container.tabs() {
            let Some(session) = tab.panes.displays().first().and_then(|d| self.session_of(*d))
            else {
                continue;
            };
            let Some(restore_id) = sessions.get_restore_id(session) else {
                log::warn!("Session {} has no restore id, not saving it", session);
                continue;
            };
            ids.push(restore_id);
            seen.insert(session);
            if current == Some(tab.id) {
                active = ids.len();
            }
        }

        for session in self.session_map.values() {
            if seen.insert(*session)
                && let Some(restore_id) = sessions.get_restore_id(*session)
            {
                ids.push(restore_id);
            }
        }

        WindowSessions {
            sessions: ids,
            active,
        }
    }

    /// Recreate the tabs described by `state`
    ///
    /// Every restore id must resolve to a session recreated by the registry;
    /// if any does not, or the list is empty, the whole set is discarded and
    /// a single default-profile session is started instead. Returns the
    /// sessions now shown by this window.
    pub fn restore_sessions(&mut self, state: &WindowSessions) -> Vec<SessionId> {
        let resolved: Option<Vec<SessionId>> = {
            let sessions = self.services.sessions.lock();
            state
                .sessions
                .iter()
                .map(|id| {
                    let session = sessions.id_to_session(*id);
                    if session.is_none() {
                        log::warn!("Unable to load session with restore id {}", id);
                    }
                    session
                })
                .collect()
        };

        let restored = match resolved {
            Some(list) if !list.is_empty() => list,
            _ => {
                log::warn!(
                    "Window {}: saved sessions unusable, starting a default session",
                    self.id
                );
                let session = self.create_default_session();
                self.create_view(session);
                self.run_session(session);
                return vec![session];
            }
        };

        let mut focus: Option<DisplayId> = None;
        for (n, session) in restored.iter().enumerate() {
            let displays = self.create_view(*session);
            self.run_session(*session);
            if n + 1 == state.active {
                let active = self.splitter.active_container_id();
                focus = displays
                    .into_iter()
                    .find(|d| self.splitter.container_of_display(*d) == active);
            }
        }
        if let Some(display) = focus {
            self.controller_changed(display);
        }
        log::info!("Window {} restored {} sessions", self.id, restored.len());
        restored
    }

    /// Create a session from the default profile, tagged with this window
    pub(crate) fn create_default_session(&mut self) -> SessionId {
        let profiles = self.services.profiles.read();
        let mut sessions = self.services.sessions.lock();
        let id = sessions.create_session(profiles.default_profile());
        if let Some(s) = sessions.session_mut(id) {
            s.add_environment_entry(format!("{}={}", WINDOW_ENV_VAR, self.object_path()));
        }
        id
    }

    /// Start a session unless it is already running
    pub(crate) fn run_session(&self, session: SessionId) {
        if let Some(s) = self.services.sessions.lock().session_mut(session)
            && !s.is_running()
        {
            s.run();
        }
    }
}
