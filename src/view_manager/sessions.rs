//! Session accessors offered to RPC callers.

use super::{ViewManager, WINDOW_ENV_VAR};
use crate::types::{DisplayId, INVALID_SESSION, SessionId};
use std::collections::BTreeSet;

impl ViewManager {
    /// Number of distinct sessions shown in this window
    pub fn session_count(&self) -> usize {
        self.session_map.values().collect::<BTreeSet<_>>().len()
    }

    /// Distinct session ids shown in this window, ascending
    pub fn session_list(&self) -> Vec<SessionId> {
        self.session_map
            .values()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Session of the focused display, or `INVALID_SESSION`
    pub fn current_session(&self) -> SessionId {
        self.active_view()
            .and_then(|display| self.session_of(display))
            .unwrap_or(INVALID_SESSION)
    }

    /// Bring a view of `session` in the active container to the front
    pub fn set_current_session(&mut self, session: SessionId) -> bool {
        let Some(container) = self.splitter.active_container() else {
            return false;
        };
        let target: Option<DisplayId> = container
            .displays()
            .into_iter()
            .find(|d| self.session_of(*d) == Some(session));
        match target {
            Some(display) => {
                self.controller_changed(display);
                true
            }
            None => false,
        }
    }

    /// Start a default-profile session in a new tab
    pub fn new_session(&mut self) -> SessionId {
        self.start_session(None, None)
    }

    /// Start a session from the named profile (default profile if unknown)
    pub fn new_session_with_profile(&mut self, profile: &str) -> SessionId {
        self.start_session(Some(profile), None)
    }

    /// Start a session from the named profile in `directory`
    pub fn new_session_with_profile_and_directory(
        &mut self,
        profile: &str,
        directory: &str,
    ) -> SessionId {
        self.start_session(Some(profile), Some(directory))
    }

    fn start_session(&mut self, profile: Option<&str>, directory: Option<&str>) -> SessionId {
        let session = {
            let profiles = self.services.profiles.read();
            let profile = match profile {
                Some(name) => profiles.profile_or_default(name),
                None => profiles.default_profile(),
            };
            let mut sessions = self.services.sessions.lock();
            let id = sessions.create_session(profile);
            if let Some(s) = sessions.session_mut(id) {
                if let Some(dir) = directory {
                    s.set_initial_working_directory(dir);
                }
                s.add_environment_entry(format!("{}={}", WINDOW_ENV_VAR, self.object_path()));
            }
            id
        };

        if self.create_view(session).is_empty() {
            self.services.sessions.lock().close_session(session);
            return INVALID_SESSION;
        }
        self.run_session(session);
        session
    }

    /// Name of the default profile
    pub fn default_profile(&self) -> String {
        self.services.profiles.read().default_profile().name.clone()
    }

    /// Names of all selectable profiles
    pub fn profile_list(&self) -> Vec<String> {
        self.services.profiles.read().available_profile_names()
    }

    pub fn next_session(&mut self) {
        self.next_view();
    }

    pub fn prev_session(&mut self) {
        self.previous_view();
    }

    pub fn move_session_left(&mut self) {
        self.move_active_view_left();
    }

    pub fn move_session_right(&mut self) {
        self.move_active_view_right();
    }
}
