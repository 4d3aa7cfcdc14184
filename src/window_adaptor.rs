//! RPC surface of a window
//!
//! Each window is reachable at `/Windows/<id>`, where the id comes from the
//! [`WindowRegistry`] owned by the application root. [`WindowAdaptor`] wraps
//! a [`ViewManager`] with the plain integer and string-list interface RPC
//! callers expect: failures return `-1` or an empty list, never an error.

use crate::actions::ViewAction;
use crate::types::{INVALID_SESSION, ManagerId, SessionId};
use crate::view_manager::ViewManager;
use std::collections::BTreeSet;

/// Object path prefix of window objects
pub const WINDOWS_PATH: &str = "/Windows";

/// Allocates window ids and resolves object paths
#[derive(Debug)]
pub struct WindowRegistry {
    next_id: ManagerId,
    live: BTreeSet<ManagerId>,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            live: BTreeSet::new(),
        }
    }

    /// Hand out the next window id; ids are never reused
    pub fn allocate(&mut self) -> ManagerId {
        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(id);
        log::debug!("Registered window {}", Self::object_path(id));
        id
    }

    /// Forget a closed window
    pub fn release(&mut self, id: ManagerId) -> bool {
        self.live.remove(&id)
    }

    pub fn object_path(id: ManagerId) -> String {
        format!("{}/{}", WINDOWS_PATH, id)
    }

    /// Window registered at `path`
    pub fn lookup(&self, path: &str) -> Option<ManagerId> {
        let id = path
            .strip_prefix(WINDOWS_PATH)?
            .strip_prefix('/')?
            .parse::<ManagerId>()
            .ok()?;
        self.live.contains(&id).then_some(id)
    }
}

/// RPC facade over one window
pub struct WindowAdaptor<'a> {
    manager: &'a mut ViewManager,
}

impl<'a> WindowAdaptor<'a> {
    pub fn new(manager: &'a mut ViewManager) -> Self {
        Self { manager }
    }

    pub fn object_path(&self) -> String {
        self.manager.object_path()
    }

    pub fn new_session(&mut self) -> SessionId {
        self.manager.new_session()
    }

    pub fn new_session_with_profile(&mut self, profile: &str) -> SessionId {
        self.manager.new_session_with_profile(profile)
    }

    pub fn new_session_with_profile_and_directory(
        &mut self,
        profile: &str,
        directory: &str,
    ) -> SessionId {
        self.manager
            .new_session_with_profile_and_directory(profile, directory)
    }

    pub fn session_count(&self) -> i32 {
        i32::try_from(self.manager.session_count()).unwrap_or(i32::MAX)
    }

    /// Session ids as decimal strings
    pub fn session_list(&self) -> Vec<String> {
        self.manager
            .session_list()
            .into_iter()
            .map(|id| id.to_string())
            .collect()
    }

    pub fn current_session(&self) -> SessionId {
        self.manager.current_session()
    }

    /// Returns the session id, or `-1` if it has no view in the active container
    pub fn set_current_session(&mut self, session: SessionId) -> SessionId {
        if self.manager.set_current_session(session) {
            session
        } else {
            INVALID_SESSION
        }
    }

    pub fn default_profile(&self) -> String {
        self.manager.default_profile()
    }

    pub fn profile_list(&self) -> Vec<String> {
        self.manager.profile_list()
    }

    pub fn next_session(&mut self) {
        self.manager.next_session();
    }

    pub fn prev_session(&mut self) {
        self.manager.prev_session();
    }

    pub fn move_session_left(&mut self) {
        self.manager.move_session_left();
    }

    pub fn move_session_right(&mut self) {
        self.manager.move_session_right();
    }

    /// Run a named action such as `next-view` or `focus-pane-left`
    ///
    /// Unknown or disabled actions return false.
    pub fn trigger(&mut self, name: &str) -> bool {
        match name.parse::<ViewAction>() {
            Ok(action) => self.manager.trigger(action),
            Err(e) => {
                log::warn!("{}: {}", self.manager.object_path(), e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_ids_increase_and_are_not_reused() {
        let mut registry = WindowRegistry::new();
        let a = registry.allocate();
        let b = registry.allocate();
        assert_eq!((a, b), (1, 2));
        assert!(registry.release(a));
        assert!(!registry.release(a));
        assert_eq!(registry.allocate(), 3);
        assert_eq!(registry.lookup("/Windows/2"), Some(2));
        assert_eq!(registry.lookup("/Windows/1"), None);
    }

    #[test]
    fn test_lookup_paths() {
        let mut registry = WindowRegistry::new();
        let id = registry.allocate();
        assert_eq!(WindowRegistry::object_path(id), "/Windows/1");
        assert_eq!(registry.lookup("/Windows/1"), Some(1));
        assert_eq!(registry.lookup("/Windows/2"), None);
        assert_eq!(registry.lookup("/Windows/x"), None);
        assert_eq!(registry.lookup("/Sessions/1"), None);
    }
}
