//! Registry of all sessions in the application.

use super::{SavedSession, Session, restore};
use crate::types::{RestoreId, SessionId};
use std::collections::{BTreeMap, HashMap};
use term_views_config::{Profile, ProfileManager};

/// Owns every session and hands out session ids
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: BTreeMap<SessionId, Session>,
    next_id: SessionId,
    /// Restore ids assigned by the last `saved_sessions`
    restore_ids: HashMap<SessionId, RestoreId>,
    /// Sessions recreated by the last `restore_sessions`
    restored: HashMap<RestoreId, SessionId>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Create a session from a profile; the session is not started
    pub fn create_session(&mut self, profile: &Profile) -> SessionId {
        let id = self.next_id.max(1);
        self.next_id = id + 1;

        let mut session = Session::new(id, profile.id, profile.name.clone());
        if let Some(dir) = &profile.working_directory {
            session.set_initial_working_directory(dir.clone());
        }
        self.sessions.insert(id, session);

        log::info!("Created session {} from profile '{}'", id, profile.name);
        id
    }

    pub fn session(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    pub fn session_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.sessions.get_mut(&id)
    }

    /// Profile the session was created from, or the default profile
    pub fn session_profile<'a>(&self, id: SessionId, profiles: &'a ProfileManager) -> &'a Profile {
        self.sessions
            .get(&id)
            .and_then(|s| profiles.get(&s.profile_id()))
            .unwrap_or_else(|| profiles.default_profile())
    }

    /// Close and forget a session
    ///
    /// Returns true only for the call that actually closed it; later calls
    /// for the same id are no-ops.
    pub fn close_session(&mut self, id: SessionId) -> bool {
        match self.sessions.remove(&id) {
            Some(_) => {
                self.restore_ids.remove(&id);
                self.restored.retain(|_, sid| *sid != id);
                log::info!("Closed session {} (remaining: {})", id, self.sessions.len());
                true
            }
            None => false,
        }
    }

    /// Restore id assigned to a session by the last save
    pub fn get_restore_id(&self, id: SessionId) -> Option<RestoreId> {
        self.restore_ids.get(&id).copied()
    }

    /// Session recreated for a restore id by the last restore
    pub fn id_to_session(&self, restore_id: RestoreId) -> Option<SessionId> {
        self.restored
            .get(&restore_id)
            .copied()
            .filter(|id| self.sessions.contains_key(id))
    }

    /// Describe every session for the restore file, assigning restore ids
    pub fn saved_sessions(&mut self, profiles: &ProfileManager) -> Vec<SavedSession> {
        self.restore_ids.clear();
        let mut saved = Vec::with_capacity(self.sessions.len());
        for (n, session) in self.sessions.values().enumerate() {
            let restore_id = n as RestoreId + 1;
            self.restore_ids.insert(session.id(), restore_id);
            saved.push(SavedSession {
                restore_id,
                profile: self.session_profile(session.id(), profiles).name.clone(),
                working_directory: session
                    .current_dir()
                    .or(session.initial_working_directory())
                    .map(str::to_string),
                title: session.title().to_string(),
            });
        }
        saved
    }

    /// Recreate saved sessions; they are not started
    pub fn restore_sessions(&mut self, saved: &[SavedSession], profiles: &ProfileManager) {
        self.restored.clear();
        for entry in saved {
            let profile = profiles.profile_or_default(&entry.profile);
            let id = self.create_session(profile);
            if let Some(session) = self.sessions.get_mut(&id) {
                if entry.working_directory.is_some() {
                    session.set_initial_working_directory(
                        restore::validate_cwd(&entry.working_directory).unwrap_or_default(),
                    );
                }
                if !entry.title.is_empty() {
                    session.set_title(entry.title.clone());
                }
            }
            self.restored.insert(entry.restore_id, id);
        }
        log::info!("Recreated {} saved sessions", saved.len());
    }

    /// All sessions in id order
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.sessions.values()
    }

    /// Ids of sessions with no attached display
    pub fn sessions_without_views(&self) -> Vec<SessionId> {
        self.sessions
            .values()
            .filter(|s| !s.has_views())
            .map(Session::id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_increasing_ids() {
        let profiles = ProfileManager::new();
        let mut manager = SessionManager::new();
        let a = manager.create_session(profiles.default_profile());
        let b = manager.create_session(profiles.default_profile());
        assert_eq!((a, b), (1, 2));
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.session(a).map(|s| s.title()), Some("Default"));
    }

    #[test]
    fn test_close_session_only_once() {
        let profiles = ProfileManager::new();
        let mut manager = SessionManager::new();
        let id = manager.create_session(profiles.default_profile());
        assert!(manager.close_session(id));
        assert!(!manager.close_session(id));
        assert!(manager.session(id).is_none());
    }

    #[test]
    fn test_save_then_restore_ids() {
        let profiles = ProfileManager::from_profiles(vec![Profile::new("Work")]);
        let mut manager = SessionManager::new();
        let a = manager.create_session(profiles.profile_or_default("Work"));
        let b = manager.create_session(profiles.default_profile());
        manager.session_mut(b).unwrap().set_current_dir("/tmp");

        let saved = manager.saved_sessions(&profiles);
        assert_eq!(manager.get_restore_id(a), Some(1));
        assert_eq!(manager.get_restore_id(b), Some(2));
        assert_eq!(saved[1].working_directory.as_deref(), Some("/tmp"));

        let mut fresh = SessionManager::new();
        fresh.restore_sessions(&saved, &profiles);
        let restored = fresh.id_to_session(2).unwrap();
        assert_eq!(
            fresh.session(restored).and_then(|s| s.initial_working_directory()),
            Some("/tmp")
        );
        assert_eq!(fresh.session_profile(restored, &profiles).name, "Work");
        assert!(fresh.id_to_session(3).is_none());

        fresh.close_session(restored);
        assert!(fresh.id_to_session(2).is_none());
    }

    #[test]
    fn test_unknown_profile_restores_with_default() {
        let profiles = ProfileManager::new();
        let saved = vec![SavedSession {
            restore_id: 1,
            profile: "Gone".to_string(),
            working_directory: None,
            title: String::new(),
        }];
        let mut manager = SessionManager::new();
        manager.restore_sessions(&saved, &profiles);
        let id = manager.id_to_session(1).unwrap();
        assert_eq!(manager.session_profile(id, &profiles).name, "Default");
        assert_eq!(manager.sessions_without_views(), vec![id]);
    }
}
