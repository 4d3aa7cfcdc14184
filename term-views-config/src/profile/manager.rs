//! Profile collection management.
//!
//! Provides `ProfileManager`, which stores profiles, maintains display order,
//! tracks the default profile and resolves names with a fallback so that a
//! lookup never leaves a caller without a profile.

use std::collections::HashMap;

use super::{Profile, ProfileId};

/// Manages a collection of profiles
#[derive(Debug, Clone)]
pub struct ProfileManager {
    /// All profiles indexed by ID
    profiles: HashMap<ProfileId, Profile>,
    /// Ordered list of profile IDs for display
    order: Vec<ProfileId>,
    /// Explicitly chosen default profile
    default_id: Option<ProfileId>,
    /// Built-in profile used when the collection is empty
    fallback: Profile,
}

impl ProfileManager {
    /// Create a new empty profile manager
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
            order: Vec::new(),
            default_id: None,
            fallback: Profile::default(),
        }
    }

    /// Create a profile manager from a list of profiles
    pub fn from_profiles(profiles: Vec<Profile>) -> Self {
        let mut manager = Self::new();
        for profile in profiles {
            manager.add(profile);
        }
        manager.sort_by_order();
        manager
    }

    /// Add a profile to the manager
    pub fn add(&mut self, profile: Profile) {
        let id = profile.id;
        if !self.order.contains(&id) {
            self.order.push(id);
        }
        self.profiles.insert(id, profile);
    }

    /// Get a profile by ID, including the built-in fallback
    pub fn get(&self, id: &ProfileId) -> Option<&Profile> {
        if *id == self.fallback.id {
            return Some(&self.fallback);
        }
        self.profiles.get(id)
    }

    /// Update a profile (replaces if exists)
    ///
    /// Returns true if a stored profile was replaced.
    pub fn update(&mut self, profile: Profile) -> bool {
        let id = profile.id;
        if let std::collections::hash_map::Entry::Occupied(mut entry) = self.profiles.entry(id) {
            entry.insert(profile);
            return true;
        }
        if id == self.fallback.id {
            self.fallback = profile;
            return true;
        }
        false
    }

    /// Remove a profile by ID
    pub fn remove(&mut self, id: &ProfileId) -> Option<Profile> {
        self.order.retain(|pid| pid != id);
        if self.default_id.as_ref() == Some(id) {
            self.default_id = None;
        }
        self.profiles.remove(id)
    }

    /// Get all profiles in display order
    pub fn profiles_ordered(&self) -> Vec<&Profile> {
        self.order
            .iter()
            .filter_map(|id| self.profiles.get(id))
            .collect()
    }

    /// Get all profiles as a vector (for serialization)
    pub fn to_vec(&self) -> Vec<Profile> {
        self.profiles_ordered().into_iter().cloned().collect()
    }

    /// Get the number of stored profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check if there are no stored profiles
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Find a profile by its exact name
    pub fn find_by_name(&self, name: &str) -> Option<&Profile> {
        self.profiles_ordered()
            .into_iter()
            .find(|p| p.name == name)
            .or_else(|| (self.fallback.name == name).then_some(&self.fallback))
    }

    /// The default profile
    ///
    /// The explicitly chosen default wins, then the first profile in display
    /// order, then the built-in fallback.
    pub fn default_profile(&self) -> &Profile {
        self.default_id
            .and_then(|id| self.profiles.get(&id))
            .or_else(|| self.order.first().and_then(|id| self.profiles.get(id)))
            .unwrap_or(&self.fallback)
    }

    /// Make the profile with the given name the default
    ///
    /// Returns false (and keeps the current default) if no profile has that name.
    pub fn set_default_by_name(&mut self, name: &str) -> bool {
        match self.find_by_name(name).map(|p| p.id) {
            Some(id) => {
                self.default_id = Some(id);
                true
            }
            None => {
                log::warn!("Unknown default profile '{}', keeping current default", name);
                false
            }
        }
    }

    /// Resolve a profile name, falling back to the default profile
    pub fn profile_or_default(&self, name: &str) -> &Profile {
        self.find_by_name(name).unwrap_or_else(|| {
            log::debug!("Profile '{}' not found, using default profile", name);
            self.default_profile()
        })
    }

    /// Names of all selectable profiles in display order
    pub fn available_profile_names(&self) -> Vec<String> {
        if self.order.is_empty() {
            return vec![self.fallback.name.clone()];
        }
        self.profiles_ordered()
            .into_iter()
            .map(|p| p.name.clone())
            .collect()
    }

    /// Sort profiles by their order field
    fn sort_by_order(&mut self) {
        self.order
            .sort_by_key(|id| self.profiles.get(id).map(|p| p.order).unwrap_or(usize::MAX));
    }
}

impl Default for ProfileManager {
    fn default() -> Self {
        Self::new()
    }
}
