//! A single session as seen by the view layer.

use crate::types::{DisplayId, SessionId};
use std::collections::BTreeSet;
use term_views_config::ProfileId;

/// Default terminal size in (columns, lines)
const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// A shell session and the displays attached to it
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    profile_id: ProfileId,
    title: String,
    running: bool,
    finished: bool,
    views: BTreeSet<DisplayId>,
    environment: Vec<String>,
    initial_working_directory: Option<String>,
    current_dir: Option<String>,
    dark_background: bool,
    preferred_size: (u16, u16),
}

impl Session {
    pub(crate) fn new(id: SessionId, profile_id: ProfileId, title: impl Into<String>) -> Self {
        Self {
            id,
            profile_id,
            title: title.into(),
            running: false,
            finished: false,
            views: BTreeSet::new(),
            environment: Vec::new(),
            initial_working_directory: None,
            current_dir: None,
            dark_background: false,
            preferred_size: DEFAULT_SIZE,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn profile_id(&self) -> ProfileId {
        self.profile_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Start the session; a no-op if it already runs or has finished
    pub fn run(&mut self) {
        if self.running || self.finished {
            return;
        }
        self.running = true;
        if self.current_dir.is_none() {
            self.current_dir = self.initial_working_directory.clone();
        }
        log::debug!("Session {} started", self.id);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Mark the session's process as exited
    pub fn set_finished(&mut self) {
        self.running = false;
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Attach a display; returns false if it was already attached
    pub fn add_view(&mut self, display: DisplayId) -> bool {
        self.views.insert(display)
    }

    /// Detach a display; returns false if it was not attached
    pub fn remove_view(&mut self, display: DisplayId) -> bool {
        self.views.remove(&display)
    }

    /// Attached displays in id order
    pub fn views(&self) -> Vec<DisplayId> {
        self.views.iter().copied().collect()
    }

    pub fn has_views(&self) -> bool {
        !self.views.is_empty()
    }

    /// Add a `NAME=value` entry to the process environment
    pub fn add_environment_entry(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        let name = entry.split('=').next().unwrap_or_default().to_string();
        self.environment
            .retain(|existing| existing.split('=').next() != Some(name.as_str()));
        self.environment.push(entry);
    }

    pub fn environment(&self) -> &[String] {
        &self.environment
    }

    pub fn set_initial_working_directory(&mut self, dir: impl Into<String>) {
        self.initial_working_directory = Some(dir.into());
    }

    pub fn initial_working_directory(&self) -> Option<&str> {
        self.initial_working_directory.as_deref()
    }

    /// Directory the shell is currently in
    pub fn current_dir(&self) -> Option<&str> {
        self.current_dir.as_deref()
    }

    /// Record a directory change reported by the shell
    pub fn set_current_dir(&mut self, dir: impl Into<String>) {
        self.current_dir = Some(dir.into());
    }

    pub fn set_dark_background(&mut self, dark: bool) {
        self.dark_background = dark;
    }

    pub fn has_dark_background(&self) -> bool {
        self.dark_background
    }

    pub fn preferred_size(&self) -> (u16, u16) {
        self.preferred_size
    }

    pub fn set_preferred_size(&mut self, columns: u16, lines: u16) {
        self.preferred_size = (columns, lines);
    }
}
