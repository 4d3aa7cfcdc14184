//! Properties displayed on a tab.

use crate::types::SessionId;

/// Title, icon and directory of the session shown in a tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewProperties {
    title: String,
    icon: Option<String>,
    identifier: SessionId,
    current_dir: Option<String>,
}

impl ViewProperties {
    /// Properties for the given session
    pub fn new(identifier: SessionId, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            identifier,
            current_dir: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the title; returns true if it changed
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        let title = title.into();
        if title == self.title {
            return false;
        }
        self.title = title;
        true
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Set the icon; returns true if it changed
    pub fn set_icon(&mut self, icon: Option<String>) -> bool {
        if icon == self.icon {
            return false;
        }
        self.icon = icon;
        true
    }

    /// Session these properties describe
    pub fn identifier(&self) -> SessionId {
        self.identifier
    }

    pub fn set_identifier(&mut self, id: SessionId) {
        self.identifier = id;
    }

    pub fn current_dir(&self) -> Option<&str> {
        self.current_dir.as_deref()
    }

    pub fn set_current_dir(&mut self, dir: Option<String>) {
        self.current_dir = dir;
    }
}
