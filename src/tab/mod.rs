//! Tabbed containers for pane trees
//!
//! - `Tab`: one tab entry, a pane tree plus its `ViewProperties`
//! - `TabContainer`: ordered tabs with exactly one current tab
//! - `ViewProperties`: title, icon and directory shown on the tab

mod container;
mod properties;

pub use container::{MoveDirection, TabContainer};
pub use properties::ViewProperties;

use crate::pane::PaneTree;
use crate::types::{DisplayId, TabId};

/// A single tab: a pane tree and the properties shown on its tab
#[derive(Debug, Clone)]
pub struct Tab {
    /// Unique identifier within the owning container
    pub id: TabId,
    /// Pane layout of this tab
    pub panes: PaneTree,
    /// Title, icon and directory of the focused session
    pub properties: ViewProperties,
}

impl Tab {
    pub fn new(id: TabId, panes: PaneTree, properties: ViewProperties) -> Self {
        Self {
            id,
            panes,
            properties,
        }
    }

    /// Check if `display` is one of this tab's panes
    pub fn contains_display(&self, display: DisplayId) -> bool {
        self.panes.contains(display)
    }

    /// Display that has focus within the tab
    pub fn focused_display(&self) -> Option<DisplayId> {
        self.panes.focused_display()
    }
}
