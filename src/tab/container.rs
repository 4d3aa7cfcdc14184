//! Tab container: an ordered sequence of tabs with one current tab.

use super::{Tab, ViewProperties};
use crate::pane::PaneTree;
use crate::types::{ContainerId, DisplayId, TabId};
use term_views_config::NavigationVisibility;

/// Direction for moving the current tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
}

/// Holds the tabs of one area of a window
#[derive(Debug, Clone)]
pub struct TabContainer {
    id: ContainerId,
    /// All tabs in this container, in order
    tabs: Vec<Tab>,
    /// Currently active tab ID
    current: Option<TabId>,
    /// Counter for generating unique tab IDs
    next_tab_id: TabId,
    navigation_visibility: NavigationVisibility,
    tab_width_to_text: bool,
}

impl TabContainer {
    /// Create a new empty container
    pub fn new(id: ContainerId) -> Self {
        Self {
            id,
            tabs: Vec::new(),
            current: None,
            next_tab_id: 1,
            navigation_visibility: NavigationVisibility::default(),
            tab_width_to_text: false,
        }
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// Add a tab holding `panes`
    ///
    /// `index` past the end (or `None`) appends. The first tab added to an
    /// empty container becomes current; otherwise the current tab is unchanged.
    pub fn add_view(
        &mut self,
        panes: PaneTree,
        properties: ViewProperties,
        index: Option<usize>,
    ) -> TabId {
        let id = self.next_tab_id;
        self.next_tab_id += 1;

        let index = index.unwrap_or(self.tabs.len()).min(self.tabs.len());
        self.tabs.insert(index, Tab::new(id, panes, properties));
        if self.current.is_none() {
            self.current = Some(id);
        }

        crate::debug_log!(
            "TAB",
            "Container {} added tab {} at index {} (total: {})",
            self.id,
            id,
            index,
            self.tabs.len()
        );
        id
    }

    /// Remove a tab, returning it
    ///
    /// If the current tab is removed, the tab now at the same index (or the
    /// new last tab) becomes current.
    pub fn remove_view(&mut self, id: TabId) -> Option<Tab> {
        let idx = self.index_of(id)?;
        let tab = self.tabs.remove(idx);

        if self.current == Some(id) {
            self.current = if self.tabs.is_empty() {
                None
            } else {
                let new_idx = idx.min(self.tabs.len() - 1);
                Some(self.tabs[new_idx].id)
            };
        }

        crate::debug_log!(
            "TAB",
            "Container {} removed tab {} (index {}, remaining: {})",
            self.id,
            id,
            idx,
            self.tabs.len()
        );
        Some(tab)
    }

    /// Get the current tab
    pub fn current_tab(&self) -> Option<&Tab> {
        self.current.and_then(|id| self.tab(id))
    }

    /// Get the current tab mutably
    pub fn current_tab_mut(&mut self) -> Option<&mut Tab> {
        let id = self.current?;
        self.tab_mut(id)
    }

    pub fn current_tab_id(&self) -> Option<TabId> {
        self.current
    }

    /// Index of the current tab
    pub fn current_index(&self) -> Option<usize> {
        self.current.and_then(|id| self.index_of(id))
    }

    /// Make the tab at `index` current; returns false if out of range
    pub fn set_current_index(&mut self, index: usize) -> bool {
        match self.tabs.get(index) {
            Some(tab) => {
                self.current = Some(tab.id);
                true
            }
            None => false,
        }
    }

    /// Make the tab with `id` current; returns false if unknown
    pub fn set_current_tab(&mut self, id: TabId) -> bool {
        if self.index_of(id).is_some() {
            self.current = Some(id);
            true
        } else {
            false
        }
    }

    /// Switch to the next tab (wraps around)
    pub fn activate_next_view(&mut self) {
        if let Some(idx) = self.current_index() {
            self.set_current_index((idx + 1) % self.tabs.len());
        }
    }

    /// Switch to the previous tab (wraps around)
    pub fn activate_previous_view(&mut self) {
        if let Some(idx) = self.current_index() {
            let prev = if idx == 0 { self.tabs.len() - 1 } else { idx - 1 };
            self.set_current_index(prev);
        }
    }

    /// Switch to the last tab
    pub fn activate_last_view(&mut self) {
        if !self.tabs.is_empty() {
            self.set_current_index(self.tabs.len() - 1);
        }
    }

    /// Move the current tab one position, wrapping at either end
    ///
    /// Returns the new index of the moved tab.
    pub fn move_active_view(&mut self, direction: MoveDirection) -> Option<usize> {
        let current_idx = self.current_index()?;
        let len = self.tabs.len();
        let new_idx = match direction {
            MoveDirection::Left if current_idx == 0 => len - 1,
            MoveDirection::Left => current_idx - 1,
            MoveDirection::Right if current_idx + 1 >= len => 0,
            MoveDirection::Right => current_idx + 1,
        };

        if new_idx != current_idx {
            let tab = self.tabs.remove(current_idx);
            self.tabs.insert(new_idx, tab);
            log::debug!(
                "Moved tab in container {} from index {} to {}",
                self.id,
                current_idx,
                new_idx
            );
        }
        Some(new_idx)
    }

    /// Tab whose pane tree holds `display`
    pub fn tab_of_display(&self, display: DisplayId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.contains_display(display))
    }

    /// Mutable tab whose pane tree holds `display`
    pub fn tab_of_display_mut(&mut self, display: DisplayId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.contains_display(display))
    }

    /// Get a tab by ID
    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// Get a mutable reference to a tab by ID
    pub fn tab_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    /// Position of a tab
    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Get all tabs as a slice
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Get all tabs as mutable slice
    pub fn tabs_mut(&mut self) -> &mut [Tab] {
        &mut self.tabs
    }

    /// Displays of every tab, in tab order
    pub fn displays(&self) -> Vec<DisplayId> {
        self.tabs.iter().flat_map(|t| t.panes.displays()).collect()
    }

    /// Get the number of tabs
    pub fn count(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn navigation_visibility(&self) -> NavigationVisibility {
        self.navigation_visibility
    }

    pub fn set_navigation_visibility(&mut self, visibility: NavigationVisibility) {
        self.navigation_visibility = visibility;
    }

    pub fn tab_width_to_text(&self) -> bool {
        self.tab_width_to_text
    }

    pub fn set_tab_width_to_text(&mut self, enabled: bool) {
        self.tab_width_to_text = enabled;
    }

    /// Whether the tab bar is shown with the current tab count
    pub fn tab_bar_visible(&self) -> bool {
        match self.navigation_visibility {
            NavigationVisibility::AlwaysShow => true,
            NavigationVisibility::AlwaysHide => false,
            NavigationVisibility::ShowWhenNeeded | NavigationVisibility::NotSet => {
                self.tabs.len() > 1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container_with(n: u64) -> TabContainer {
        let mut container = TabContainer::new(1);
        for display in 1..=n {
            container.add_view(
                PaneTree::with_root(display),
                ViewProperties::new(display as i32, format!("tab {display}")),
                None,
            );
        }
        container
    }

    fn titles(container: &TabContainer) -> Vec<&str> {
        container.tabs().iter().map(|t| t.properties.title()).collect()
    }

    #[test]
    fn test_first_tab_becomes_current() {
        let container = container_with(3);
        assert_eq!(container.count(), 3);
        assert_eq!(container.current_index(), Some(0));
    }

    #[test]
    fn test_add_view_at_index() {
        let mut container = container_with(2);
        container.add_view(PaneTree::with_root(9), ViewProperties::new(9, "mid"), Some(1));
        container.add_view(PaneTree::with_root(8), ViewProperties::new(8, "end"), Some(99));
        assert_eq!(titles(&container), vec!["tab 1", "mid", "tab 2", "end"]);
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut container = container_with(3);
        container.set_current_index(2);
        container.activate_next_view();
        assert_eq!(container.current_index(), Some(0));
        container.activate_previous_view();
        assert_eq!(container.current_index(), Some(2));
        container.set_current_index(0);
        container.activate_last_view();
        assert_eq!(container.current_index(), Some(2));
    }

    #[test]
    fn test_navigation_on_single_and_empty() {
        let mut single = container_with(1);
        single.activate_next_view();
        single.activate_previous_view();
        assert_eq!(single.current_index(), Some(0));

        let mut empty = TabContainer::new(2);
        empty.activate_next_view();
        empty.activate_last_view();
        assert_eq!(empty.current_index(), None);
        assert_eq!(empty.move_active_view(MoveDirection::Left), None);
    }

    #[test]
    fn test_move_active_view_wraps() {
        let mut container = container_with(3);
        assert_eq!(container.move_active_view(MoveDirection::Left), Some(2));
        assert_eq!(titles(&container), vec!["tab 2", "tab 3", "tab 1"]);
        assert_eq!(container.current_index(), Some(2));

        assert_eq!(container.move_active_view(MoveDirection::Right), Some(0));
        assert_eq!(titles(&container), vec!["tab 1", "tab 2", "tab 3"]);
    }

    #[test]
    fn test_remove_current_selects_same_index() {
        let mut container = container_with(3);
        container.set_current_index(1);
        let removed = container.current_tab_id().unwrap();
        assert!(container.remove_view(removed).is_some());
        assert_eq!(titles(&container), vec!["tab 1", "tab 3"]);
        assert_eq!(container.current_index(), Some(1));

        let last = container.current_tab_id().unwrap();
        container.remove_view(last);
        assert_eq!(container.current_index(), Some(0));

        let only = container.current_tab_id().unwrap();
        container.remove_view(only);
        assert!(container.is_empty());
        assert_eq!(container.current_tab_id(), None);
        assert!(container.remove_view(only).is_none());
    }

    #[test]
    fn test_tab_of_display() {
        let container = container_with(2);
        assert_eq!(
            container.tab_of_display(2).map(|t| t.properties.title()),
            Some("tab 2")
        );
        assert!(container.tab_of_display(5).is_none());
        assert_eq!(container.displays(), vec![1, 2]);
    }

    #[test]
    fn test_tab_bar_visibility() {
        let mut container = container_with(1);
        assert!(!container.tab_bar_visible());
        container.set_navigation_visibility(NavigationVisibility::AlwaysShow);
        assert!(container.tab_bar_visible());
        container.set_navigation_visibility(NavigationVisibility::AlwaysHide);
        assert!(!container.tab_bar_visible());
    }
}
