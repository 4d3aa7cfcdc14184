//! Tab and container switching within a window.

use super::ViewManager;
use crate::tab::{MoveDirection, TabContainer};

impl ViewManager {
    /// Run `f` on the active container, then plug its current view
    fn with_active_container<R>(&mut self, f: impl FnOnce(&mut TabContainer) -> R) -> Option<R> {
        let result = f(self.splitter.active_container_mut()?);
        if let Some(display) = self.active_view() {
            self.controller_changed(display);
        }
        Some(result)
    }

    /// Make the tab at `index` of the active container current
    pub fn switch_to_view(&mut self, index: usize) -> bool {
        self.with_active_container(|c| c.set_current_index(index))
            .unwrap_or(false)
    }

    pub fn next_view(&mut self) {
        self.with_active_container(TabContainer::activate_next_view);
    }

    pub fn previous_view(&mut self) {
        self.with_active_container(TabContainer::activate_previous_view);
    }

    /// Jump to the last tab of the active container
    pub fn last_view(&mut self) {
        self.with_active_container(TabContainer::activate_last_view);
    }

    /// Activate the next container, wrapping around
    pub fn next_container(&mut self) {
        if self.splitter.activate_next_container().is_some()
            && let Some(display) = self.active_view()
        {
            self.controller_changed(display);
        }
        self.update_detach_view_state();
    }

    pub fn move_active_view_left(&mut self) -> Option<usize> {
        self.move_active_view(MoveDirection::Left)
    }

    pub fn move_active_view_right(&mut self) -> Option<usize> {
        self.move_active_view(MoveDirection::Right)
    }

    fn move_active_view(&mut self, direction: MoveDirection) -> Option<usize> {
        let moved = self
            .with_active_container(|c| c.move_active_view(direction))
            .flatten();
        if moved.is_some()
            && let Some(container) = self.splitter.active_container_id()
        {
            self.container_views_changed(container);
        }
        moved
    }
}
