//! Container splitting and pane splitting.

use super::{ViewManager, WINDOW_ENV_VAR};
use crate::events::ViewEvent;
use crate::pane::{NavigationDirection, SplitDirection};
use crate::types::{ContainerId, DisplayId, SessionId};
use std::collections::HashMap;

/// Percentage a container grows or shrinks per step
const CONTAINER_RESIZE_STEP: i32 = 10;

/// Split ratio change per pane resize step
const PANE_RESIZE_STEP: f32 = 0.05;

impl ViewManager {
    /// Split the window: a new container repeats every tab of the active one
    ///
    /// Each tab's pane tree is cloned with fresh displays for the same
    /// sessions. The new container becomes active. Returns its id, or `None`
    /// when there is nothing to split.
    pub fn split_view(&mut self, orientation: SplitDirection) -> Option<ContainerId> {
        let Some(source) = self.splitter.active_container() else {
            log::warn!("Window {} has no container to split", self.id);
            return None;
        };
        if source.is_empty() {
            log::debug!("Window {}: active container is empty, not splitting", self.id);
            return None;
        }
        let tabs: Vec<_> = source
            .tabs()
            .iter()
            .map(|tab| (tab.panes.clone(), tab.properties.clone()))
            .collect();
        let current = source.current_index();

        let sources: Vec<DisplayId> = tabs.iter().flat_map(|(panes, _)| panes.displays()).collect();
        if let Some(orphan) = sources.iter().find(|d| !self.session_map.contains_key(*d)) {
            log::warn!("Display {} has no session, not splitting", orphan);
            return None;
        }

        let mut container = self.create_container();
        for (panes, properties) in tabs {
            let mut clones: HashMap<DisplayId, DisplayId> = HashMap::new();
            for display in panes.displays() {
                let Some(session) = self.session_of(display) else {
                    continue;
                };
                if let Some(clone) = self.create_and_setup_terminal_display(session) {
                    clones.insert(display, clone);
                }
            }
            let cloned = panes.clone_with(|d| clones.get(&d).copied().unwrap_or(d));
            container.add_view(cloned, properties, None);
        }
        if let Some(index) = current {
            container.set_current_index(index);
        }

        let id = container.id();
        self.splitter.add_container(container, orientation);
        let split = self.splitter.count() > 1;
        self.emit(ViewEvent::SplitViewToggled(split));
        log::info!(
            "Window {} split {:?} into {} containers",
            self.id,
            orientation,
            self.splitter.count()
        );

        if let Some(display) = self.active_view() {
            self.controller_changed(display);
        }
        self.update_detach_view_state();
        self.container_views_changed(id);
        Some(id)
    }

    /// Split into containers side by side
    pub fn split_left_right(&mut self) -> Option<ContainerId> {
        self.split_view(SplitDirection::Vertical)
    }

    /// Split into stacked containers
    pub fn split_top_bottom(&mut self) -> Option<ContainerId> {
        self.split_view(SplitDirection::Horizontal)
    }

    /// Remove a container and its views
    ///
    /// Only when empty-container reclamation is enabled and more than one
    /// container exists. Sessions that lose their last view are closed.
    pub fn remove_container(&mut self, container: ContainerId) -> bool {
        if !self.reclaim_empty_containers {
            log::debug!(
                "Window {}: container removal disabled, keeping container {}",
                self.id,
                container
            );
            return false;
        }
        let Some(removed) = self.splitter.remove_container(container) else {
            return false;
        };

        for display in removed.displays() {
            self.view_destroyed(display);
        }
        let split = self.splitter.count() > 1;
        self.emit(ViewEvent::SplitViewToggled(split));

        self.refocus_active_view();
        self.update_detach_view_state();
        if let Some(active) = self.splitter.active_container_id() {
            self.container_views_changed(active);
        }
        true
    }

    /// Close the active container and move on to the next one
    pub fn close_active_container(&mut self) {
        if self.splitter.count() <= 1 {
            return;
        }
        let Some(active) = self.splitter.active_container_id() else {
            return;
        };
        // removal already activates the following container
        if !self.remove_container(active) {
            self.next_container();
        }
    }

    /// Remove every container except the active one
    pub fn close_other_containers(&mut self) {
        let active = self.splitter.active_container_id();
        for container in self.splitter.container_ids() {
            if Some(container) != active {
                self.remove_container(container);
            }
        }
    }

    pub fn expand_active_container(&mut self) -> bool {
        self.resize_active_container(CONTAINER_RESIZE_STEP)
    }

    pub fn shrink_active_container(&mut self) -> bool {
        self.resize_active_container(-CONTAINER_RESIZE_STEP)
    }

    fn resize_active_container(&mut self, percent: i32) -> bool {
        match self.splitter.active_container_id() {
            Some(id) => self.splitter.adjust_container_size(id, percent),
            None => false,
        }
    }

    /// Split the focused pane of the current tab with a new default-profile session
    ///
    /// The session starts in the plugged session's directory when the profile
    /// asks for it. Returns the new session id.
    pub fn create_multi_terminal_view(&mut self, direction: SplitDirection) -> Option<SessionId> {
        let Some(focused) = self.active_view() else {
            log::warn!("Window {} has no pane to split", self.id);
            return None;
        };

        let current_dir = self
            .active_view_controller()
            .and_then(|display| self.session_of(display))
            .and_then(|session| {
                let sessions = self.services.sessions.lock();
                sessions
                    .session(session)
                    .and_then(|s| s.current_dir().map(str::to_string))
            });

        let session = {
            let profiles = self.services.profiles.read();
            let profile = profiles.default_profile();
            let mut sessions = self.services.sessions.lock();
            let id = sessions.create_session(profile);
            if let Some(s) = sessions.session_mut(id) {
                if let Some(dir) = current_dir.filter(|d| !d.is_empty())
                    && profile.start_in_current_session_dir
                {
                    s.set_initial_working_directory(dir);
                }
                s.add_environment_entry(format!("{}={}", WINDOW_ENV_VAR, self.object_path()));
            }
            id
        };

        let Some(display) = self.create_and_setup_terminal_display(session) else {
            self.services.sessions.lock().close_session(session);
            return None;
        };
        let container = self.splitter.active_container_id();
        if let Some(tab) = self
            .splitter
            .active_container_mut()
            .and_then(|c| c.current_tab_mut())
        {
            tab.panes.split(focused, display, direction);
        }
        if let Some(s) = self.services.sessions.lock().session_mut(session) {
            s.run();
        }

        self.controller_changed(display);
        self.update_detach_view_state();
        if let Some(container) = container {
            self.container_views_changed(container);
        }
        Some(session)
    }

    /// Split the focused pane into panes side by side
    pub fn multi_terminal_vertical(&mut self) -> Option<SessionId> {
        self.create_multi_terminal_view(SplitDirection::Vertical)
    }

    /// Split the focused pane into stacked panes
    pub fn multi_terminal_horizontal(&mut self) -> Option<SessionId> {
        self.create_multi_terminal_view(SplitDirection::Horizontal)
    }

    /// Close the focused pane of the current tab
    pub fn multi_terminal_close(&mut self) -> bool {
        match self.active_view() {
            Some(display) => self.close_view(display),
            None => false,
        }
    }

    /// Focus the nearest pane in `direction` within the current tab
    pub fn move_pane_focus(&mut self, direction: NavigationDirection) -> Option<DisplayId> {
        let target = self
            .splitter
            .active_container_mut()
            .and_then(|c| c.current_tab_mut())
            .and_then(|tab| tab.panes.navigate(direction))?;
        self.controller_changed(target);
        Some(target)
    }

    /// Grow (right/down) or shrink (left/up) the focused pane of the current tab
    ///
    /// Returns false when the pane is not part of a split.
    pub fn resize_active_pane(&mut self, direction: NavigationDirection) -> bool {
        let delta = match direction {
            NavigationDirection::Right | NavigationDirection::Down => PANE_RESIZE_STEP,
            NavigationDirection::Left | NavigationDirection::Up => -PANE_RESIZE_STEP,
        };
        let Some(focused) = self.active_view() else {
            return false;
        };
        self.splitter
            .active_container_mut()
            .and_then(|c| c.current_tab_mut())
            .is_some_and(|tab| tab.panes.resize_split(focused, delta))
    }
}
