//! Display creation, controller plugging and teardown.

use super::ViewManager;
use crate::display::TerminalDisplay;
use crate::events::ViewEvent;
use crate::pane::{PaneTree, SplitDirection};
use crate::tab::{TabContainer, ViewProperties};
use crate::types::{ContainerId, ControllerId, DisplayId, SessionId};
use term_views_config::{NewTabBehavior, Profile};

impl ViewManager {
    /// Create a display for `session`, apply its profile and register it
    ///
    /// The display is not placed in any pane tree. Returns `None` when the
    /// session is unknown.
    pub fn create_and_setup_terminal_display(&mut self, session: SessionId) -> Option<DisplayId> {
        let Some((profile, (columns, lines))) = self.session_setup(session) else {
            log::warn!("Cannot create a display for unknown session {}", session);
            return None;
        };

        let id = self.services.next_display_id();
        let mut display = TerminalDisplay::new(id, session);
        display.set_size(columns, lines);
        self.displays.insert(id, display);
        self.apply_profile_to_view(id, &profile);

        let dark = self.color_scheme_for_profile(&profile).has_dark_background();
        if let Some(s) = self.services.sessions.lock().session_mut(session) {
            s.add_view(id);
            s.set_dark_background(dark);
        }
        self.session_map.insert(id, session);
        crate::debug_log!("VIEW", "Window {} display {} -> session {}", self.id, id, session);

        // the first controller of a window is plugged right away
        if self.plugged.is_none() {
            self.controller_changed(id);
        }
        Some(id)
    }

    /// Profile and preferred size of a registered session
    fn session_setup(&self, session: SessionId) -> Option<(Profile, (u16, u16))> {
        let profiles = self.services.profiles.read();
        let sessions = self.services.sessions.lock();
        let record = sessions.session(session)?;
        let profile = sessions.session_profile(session, &profiles).clone();
        Some((profile, record.preferred_size()))
    }

    /// Tab properties for a new view of `session`
    fn properties_for(&self, session: SessionId) -> ViewProperties {
        let profiles = self.services.profiles.read();
        let sessions = self.services.sessions.lock();
        let mut properties = ViewProperties::new(session, "");
        if let Some(record) = sessions.session(session) {
            properties.set_title(record.title());
            properties.set_current_dir(
                record
                    .current_dir()
                    .or(record.initial_working_directory())
                    .map(str::to_string),
            );
        }
        properties.set_icon(sessions.session_profile(session, &profiles).icon.clone());
        properties
    }

    /// Add a tab for `session` to one container
    ///
    /// `index` past the end (or `None`) appends. In the active container the
    /// new tab becomes current and its display is focused.
    pub fn create_view_in(
        &mut self,
        session: SessionId,
        container: ContainerId,
        index: Option<usize>,
    ) -> Option<DisplayId> {
        if self.splitter.container(container).is_none() {
            log::warn!("Window {} has no container {}", self.id, container);
            return None;
        }
        let display = self.create_and_setup_terminal_display(session)?;
        let properties = self.properties_for(session);
        let is_active = self.splitter.active_container_id() == Some(container);

        if let Some(target) = self.splitter.container_mut(container) {
            let tab = target.add_view(PaneTree::with_root(display), properties, index);
            if is_active {
                target.set_current_tab(tab);
            }
        }
        if is_active {
            self.controller_changed(display);
        }

        self.update_detach_view_state();
        self.container_views_changed(container);
        Some(display)
    }

    /// Show `session` in a new tab of every container
    ///
    /// Creates the first container when the window has none. Returns the new
    /// displays in container order.
    pub fn create_view(&mut self, session: SessionId) -> Vec<DisplayId> {
        if self.services.sessions.lock().session(session).is_none() {
            log::warn!("Cannot create a view for unknown session {}", session);
            return Vec::new();
        }

        if self.splitter.count() == 0 {
            let container = self.create_container();
            self.splitter.add_container(container, SplitDirection::Vertical);
        }

        let index = match self.new_tab_behavior {
            NewTabBehavior::AtEnd => None,
            NewTabBehavior::AfterCurrent => self
                .splitter
                .active_container()
                .and_then(|c| c.current_index())
                .map(|i| i + 1),
        };

        self.splitter
            .container_ids()
            .into_iter()
            .filter_map(|container| self.create_view_in(session, container, index))
            .collect()
    }

    /// Plug the controller of `display`
    ///
    /// Activates the display's container, tab and pane. Emits
    /// `ActiveViewChanged` only when the plugged controller actually changes.
    pub fn controller_changed(&mut self, display: ControllerId) -> bool {
        if self.plugged == Some(display) || !self.session_map.contains_key(&display) {
            return false;
        }

        if let Some(container_id) = self.splitter.container_of_display(display) {
            self.splitter.set_active_container(container_id);
            if let Some(container) = self.splitter.container_mut(container_id)
                && let Some(tab) = container.tab_of_display_mut(display)
            {
                tab.panes.focus(display);
                let tab_id = tab.id;
                container.set_current_tab(tab_id);
            }
        }

        self.plugged = Some(display);
        crate::debug_info!("VIEW", "Window {} plugged controller {}", self.id, display);
        self.emit(ViewEvent::ActiveViewChanged(display));
        true
    }

    /// Currently plugged controller
    pub fn active_view_controller(&self) -> Option<ControllerId> {
        self.plugged
    }

    /// Plug the active view if the plugged controller went away
    pub(crate) fn refocus_active_view(&mut self) {
        let plugged_alive = self
            .plugged
            .is_some_and(|display| self.session_map.contains_key(&display));
        if plugged_alive {
            return;
        }
        self.plugged = None;
        if self.splitter.active_container().is_some_and(TabContainer::is_empty) {
            self.activate_next_populated_container();
        }
        if let Some(display) = self.active_view() {
            self.controller_changed(display);
        }
    }

    /// Move focus off an empty active container, in ring order
    fn activate_next_populated_container(&mut self) {
        let ids = self.splitter.container_ids();
        let start = self
            .splitter
            .active_container_id()
            .and_then(|id| self.splitter.index_of(id))
            .unwrap_or(0);
        let next = (1..ids.len())
            .map(|step| ids[(start + step) % ids.len()])
            .find(|id| self.splitter.container(*id).is_some_and(|c| !c.is_empty()));
        if let Some(id) = next {
            log::debug!("Window {}: focus moves to container {}", self.id, id);
            self.splitter.set_active_container(id);
        }
    }

    /// Remove every display of a finished session
    ///
    /// Does nothing once the window has been torn down.
    pub fn session_finished(&mut self, session: SessionId) {
        if self.torn_down {
            log::debug!(
                "Window {} ignoring finish of session {} after teardown",
                self.id,
                session
            );
            return;
        }

        if let Some(s) = self.services.sessions.lock().session_mut(session) {
            s.set_finished();
        }

        let plugged_session = self.plugged.and_then(|d| self.session_of(d));
        if plugged_session == Some(session)
            && let Some(controller) = self.plugged.take()
        {
            self.emit(ViewEvent::UnplugController(controller));
        }

        let displays: Vec<DisplayId> = self
            .session_map
            .iter()
            .filter(|(_, s)| **s == session)
            .map(|(d, _)| *d)
            .collect();
        log::info!(
            "Window {}: session {} finished, removing {} views",
            self.id,
            session,
            displays.len()
        );
        for display in displays {
            self.view_destroyed(display);
        }
        self.refocus_active_view();
    }

    /// Remove a display from its pane tree and the session map
    ///
    /// This is the only path that drops session map entries of live views.
    /// The session is closed when this was its last view; `SessionClosed` is
    /// emitted for the call that actually closed it.
    pub fn view_destroyed(&mut self, display: DisplayId) {
        let container_id = self.splitter.container_of_display(display);
        let mut emptied = false;
        if let Some(container) = container_id.and_then(|id| self.splitter.container_mut(id))
            && let Some(tab) = container.tab_of_display_mut(display)
        {
            let tab_id = tab.id;
            if tab.panes.remove(display) {
                container.remove_view(tab_id);
                emptied = container.is_empty();
            }
        }

        self.displays.remove(&display);
        if self.plugged == Some(display) {
            self.plugged = None;
        }
        let Some(session) = self.session_map.remove(&display) else {
            return;
        };

        let closed = {
            let mut sessions = self.services.sessions.lock();
            let last_view = match sessions.session_mut(session) {
                Some(s) => {
                    s.remove_view(display);
                    !s.has_views()
                }
                None => false,
            };
            last_view && sessions.close_session(session)
        };
        if closed {
            self.emit(ViewEvent::SessionClosed(session));
        }

        if self.torn_down {
            return;
        }
        if let Some(container) = container_id {
            if emptied {
                self.container_emptied(container);
            }
            self.container_views_changed(container);
        }
        self.update_detach_view_state();
    }

    /// Remove a display and replug the active view
    pub fn close_view(&mut self, display: DisplayId) -> bool {
        if !self.session_map.contains_key(&display) {
            return false;
        }
        self.view_destroyed(display);
        self.refocus_active_view();
        true
    }

    /// React to a container losing its last tab
    pub(crate) fn container_emptied(&mut self, container: ContainerId) {
        if self.reclaim_empty_containers && self.splitter.count() > 1 {
            self.remove_container(container);
        }
        if self.splitter.all_containers_empty() {
            log::info!("Window {} has no views left", self.id);
            self.emit(ViewEvent::Empty);
        }
    }

    /// Release every view of the window
    ///
    /// Sessions left without views are closed. Afterwards late session
    /// notifications are ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        let displays: Vec<DisplayId> = self.session_map.keys().copied().collect();
        for display in displays {
            self.view_destroyed(display);
        }
        self.plugged = None;
        log::info!("Window {} torn down", self.id);
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
