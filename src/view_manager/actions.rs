//! Named action dispatch, action state and detaching.

use super::ViewManager;
use crate::actions::ViewAction;
use crate::events::ViewEvent;
use crate::types::{ContainerId, DisplayId, SessionId, TabId};
use term_views_config::NavigationMethod;

impl ViewManager {
    /// Run an action if it is registered and enabled
    pub fn trigger(&mut self, action: ViewAction) -> bool {
        if !self.actions.is_enabled(action) {
            log::debug!("Window {}: action '{}' is disabled", self.id, action);
            return false;
        }
        crate::debug_log!("ACTION", "Window {} triggers '{}'", self.id, action);

        match action {
            ViewAction::NextView => self.next_view(),
            ViewAction::PreviousView => self.previous_view(),
            ViewAction::LastTab => self.last_view(),
            ViewAction::NextContainer => self.next_container(),
            ViewAction::MoveViewLeft => {
                self.move_active_view_left();
            }
            ViewAction::MoveViewRight => {
                self.move_active_view_right();
            }
            ViewAction::SwitchToTab(index) => {
                self.switch_to_view(index as usize);
            }
            ViewAction::SplitPaneVertical => {
                self.multi_terminal_vertical();
            }
            ViewAction::SplitPaneHorizontal => {
                self.multi_terminal_horizontal();
            }
            ViewAction::ClosePane => {
                self.multi_terminal_close();
            }
            ViewAction::FocusPane(direction) => {
                self.move_pane_focus(direction);
            }
            ViewAction::ResizePane(direction) => {
                self.resize_active_pane(direction);
            }
            ViewAction::SplitViewLeftRight => {
                self.split_left_right();
            }
            ViewAction::SplitViewTopBottom => {
                self.split_top_bottom();
            }
            ViewAction::CloseActiveView => self.close_active_container(),
            ViewAction::CloseOtherViews => self.close_other_containers(),
            ViewAction::ExpandActiveView => {
                self.expand_active_container();
            }
            ViewAction::ShrinkActiveView => {
                self.shrink_active_container();
            }
            ViewAction::DetachView => {
                self.detach_active_view();
            }
        }
        true
    }

    /// Run the action bound to a shortcut such as `Ctrl+Shift+H`
    pub fn trigger_shortcut(&mut self, shortcut: &str) -> Option<ViewAction> {
        let action = self.actions.action_for_shortcut(shortcut)?;
        self.trigger(action).then_some(action)
    }

    /// Enable or disable the navigation actions
    pub fn set_navigation_method(&mut self, method: NavigationMethod) {
        self.navigation_method = method;
        let enable = method != NavigationMethod::NoNavigation;
        let navigation: Vec<ViewAction> = self
            .actions
            .actions()
            .iter()
            .copied()
            .filter(ViewAction::is_navigation)
            .collect();
        for action in navigation {
            self.actions.set_enabled(action, enable);
        }
    }

    /// Enable detaching only when it would leave something behind
    ///
    /// That is with two or more containers, or two or more tabs in the
    /// active container.
    pub fn update_detach_view_state(&mut self) {
        let split = self.splitter.count() >= 2;
        let enable = split
            || self
                .splitter
                .active_container()
                .is_some_and(|c| c.count() >= 2);
        if self.actions.set_enabled(ViewAction::DetachView, enable) {
            crate::debug_log!("ACTION", "Window {} detach-view enabled: {}", self.id, enable);
        }
    }

    /// Detach the current tab of the active container
    pub fn detach_active_view(&mut self) -> Vec<SessionId> {
        let target = self
            .splitter
            .active_container()
            .and_then(|c| c.current_tab_id().map(|tab| (c.id(), tab)));
        match target {
            Some((container, tab)) => self.detach_view(container, tab),
            None => Vec::new(),
        }
    }

    /// Take a tab out of this window
    ///
    /// Emits one `ViewDetached` per session shown in the tab and drops one
    /// session map entry per display. The sessions stay open for the host to
    /// show elsewhere. Nothing happens if any display lacks a session.
    pub fn detach_view(&mut self, container: ContainerId, tab: TabId) -> Vec<SessionId> {
        if !cfg!(feature = "detach") {
            log::debug!("Detaching views is not supported in this build");
            return Vec::new();
        }

        let Some(displays) = self
            .splitter
            .container(container)
            .and_then(|c| c.tab(tab))
            .map(|t| t.panes.displays())
        else {
            log::warn!("Window {}: no tab {} in container {}", self.id, tab, container);
            return Vec::new();
        };
        let pairs: Option<Vec<(DisplayId, SessionId)>> = displays
            .iter()
            .map(|d| self.session_of(*d).map(|s| (*d, s)))
            .collect();
        let Some(pairs) = pairs else {
            log::warn!("Window {}: tab {} has a display without session", self.id, tab);
            return Vec::new();
        };

        let emptied = match self.splitter.container_mut(container) {
            Some(c) => {
                c.remove_view(tab);
                c.is_empty()
            }
            None => false,
        };

        let mut detached: Vec<SessionId> = Vec::new();
        for (display, session) in pairs {
            self.session_map.remove(&display);
            self.displays.remove(&display);
            if self.plugged == Some(display) {
                self.plugged = None;
            }
            if let Some(s) = self.services.sessions.lock().session_mut(session) {
                s.remove_view(display);
            }
            if !detached.contains(&session) {
                detached.push(session);
                self.emit(ViewEvent::ViewDetached(session));
            }
        }
        log::info!(
            "Window {} detached tab {} ({} sessions)",
            self.id,
            tab,
            detached.len()
        );

        if emptied {
            self.container_emptied(container);
        }
        self.refocus_active_view();
        self.update_detach_view_state();
        self.container_views_changed(container);
        detached
    }
}

