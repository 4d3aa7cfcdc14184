//! Per-window orchestration of containers, pane trees and sessions
//!
//! A `ViewManager` owns one window's [`ViewSplitter`], the terminal displays
//! placed in it and the session map that resolves every display to the
//! session it shows. Sessions themselves live in the shared registry from
//! [`Services`]; a window only references them.
//!
//! Operations are grouped by concern:
//! - `views`: display creation, controller plugging, teardown
//! - `split`: container splitting and pane splitting
//! - `navigation`: tab and container switching
//! - `profile`: applying profiles and color schemes to displays
//! - `restore`: saving and restoring the window's sessions
//! - `sessions`: the session accessors exposed to RPC callers
//! - `actions`: named action dispatch and enabled state

mod actions;
mod navigation;
mod profile;
mod restore;
mod sessions;
mod split;
mod views;

use crate::actions::{ActionCollection, ViewAction};
use crate::display::TerminalDisplay;
use crate::events::{Observers, SubscriptionId, ViewEvent};
use crate::services::Services;
use crate::splitter::ViewSplitter;
use crate::tab::{TabContainer, ViewProperties};
use crate::types::{ContainerId, ControllerId, DisplayId, ManagerId, SessionId};
use crate::window_adaptor::WindowRegistry;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use term_views_config::{Config, NavigationMethod, NavigationVisibility, NewTabBehavior};

/// Environment variable naming the window a session was started from
pub const WINDOW_ENV_VAR: &str = "TERM_VIEWS_WINDOW";

/// Orchestrates the views of one window
pub struct ViewManager {
    id: ManagerId,
    services: Services,
    splitter: ViewSplitter,
    displays: BTreeMap<DisplayId, TerminalDisplay>,
    /// Owning session of every display placed in this window
    session_map: BTreeMap<DisplayId, SessionId>,
    /// Controller whose actions are plugged into the window
    plugged: Option<ControllerId>,
    observers: Observers,
    actions: ActionCollection,
    new_tab_behavior: NewTabBehavior,
    navigation_method: NavigationMethod,
    navigation_visibility: NavigationVisibility,
    tab_width_to_text: bool,
    reclaim_empty_containers: bool,
    torn_down: bool,
}

impl ViewManager {
    /// Create a window with no containers; the first one is created with the first view
    pub fn new(id: ManagerId, services: Services, config: &Config) -> Self {
        let mut manager = Self {
            id,
            services,
            splitter: ViewSplitter::new(),
            displays: BTreeMap::new(),
            session_map: BTreeMap::new(),
            plugged: None,
            observers: Observers::new(),
            actions: ActionCollection::new(),
            new_tab_behavior: config.new_tab_behavior,
            navigation_method: config.navigation_method,
            navigation_visibility: config.navigation_visibility,
            tab_width_to_text: config.tab_width_to_text,
            reclaim_empty_containers: config.reclaim_empty_containers,
            torn_down: false,
        };
        manager.set_navigation_method(config.navigation_method);
        manager.update_detach_view_state();
        log::info!("Created view manager {}", id);
        manager
    }

    pub fn id(&self) -> ManagerId {
        self.id
    }

    /// RPC object path of this window
    pub fn object_path(&self) -> String {
        WindowRegistry::object_path(self.id)
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn splitter(&self) -> &ViewSplitter {
        &self.splitter
    }

    /// Display → session map of this window
    pub fn session_map(&self) -> &BTreeMap<DisplayId, SessionId> {
        &self.session_map
    }

    /// Session shown by a display of this window
    pub fn session_of(&self, display: DisplayId) -> Option<SessionId> {
        self.session_map.get(&display).copied()
    }

    pub fn display(&self, id: DisplayId) -> Option<&TerminalDisplay> {
        self.displays.get(&id)
    }

    /// Every display placed in a pane tree of this window, container by container
    pub fn layout_displays(&self) -> Vec<DisplayId> {
        self.splitter
            .containers()
            .iter()
            .flat_map(TabContainer::displays)
            .collect()
    }

    pub fn actions(&self) -> &ActionCollection {
        &self.actions
    }

    pub fn is_action_enabled(&self, action: ViewAction) -> bool {
        self.actions.is_enabled(action)
    }

    /// Register a listener for this window's events
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ViewEvent) + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub(crate) fn emit(&mut self, event: ViewEvent) {
        self.observers.emit(event);
    }

    pub fn new_tab_behavior(&self) -> NewTabBehavior {
        self.new_tab_behavior
    }

    pub fn navigation_method(&self) -> NavigationMethod {
        self.navigation_method
    }

    pub fn navigation_visibility(&self) -> NavigationVisibility {
        self.navigation_visibility
    }

    pub fn tab_width_to_text(&self) -> bool {
        self.tab_width_to_text
    }

    /// Display focused in the current tab of the active container
    pub fn active_view(&self) -> Option<DisplayId> {
        self.splitter
            .active_container()
            .and_then(TabContainer::current_tab)
            .and_then(|tab| tab.focused_display())
    }

    /// Properties of every tab in the active container
    pub fn view_properties(&self) -> Vec<ViewProperties> {
        self.splitter
            .active_container()
            .map(|c| c.tabs().iter().map(|t| t.properties.clone()).collect())
            .unwrap_or_default()
    }

    /// Size tabs to their titles in every container
    pub fn set_tab_width_to_text(&mut self, enabled: bool) {
        self.tab_width_to_text = enabled;
        for container in self.splitter.containers_mut() {
            container.set_tab_width_to_text(enabled);
        }
    }

    /// Change tab bar visibility of every container
    pub fn set_navigation_visibility(&mut self, visibility: NavigationVisibility) {
        if self.navigation_visibility == visibility {
            return;
        }
        self.navigation_visibility = visibility;
        for container in self.splitter.containers_mut() {
            container.set_navigation_visibility(visibility);
        }
    }

    /// Where new tabs are placed
    pub fn set_navigation_behavior(&mut self, behavior: NewTabBehavior) {
        self.new_tab_behavior = behavior;
    }

    /// Refresh the title and directory of every tab showing `session`
    ///
    /// Emits `ViewPropertiesChanged` when a tab of the active container changed.
    pub fn update_session_properties(&mut self, session: SessionId) -> bool {
        let (title, dir) = {
            let sessions = self.services.sessions.lock();
            match sessions.session(session) {
                Some(s) => (s.title().to_string(), s.current_dir().map(str::to_string)),
                None => return false,
            }
        };

        let active = self.splitter.active_container_id();
        let mut active_changed = false;
        let mut changed = false;
        for container in self.splitter.containers_mut() {
            let id = container.id();
            for tab in container.tabs_mut() {
                if tab.properties.identifier() != session {
                    continue;
                }
                let title_changed = tab.properties.set_title(title.clone());
                let dir_changed = tab.properties.current_dir() != dir.as_deref();
                tab.properties.set_current_dir(dir.clone());
                if title_changed || dir_changed {
                    changed = true;
                    active_changed |= Some(id) == active;
                }
            }
        }
        if active_changed {
            let properties = self.view_properties();
            self.emit(ViewEvent::ViewPropertiesChanged(properties));
        }
        changed
    }

    /// Emit the active container's properties when `container` is the active one
    pub(crate) fn container_views_changed(&mut self, container: ContainerId) {
        if !self.torn_down && self.splitter.active_container_id() == Some(container) {
            let properties = self.view_properties();
            self.emit(ViewEvent::ViewPropertiesChanged(properties));
        }
    }

    /// Allocate a container carrying this window's tab bar settings
    pub(crate) fn create_container(&mut self) -> TabContainer {
        let mut container = self.splitter.create_container();
        container.set_navigation_visibility(self.navigation_visibility);
        container.set_tab_width_to_text(self.tab_width_to_text);
        container
    }

    /// Compact text rendering of the window layout
    ///
    /// One line per container; the active container is marked `*`, the
    /// current tab `>`, and pane trees use the pane tree's own rendering.
    pub fn layout_summary(&self) -> String {
        let mut out = format!(
            "window {} ({:?}, {} sessions)\n",
            self.id,
            self.splitter.orientation(),
            self.session_count()
        );
        let active = self.splitter.active_container_id();
        for (container, size) in self.splitter.containers().iter().zip(self.splitter.sizes()) {
            let marker = if Some(container.id()) == active { "*" } else { " " };
            let _ = write!(
                out,
                "{} container {} [{:.0}%]:",
                marker,
                container.id(),
                size * 100.0
            );
            for tab in container.tabs() {
                let current = if container.current_tab_id() == Some(tab.id) { ">" } else { "" };
                let _ = write!(
                    out,
                    " {}{}={}",
                    current,
                    tab.properties.identifier(),
                    tab.panes
                );
            }
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Debug for ViewManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewManager")
            .field("id", &self.id)
            .field("containers", &self.splitter.count())
            .field("displays", &self.session_map.len())
            .field("plugged", &self.plugged)
            .field("observers", &self.observers)
            .finish()
    }
}

#[cfg(test)]
mod tests;
