//! Application root: shared registries and every open window
//!
//! `App` owns the [`Services`] shared by all windows, the window registry and
//! the windows themselves. Window events are buffered by a forwarder
//! subscribed to each window and handled in [`App::process_events`]:
//! detached sessions get a new window, windows that report `Empty` close.

use crate::cli::DriverCommand;
use crate::events::ViewEvent;
use crate::services::Services;
use crate::session::{SessionState, WindowSessions, storage};
use crate::types::{ManagerId, SessionId};
use crate::view_manager::ViewManager;
use crate::window_adaptor::{WindowAdaptor, WindowRegistry};
use anyhow::Result;
use parking_lot::Mutex;
use std::collections::{BTreeMap, VecDeque};
use std::path::Path;
use std::sync::Arc;
use term_views_config::{ColorSchemeManager, Config, ProfileManager};

type EventQueue = Arc<Mutex<VecDeque<(ManagerId, ViewEvent)>>>;

/// Main application state
pub struct App {
    config: Config,
    services: Services,
    registry: WindowRegistry,
    windows: BTreeMap<ManagerId, ViewManager>,
    events: EventQueue,
}

impl App {
    pub fn new(
        config: Config,
        mut profiles: ProfileManager,
        color_schemes: ColorSchemeManager,
    ) -> Self {
        if let Some(name) = &config.default_profile {
            profiles.set_default_by_name(name);
        }
        Self {
            config,
            services: Services::new(profiles, color_schemes),
            registry: WindowRegistry::new(),
            windows: BTreeMap::new(),
            events: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Open an empty window
    pub fn new_window(&mut self) -> ManagerId {
        let id = self.registry.allocate();
        let mut window = ViewManager::new(id, self.services.clone(), &self.config);
        let queue = Arc::clone(&self.events);
        window.subscribe(move |event| queue.lock().push_back((id, event.clone())));
        self.windows.insert(id, window);
        log::info!("Opened window {} ({} open)", id, self.windows.len());
        id
    }

    /// Open a window showing one new default session
    pub fn new_window_with_session(&mut self) -> (ManagerId, SessionId) {
        let id = self.new_window();
        let session = self
            .windows
            .get_mut(&id)
            .map(ViewManager::new_session)
            .unwrap_or(crate::types::INVALID_SESSION);
        (id, session)
    }

    pub fn window(&self, id: ManagerId) -> Option<&ViewManager> {
        self.windows.get(&id)
    }

    pub fn window_mut(&mut self, id: ManagerId) -> Option<&mut ViewManager> {
        self.windows.get_mut(&id)
    }

    /// Window registered at an object path such as `/Windows/2`
    pub fn window_by_path(&mut self, path: &str) -> Option<&mut ViewManager> {
        let id = self.registry.lookup(path)?;
        self.windows.get_mut(&id)
    }

    /// RPC facade of a window
    pub fn adaptor(&mut self, id: ManagerId) -> Option<WindowAdaptor<'_>> {
        self.windows.get_mut(&id).map(WindowAdaptor::new)
    }

    pub fn windows(&self) -> impl Iterator<Item = &ViewManager> {
        self.windows.values()
    }

    pub fn window_ids(&self) -> Vec<ManagerId> {
        self.windows.keys().copied().collect()
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Tear a window down and forget it
    pub fn close_window(&mut self, id: ManagerId) -> bool {
        let Some(mut window) = self.windows.remove(&id) else {
            return false;
        };
        window.teardown();
        self.registry.release(id);
        log::info!("Closed window {} ({} open)", id, self.windows.len());
        true
    }

    /// Tell every window that a session's process exited
    pub fn session_finished(&mut self, session: SessionId) {
        for window in self.windows.values_mut() {
            window.session_finished(session);
        }
        self.process_events();
    }

    /// Handle buffered window events until none are left
    ///
    /// Returns the number of events handled.
    pub fn process_events(&mut self) -> usize {
        let mut handled = 0;
        loop {
            let next = self.events.lock().pop_front();
            let Some((window, event)) = next else {
                break;
            };
            handled += 1;
            match event {
                ViewEvent::ViewDetached(session) => self.rehome_session(session),
                ViewEvent::Empty => {
                    self.close_window(window);
                }
                other => crate::debug_trace!("APP", "Window {}: {:?}", window, other),
            }
        }
        handled
    }

    /// Show a detached session in a window of its own
    fn rehome_session(&mut self, session: SessionId) {
        let id = self.new_window();
        let shown = self
            .windows
            .get_mut(&id)
            .map(|w| !w.create_view(session).is_empty())
            .unwrap_or(false);
        if shown {
            log::info!("Session {} moved to window {}", session, id);
        } else {
            log::warn!("Session {} could not be shown in a new window", session);
            self.close_window(id);
        }
    }

    /// Write every session and window layout to `path`
    pub fn save_state_to(&mut self, path: &Path) -> Result<()> {
        let sessions = {
            let profiles = self.services.profiles.read();
            self.services.sessions.lock().saved_sessions(&profiles)
        };
        let windows: Vec<WindowSessions> = self
            .windows
            .values()
            .map(ViewManager::save_sessions)
            .filter(|w| !w.sessions.is_empty())
            .collect();
        let state = SessionState {
            saved_at: chrono::Utc::now().to_rfc3339(),
            sessions,
            windows,
        };
        storage::save_session_to(&state, path)
    }

    /// Recreate windows from a state file
    ///
    /// An absent, empty or unreadable file opens one window with a single
    /// default session. Restored sessions that no window shows are closed.
    pub fn restore_state_from(&mut self, path: &Path) -> Result<Vec<ManagerId>> {
        let state = match storage::load_session_from(path) {
            Ok(Some(state)) if !state.windows.is_empty() => state,
            Ok(_) => {
                log::info!("No saved windows in {:?}, starting fresh", path);
                return Ok(vec![self.restore_window(&WindowSessions::default())]);
            }
            Err(e) => {
                log::warn!("Ignoring unusable session state: {:#}", e);
                return Ok(vec![self.restore_window(&WindowSessions::default())]);
            }
        };

        {
            let profiles = self.services.profiles.read();
            self.services
                .sessions
                .lock()
                .restore_sessions(&state.sessions, &profiles);
        }
        let ids: Vec<ManagerId> = state
            .windows
            .iter()
            .map(|window| self.restore_window(window))
            .collect();

        let orphans = self.services.sessions.lock().sessions_without_views();
        for session in orphans {
            log::debug!("Closing restored session {} with no window", session);
            self.services.sessions.lock().close_session(session);
        }
        self.process_events();
        Ok(ids)
    }

    fn restore_window(&mut self, state: &WindowSessions) -> ManagerId {
        let id = self.new_window();
        if let Some(window) = self.windows.get_mut(&id) {
            window.restore_sessions(state);
        }
        id
    }

    /// Run a driver command against `window`
    ///
    /// Returns the window later commands should target, which changes when
    /// the command selects another window or `window` was closed.
    pub fn execute(&mut self, window: ManagerId, command: &DriverCommand) -> Option<ManagerId> {
        let mut target = Some(window).filter(|id| self.windows.contains_key(id));
        match command {
            DriverCommand::Window(n) => {
                let ids = self.window_ids();
                target = n.checked_sub(1).and_then(|i| ids.get(i)).copied();
                if target.is_none() {
                    log::warn!("No window number {} ({} open)", n, self.windows.len());
                    return Some(window);
                }
            }
            DriverCommand::Finish(session) => self.session_finished(*session),
            _ => {
                let Some(manager) = target.and_then(|id| self.windows.get_mut(&id)) else {
                    log::warn!("No window for {:?}", command);
                    return self.window_ids().first().copied();
                };
                match command {
                    DriverCommand::NewSession { profile, directory } => {
                        let mut adaptor = WindowAdaptor::new(manager);
                        let session = match (profile, directory) {
                            (Some(p), Some(d)) => {
                                adaptor.new_session_with_profile_and_directory(p, d)
                            }
                            (Some(p), None) => adaptor.new_session_with_profile(p),
                            _ => adaptor.new_session(),
                        };
                        log::info!("{} started session {}", adaptor.object_path(), session);
                    }
                    DriverCommand::Shortcut(keys) => {
                        if manager.trigger_shortcut(keys).is_none() {
                            log::warn!("Shortcut '{}' did nothing", keys);
                        }
                    }
                    DriverCommand::Action(action) => {
                        manager.trigger(*action);
                    }
                    DriverCommand::Window(_) | DriverCommand::Finish(_) => {}
                }
            }
        }
        self.process_events();
        target
            .filter(|id| self.windows.contains_key(id))
            .or_else(|| self.window_ids().first().copied())
    }

    /// Text layout of every window
    pub fn layout_summary(&self) -> String {
        self.windows
            .values()
            .map(ViewManager::layout_summary)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Close every window
    pub fn shutdown(&mut self) {
        for id in self.window_ids() {
            self.close_window(id);
        }
        self.events.lock().clear();
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("windows", &self.window_ids())
            .field("sessions", &self.services.sessions.lock().len())
            .finish()
    }
}
