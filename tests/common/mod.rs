//! Shared integration test helpers for term-views.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{test_app, test_manager, EventLog};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers are used per file.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use term_views::app::App;
use term_views::events::ViewEvent;
use term_views::services::Services;
use term_views::types::{DisplayId, SessionId};
use term_views::view_manager::ViewManager;
use term_views_config::{ColorSchemeManager, Config, Profile, ProfileManager};

/// Profiles every test starts with: "Default" (first, so the default) and "Work"
pub fn test_profiles() -> ProfileManager {
    ProfileManager::from_profiles(vec![
        Profile::new("Default"),
        Profile::new("Work").color_scheme("Linux"),
    ])
}

pub fn test_services() -> Services {
    Services::new(test_profiles(), ColorSchemeManager::new())
}

/// A single window with its own services
pub fn test_manager(config: &Config) -> ViewManager {
    ViewManager::new(1, test_services(), config)
}

/// An application root with no windows open
pub fn test_app(config: Config) -> App {
    App::new(config, test_profiles(), ColorSchemeManager::new())
}

/// Config with container reclamation switched on
pub fn reclaiming_config() -> Config {
    Config {
        reclaim_empty_containers: true,
        ..Config::default()
    }
}

/// Events recorded from one window
pub type EventLog = Rc<RefCell<Vec<ViewEvent>>>;

pub fn record_events(manager: &mut ViewManager) -> EventLog {
    let events: EventLog = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    manager.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    events
}

pub fn count_events(events: &EventLog, matches: impl Fn(&ViewEvent) -> bool) -> usize {
    events.borrow().iter().filter(|e| matches(e)).count()
}

/// Every pane-tree leaf has a session-map entry and every entry has a leaf
pub fn assert_map_matches_layout(manager: &ViewManager) {
    let layout: BTreeSet<DisplayId> = manager.layout_displays().into_iter().collect();
    let mapped: BTreeSet<DisplayId> = manager.session_map().keys().copied().collect();
    assert_eq!(layout, mapped, "pane trees and session map disagree");
}

/// Sessions shown anywhere in the window
pub fn mapped_sessions(manager: &ViewManager) -> BTreeSet<SessionId> {
    manager.session_map().values().copied().collect()
}

/// Sessions shown in a given container
pub fn container_sessions(manager: &ViewManager, index: usize) -> BTreeSet<SessionId> {
    let container = &manager.splitter().containers()[index];
    container
        .displays()
        .into_iter()
        .filter_map(|d| manager.session_of(d))
        .collect()
}
