use super::*;
use crate::pane::{NavigationDirection, SplitDirection};
use crate::session::WindowSessions;
use crate::types::INVALID_SESSION;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use term_views_config::{Profile, ProfileManager};

fn manager_with(config: Config) -> ViewManager {
    let profiles = ProfileManager::from_profiles(vec![
        Profile::new("Default"),
        Profile::new("Work").color_scheme("Linux"),
    ]);
    let services = Services::new(profiles, term_views_config::ColorSchemeManager::new());
    ViewManager::new(1, services, &config)
}

fn manager() -> ViewManager {
    manager_with(Config::default())
}

fn record(manager: &mut ViewManager) -> Rc<RefCell<Vec<ViewEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    manager.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    events
}

fn assert_consistent(manager: &ViewManager) {
    let tree: BTreeSet<DisplayId> = manager.layout_displays().into_iter().collect();
    let map: BTreeSet<DisplayId> = manager.session_map().keys().copied().collect();
    assert_eq!(tree, map);
}

fn sessions_of(manager: &ViewManager, container: ContainerId) -> BTreeSet<SessionId> {
    manager
        .splitter()
        .container(container)
        .unwrap()
        .displays()
        .into_iter()
        .map(|d| manager.session_of(d).unwrap())
        .collect()
}

#[test]
fn test_new_session_creates_first_container_and_plugs() {
    let mut m = manager();
    let events = record(&mut m);
    let session = m.new_session();

    assert!(session > 0);
    assert_eq!(m.splitter().count(), 1);
    assert_eq!(m.session_count(), 1);
    assert_eq!(m.current_session(), session);
    let display = m.active_view().unwrap();
    assert_eq!(m.active_view_controller(), Some(display));
    assert!(events.borrow().contains(&ViewEvent::ActiveViewChanged(display)));

    let sessions = m.services().sessions.lock();
    let info = sessions.session(session).unwrap();
    assert!(info.is_running());
    assert_eq!(info.views(), vec![display]);
    assert!(
        info
            .environment()
            .contains(&format!("{}=/Windows/1", WINDOW_ENV_VAR))
    );
    drop(sessions);
    assert_consistent(&m);
}

#[test]
fn test_unknown_profile_falls_back_to_default() {
    let mut m = manager();
    let session = m.new_session_with_profile_and_directory("Missing", "/tmp");
    let profiles = m.services().profiles.read();
    let sessions = m.services().sessions.lock();
    assert_eq!(sessions.session_profile(session, &profiles).name, "Default");
    assert_eq!(sessions.session(session).unwrap().current_dir(), Some("/tmp"));
}

#[test]
fn test_new_tab_after_current() {
    let mut m = manager();
    let a = m.new_session();
    let b = m.new_session();
    m.switch_to_view(0);
    m.set_navigation_behavior(NewTabBehavior::AfterCurrent);
    let c = m.new_session();

    let order: Vec<SessionId> = m
        .view_properties()
        .iter()
        .map(ViewProperties::identifier)
        .collect();
    assert_eq!(order, vec![a, c, b]);
    assert_eq!(m.current_session(), c);
}

#[test]
fn test_session_finished_removes_views_and_unplugs() {
    let mut m = manager();
    let a = m.new_session();
    let b = m.new_session();
    let plugged = m.active_view_controller().unwrap();
    let events = record(&mut m);

    m.session_finished(b);
    assert!(events.borrow().contains(&ViewEvent::UnplugController(plugged)));
    assert_eq!(
        events
            .borrow()
            .iter()
            .filter(|e| **e == ViewEvent::SessionClosed(b))
            .count(),
        1
    );
    assert_eq!(m.session_list(), vec![a]);
    assert_eq!(m.current_session(), a);
    assert!(m.services().sessions.lock().session(b).is_none());
    assert_consistent(&m);

    m.session_finished(a);
    assert!(events.borrow().contains(&ViewEvent::Empty));
    assert_eq!(m.splitter().count(), 1);
    assert_eq!(m.current_session(), INVALID_SESSION);
}

#[test]
fn test_session_closed_once_across_paths() {
    let mut m = manager();
    let session = m.new_session();
    let display = m.active_view().unwrap();
    let events = record(&mut m);

    m.view_destroyed(display);
    m.view_destroyed(display);
    m.session_finished(session);
    let closed = events
        .borrow()
        .iter()
        .filter(|e| matches!(e, ViewEvent::SessionClosed(_)))
        .count();
    assert_eq!(closed, 1);
    assert!(m.session_map().is_empty());
}

#[test]
fn test_session_finished_after_teardown_is_ignored() {
    let mut m = manager();
    let keep = m.new_session();
    let other = m.new_session();
    m.teardown();
    assert!(m.is_torn_down());
    assert!(m.services().sessions.lock().is_empty());

    let events = record(&mut m);
    m.session_finished(keep);
    m.session_finished(other);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_split_view_clones_tabs() {
    let mut m = manager();
    let events = record(&mut m);
    m.new_session();
    m.new_session();
    let original = m.splitter().active_container_id().unwrap();
    let before = m.splitter().container(original).unwrap().displays();

    let clone = m.split_left_right().unwrap();
    assert_eq!(m.splitter().count(), 2);
    assert_eq!(m.splitter().orientation(), SplitDirection::Vertical);
    assert_eq!(m.splitter().active_container_id(), Some(clone));
    assert_eq!(sessions_of(&m, original), sessions_of(&m, clone));
    assert_eq!(m.splitter().container(original).unwrap().displays(), before);
    let cloned = m.splitter().container(clone).unwrap().displays();
    assert!(cloned.iter().all(|d| !before.contains(d)));
    assert!(events.borrow().contains(&ViewEvent::SplitViewToggled(true)));
    assert_eq!(m.session_count(), 2);
    assert_consistent(&m);
}

#[test]
fn test_create_view_reaches_every_container() {
    let mut m = manager();
    m.new_session();
    m.split_top_bottom();
    let session = m.new_session();
    for container in m.splitter().container_ids() {
        assert!(sessions_of(&m, container).contains(&session));
    }
    assert_eq!(
        m.services().sessions.lock().session(session).unwrap().views().len(),
        2
    );
}

#[test]
fn test_multi_terminal_split_navigate_close() {
    let mut m = manager();
    let first = m.new_session();
    let left = m.active_view().unwrap();

    let second = m.multi_terminal_vertical().unwrap();
    assert_ne!(first, second);
    let right = m.active_view().unwrap();
    assert_eq!(m.current_session(), second);
    assert!(m.services().sessions.lock().session(second).unwrap().is_running());

    assert_eq!(m.move_pane_focus(NavigationDirection::Left), Some(left));
    assert_eq!(m.active_view_controller(), Some(left));
    assert_eq!(m.move_pane_focus(NavigationDirection::Left), None);
    assert_eq!(m.move_pane_focus(NavigationDirection::Right), Some(right));

    assert!(m.multi_terminal_close());
    assert_eq!(m.active_view(), Some(left));
    assert!(m.services().sessions.lock().session(second).is_none());
    assert_eq!(m.splitter().active_container().unwrap().count(), 1);
    assert_consistent(&m);
}

#[test]
fn test_detach_state_and_detach() {
    let mut m = manager();
    let a = m.new_session();
    assert!(!m.is_action_enabled(ViewAction::DetachView));
    assert!(!m.trigger(ViewAction::DetachView));

    let b = m.new_session();
    assert_eq!(
        m.is_action_enabled(ViewAction::DetachView),
        cfg!(feature = "detach")
    );
    if !cfg!(feature = "detach") {
        return;
    }
    let events = record(&mut m);
    let before = m.session_map().len();

    let detached = m.detach_active_view();
    assert_eq!(detached, vec![b]);
    assert_eq!(m.session_map().len(), before - 1);
    assert_eq!(
        events
            .borrow()
            .iter()
            .filter(|e| matches!(e, ViewEvent::ViewDetached(_)))
            .count(),
        1
    );
    let sessions = m.services().sessions.lock();
    assert!(!sessions.session(b).unwrap().has_views());
    drop(sessions);
    assert_eq!(m.current_session(), a);
    assert!(!m.is_action_enabled(ViewAction::DetachView));
    assert_consistent(&m);
}

#[test]
fn test_tab_navigation_is_a_ring() {
    let mut m = manager();
    let a = m.new_session();
    let b = m.new_session();
    let c = m.new_session();
    assert_eq!(m.current_session(), c);

    m.next_view();
    assert_eq!(m.current_session(), a);
    m.previous_view();
    assert_eq!(m.current_session(), c);
    m.switch_to_view(1);
    assert_eq!(m.current_session(), b);
    assert!(!m.switch_to_view(7));
    m.last_view();
    assert_eq!(m.current_session(), c);

    assert_eq!(m.move_active_view_right(), Some(0));
    let order: Vec<SessionId> = m.view_properties().iter().map(|p| p.identifier()).collect();
    assert_eq!(order, vec![c, a, b]);
}

#[test]
fn test_next_container_replugs() {
    let mut m = manager();
    m.new_session();
    let clone = m.split_left_right().unwrap();
    let events = record(&mut m);

    m.next_container();
    assert_ne!(m.splitter().active_container_id(), Some(clone));
    let plugged = m.active_view_controller().unwrap();
    assert_eq!(m.active_view(), Some(plugged));
    assert!(events.borrow().contains(&ViewEvent::ActiveViewChanged(plugged)));
}

#[test]
fn test_container_removal_disabled_by_default() {
    let mut m = manager();
    m.new_session();
    let clone = m.split_left_right().unwrap();
    assert!(!m.remove_container(clone));
    m.close_active_container();
    assert_eq!(m.splitter().count(), 2);
    assert_ne!(m.splitter().active_container_id(), Some(clone));
}

#[test]
fn test_container_removal_when_reclaiming() {
    let mut m = manager_with(Config {
        reclaim_empty_containers: true,
        ..Config::default()
    });
    let session = m.new_session();
    let clone = m.split_left_right().unwrap();
    let events = record(&mut m);

    m.close_active_container();
    assert_eq!(m.splitter().count(), 1);
    assert!(m.splitter().container(clone).is_none());
    assert!(events.borrow().contains(&ViewEvent::SplitViewToggled(false)));
    assert_eq!(m.current_session(), session);
    assert!(!m.remove_container(m.splitter().active_container_id().unwrap()));
    assert!(m.services().sessions.lock().session(session).is_some());
    assert_consistent(&m);
}

#[test]
fn test_no_navigation_disables_actions() {
    let mut m = manager_with(Config {
        navigation_method: NavigationMethod::NoNavigation,
        ..Config::default()
    });
    m.new_session();
    m.new_session();
    assert!(!m.trigger(ViewAction::NextView));
    assert!(!m.trigger(ViewAction::SplitViewLeftRight));
    assert!(m.trigger(ViewAction::NextContainer));

    m.set_navigation_method(NavigationMethod::TabbedNavigation);
    assert!(m.trigger(ViewAction::NextView));
}

#[test]
fn test_set_current_session() {
    let mut m = manager();
    let a = m.new_session();
    let b = m.new_session();
    assert!(m.set_current_session(a));
    assert_eq!(m.current_session(), a);
    assert!(!m.set_current_session(999));
    assert_eq!(m.session_list(), vec![a, b]);
    assert_eq!(m.profile_list(), vec!["Default".to_string(), "Work".to_string()]);
    assert_eq!(m.default_profile(), "Default");
}

#[test]
fn test_profile_changed_reapplies() {
    let mut m = manager();
    let session = m.new_session_with_profile("Work");
    let display = m.active_view().unwrap();
    let mut profile = m.services().profiles.read().profile_or_default("Work").clone();
    profile.terminal_margin = 12;
    m.services().profiles.write().update(profile.clone());

    let events = record(&mut m);
    assert_eq!(m.profile_changed(&profile), 1);
    assert_eq!(m.display(display).unwrap().settings().unwrap().margin, 12);
    assert!(events.borrow().contains(&ViewEvent::UpdateWindowIcon));
    assert!(events.borrow().contains(&ViewEvent::BlurSettingChanged(false)));
    assert_eq!(m.update_views_for_session(session), 1);
}

#[test]
fn test_restore_falls_back_on_unknown_id() {
    let mut m = manager();
    let restored = m.restore_sessions(&WindowSessions {
        sessions: vec![4, 5],
        active: 1,
    });
    assert_eq!(restored.len(), 1);
    assert_eq!(m.session_count(), 1);
    assert_eq!(m.current_session(), restored[0]);
}

#[test]
fn test_save_and_restore_order() {
    let mut m = manager();
    m.new_session();
    let b = m.new_session_with_profile("Work");
    m.new_session();
    m.set_current_session(b);

    let saved = {
        let services = m.services().clone();
        let profiles = services.profiles.read();
        services.sessions.lock().saved_sessions(&profiles)
    };
    let window = m.save_sessions();
    assert_eq!(window.sessions, vec![1, 2, 3]);
    assert_eq!(window.active, 2);

    let mut fresh = manager();
    {
        let services = fresh.services().clone();
        let profiles = services.profiles.read();
        services.sessions.lock().restore_sessions(&saved, &profiles);
    }
    let restored = fresh.restore_sessions(&window);
    assert_eq!(restored.len(), 3);
    assert_eq!(fresh.current_session(), restored[1]);
    let profiles = fresh.services().profiles.read();
    let sessions = fresh.services().sessions.lock();
    assert_eq!(sessions.session_profile(restored[1], &profiles).name, "Work");
    assert!(restored.iter().all(|s| sessions.session(*s).unwrap().is_running()));
}

#[test]
fn test_layout_summary_marks_active() {
    let mut m = manager();
    let session = m.new_session();
    let summary = m.layout_summary();
    assert!(summary.starts_with("window 1"));
    assert!(summary.contains(&format!(">{}=", session)));
    assert!(summary.lines().nth(1).unwrap().starts_with('*'));
}
