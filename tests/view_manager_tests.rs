//! Window-level scenarios: closing, detaching, splitting and tab navigation.

mod common;

use common::{
    assert_map_matches_layout, container_sessions, count_events, mapped_sessions,
    reclaiming_config, record_events, test_manager,
};
use std::collections::BTreeSet;
use term_views::actions::ViewAction;
use term_views::events::ViewEvent;
use term_views::pane::{NavigationDirection, PaneBounds, SplitDirection};
use term_views::types::DisplayId;
use term_views_config::Config;

#[test]
fn test_finished_session_leaves_no_map_entries_in_any_container() {
    let mut m = test_manager(&Config::default());
    let a = m.new_session();
    let b = m.new_session();
    m.split_left_right().unwrap();
    m.split_top_bottom().unwrap();
    assert_eq!(m.splitter().count(), 3);
    assert_eq!(m.session_map().len(), 6);

    let events = record_events(&mut m);
    m.session_finished(a);

    assert!(m.session_map().values().all(|s| *s != a));
    assert_eq!(m.session_map().len(), 3);
    assert_eq!(mapped_sessions(&m), BTreeSet::from([b]));
    assert_map_matches_layout(&m);
    assert!(m.services().sessions.lock().session(a).is_none());
    assert_eq!(
        count_events(&events, |e| *e == ViewEvent::SessionClosed(a)),
        1
    );
}

#[test]
fn test_closing_one_clone_keeps_session_alive() {
    let mut m = test_manager(&Config::default());
    let session = m.new_session();
    m.split_left_right().unwrap();
    let clone = m.active_view().unwrap();

    assert!(m.close_view(clone));
    assert!(m.services().sessions.lock().session(session).is_some());
    assert_eq!(m.session_map().len(), 1);
    assert_map_matches_layout(&m);
}

#[test]
fn test_split_clones_sessions_without_touching_source() {
    let mut m = test_manager(&Config::default());
    m.new_session();
    m.multi_terminal_vertical().unwrap();
    m.new_session();
    m.multi_terminal_horizontal().unwrap();

    let source = m.splitter().containers()[0].id();
    let before: Vec<String> = m.splitter().containers()[0]
        .tabs()
        .iter()
        .map(|t| t.panes.to_string())
        .collect();
    let source_displays: BTreeSet<DisplayId> =
        m.splitter().containers()[0].displays().into_iter().collect();

    let clone = m.split_left_right().unwrap();
    assert_eq!(m.splitter().active_container_id(), Some(clone));

    let after: Vec<String> = m.splitter().containers()[0]
        .tabs()
        .iter()
        .map(|t| t.panes.to_string())
        .collect();
    assert_eq!(before, after);
    assert_eq!(m.splitter().containers()[0].id(), source);

    let clone_displays: BTreeSet<DisplayId> =
        m.splitter().containers()[1].displays().into_iter().collect();
    assert!(source_displays.is_disjoint(&clone_displays));
    assert_eq!(clone_displays.len(), source_displays.len());
    assert_eq!(container_sessions(&m, 0), container_sessions(&m, 1));
    assert_eq!(container_sessions(&m, 1).len(), 4);
    assert_map_matches_layout(&m);
}

#[test]
fn test_tab_navigation_is_a_ring() {
    let mut m = test_manager(&Config::default());
    for _ in 0..4 {
        m.new_session();
    }
    let container = |m: &term_views::view_manager::ViewManager| {
        m.splitter().active_container().unwrap().current_index()
    };
    assert_eq!(container(&m), Some(3));

    m.next_view();
    assert_eq!(container(&m), Some(0));
    m.previous_view();
    assert_eq!(container(&m), Some(3));
    m.switch_to_view(0);
    m.previous_view();
    assert_eq!(container(&m), Some(3));
    m.next_view();
    m.next_view();
    assert_eq!(container(&m), Some(1));
}

#[test]
fn test_navigation_replugs_controller() {
    let mut m = test_manager(&Config::default());
    m.new_session();
    let second = m.new_session();
    let events = record_events(&mut m);

    m.next_view();
    let plugged = m.active_view_controller().unwrap();
    assert_ne!(m.session_of(plugged), Some(second));
    assert_eq!(
        events.borrow().last(),
        Some(&ViewEvent::ActiveViewChanged(plugged))
    );
}

#[cfg(feature = "detach")]
#[test]
fn test_detaching_split_tab_emits_once_per_session() {
    let mut m = test_manager(&Config::default());
    let first = m.new_session();
    let second = m.new_session();
    let third = m.multi_terminal_vertical().unwrap();
    assert_eq!(m.session_map().len(), 3);

    let events = record_events(&mut m);
    let detached = m.detach_active_view();

    assert_eq!(detached, vec![second, third]);
    assert_eq!(m.session_map().len(), 1);
    assert_eq!(mapped_sessions(&m), BTreeSet::from([first]));
    assert_eq!(
        count_events(&events, |e| matches!(e, ViewEvent::ViewDetached(_))),
        2
    );
    assert_eq!(
        count_events(&events, |e| matches!(e, ViewEvent::SessionClosed(_))),
        0
    );
    let sessions = m.services().sessions.lock();
    assert!(sessions.session(second).is_some_and(|s| !s.has_views()));
    assert!(sessions.session(third).is_some());
    drop(sessions);
    assert_map_matches_layout(&m);
    assert_eq!(m.current_session(), first);
}

#[cfg(feature = "detach")]
#[test]
fn test_detach_of_cloned_session_removes_only_its_tab() {
    let mut m = test_manager(&Config::default());
    m.new_session();
    let session = m.new_session();
    m.split_left_right().unwrap();
    let before = m.session_map().len();

    let events = record_events(&mut m);
    assert_eq!(m.detach_active_view(), vec![session]);
    assert_eq!(m.session_map().len(), before - 1);
    assert_eq!(
        count_events(&events, |e| *e == ViewEvent::ViewDetached(session)),
        1
    );
    // the other container still shows the session
    assert!(m.session_map().values().any(|s| *s == session));
    assert_map_matches_layout(&m);
}

#[cfg(feature = "detach")]
#[test]
fn test_detach_moves_focus_to_populated_container() {
    let mut m = test_manager(&Config::default());
    let session = m.new_session();
    let original = m.splitter().active_container_id().unwrap();
    let clone = m.split_view(SplitDirection::Vertical).unwrap();
    assert_eq!(m.splitter().active_container_id(), Some(clone));

    assert_eq!(m.detach_active_view(), vec![session]);
    assert_eq!(m.splitter().count(), 2);
    assert_eq!(m.splitter().active_container_id(), Some(original));
    assert_eq!(m.current_session(), session);
    let plugged = m.active_view_controller().unwrap();
    assert_eq!(m.session_of(plugged), Some(session));
    assert_map_matches_layout(&m);
}

#[test]
fn test_pane_focus_moves_between_split_panes() {
    let mut m = test_manager(&Config::default());
    let left = m.new_session();
    let right = m.multi_terminal_vertical().unwrap();
    assert_eq!(m.current_session(), right);

    let target = m.move_pane_focus(NavigationDirection::Left).unwrap();
    assert_eq!(m.session_of(target), Some(left));
    assert_eq!(m.current_session(), left);
    assert!(m.move_pane_focus(NavigationDirection::Up).is_none());
    assert!(m.move_pane_focus(NavigationDirection::Right).is_some());
    assert_eq!(m.current_session(), right);
}

#[test]
fn test_emptied_container_is_reclaimed_when_enabled() {
    let mut m = test_manager(&reclaiming_config());
    let session = m.new_session();
    m.split_view(SplitDirection::Horizontal).unwrap();
    assert_eq!(m.splitter().count(), 2);

    let clone = m.active_view().unwrap();
    m.close_view(clone);
    assert_eq!(m.splitter().count(), 1);
    assert_eq!(m.current_session(), session);
    assert_map_matches_layout(&m);
}

#[test]
fn test_emptied_container_is_kept_by_default() {
    let mut m = test_manager(&Config::default());
    let session = m.new_session();
    m.split_left_right().unwrap();
    let clone = m.active_view().unwrap();
    let events = record_events(&mut m);

    m.close_view(clone);
    assert_eq!(m.splitter().count(), 2);
    assert!(!events.borrow().contains(&ViewEvent::Empty));
    // focus leaves the emptied container
    assert_eq!(m.current_session(), session);
    assert!(m.active_view_controller().is_some());
}

#[test]
fn test_last_session_finishing_empties_window() {
    let mut m = test_manager(&Config::default());
    let session = m.new_session();
    m.split_left_right().unwrap();
    let events = record_events(&mut m);

    m.session_finished(session);
    assert!(m.session_map().is_empty());
    assert!(m.splitter().count() >= 1);
    assert!(events.borrow().contains(&ViewEvent::Empty));
    assert_eq!(m.active_view_controller(), None);
}

#[test]
fn test_container_resize_steps() {
    let mut m = test_manager(&Config::default());
    m.new_session();
    assert!(!m.expand_active_container());
    m.split_left_right().unwrap();
    assert!(m.expand_active_container());
    let sizes = m.splitter().sizes().to_vec();
    assert!(sizes[1] > sizes[0]);
    assert!((sizes.iter().sum::<f32>() - 1.0).abs() < 1e-4);
    assert!(m.shrink_active_container());
}

fn pane_widths(m: &term_views::view_manager::ViewManager) -> Vec<f32> {
    m.splitter()
        .active_container()
        .and_then(|c| c.current_tab())
        .map(|tab| tab.panes.layout(PaneBounds::new(0.0, 0.0, 100.0, 50.0), 0.0))
        .unwrap_or_default()
        .into_iter()
        .map(|(_, bounds)| bounds.width)
        .collect()
}

#[test]
fn test_pane_resize_steps() {
    let mut m = test_manager(&Config::default());
    m.new_session();
    assert!(!m.resize_active_pane(NavigationDirection::Right));

    m.multi_terminal_vertical().unwrap();
    assert_eq!(pane_widths(&m), vec![50.0, 50.0]);

    // the focused pane is the right one
    assert!(m.resize_active_pane(NavigationDirection::Right));
    let widths = pane_widths(&m);
    assert!((widths[0] - 45.0).abs() < 1e-3);
    assert!((widths[1] - 55.0).abs() < 1e-3);

    assert_eq!(
        m.trigger_shortcut("Alt+Shift+Left"),
        Some(ViewAction::ResizePane(NavigationDirection::Left))
    );
    assert!((pane_widths(&m)[0] - 50.0).abs() < 1e-3);
}
