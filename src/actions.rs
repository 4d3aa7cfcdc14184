//! Named view actions and their enabled state
//!
//! Every user-triggerable view operation has a stable name (`next-view`,
//! `switch-to-tab-3`, ...) used by shortcut tables and the CLI script driver.

use crate::pane::NavigationDirection;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of `switch-to-tab-N` actions
pub const SWITCH_TO_TAB_COUNT: u8 = 19;

/// A view operation that can be bound to a shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewAction {
    NextView,
    PreviousView,
    LastTab,
    NextContainer,
    MoveViewLeft,
    MoveViewRight,
    /// Zero-based tab index
    SwitchToTab(u8),
    SplitPaneVertical,
    SplitPaneHorizontal,
    ClosePane,
    FocusPane(NavigationDirection),
    /// Grow (right/down) or shrink (left/up) the focused pane
    ResizePane(NavigationDirection),
    SplitViewLeftRight,
    SplitViewTopBottom,
    CloseActiveView,
    CloseOtherViews,
    ExpandActiveView,
    ShrinkActiveView,
    DetachView,
}

/// Unknown action name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view action '{0}'")]
pub struct ParseActionError(pub String);

impl ViewAction {
    /// Every action, in registration order
    pub fn all() -> Vec<ViewAction> {
        let mut actions = vec![
            ViewAction::NextView,
            ViewAction::PreviousView,
            ViewAction::LastTab,
            ViewAction::NextContainer,
            ViewAction::MoveViewLeft,
            ViewAction::MoveViewRight,
        ];
        actions.extend((0..SWITCH_TO_TAB_COUNT).map(ViewAction::SwitchToTab));
        actions.extend([
            ViewAction::SplitPaneVertical,
            ViewAction::SplitPaneHorizontal,
            ViewAction::ClosePane,
            ViewAction::FocusPane(NavigationDirection::Left),
            ViewAction::FocusPane(NavigationDirection::Up),
            ViewAction::FocusPane(NavigationDirection::Right),
            ViewAction::FocusPane(NavigationDirection::Down),
            ViewAction::ResizePane(NavigationDirection::Left),
            ViewAction::ResizePane(NavigationDirection::Up),
            ViewAction::ResizePane(NavigationDirection::Right),
            ViewAction::ResizePane(NavigationDirection::Down),
            ViewAction::SplitViewLeftRight,
            ViewAction::SplitViewTopBottom,
            ViewAction::CloseActiveView,
            ViewAction::CloseOtherViews,
            ViewAction::ExpandActiveView,
            ViewAction::ShrinkActiveView,
            ViewAction::DetachView,
        ]);
        actions
    }

    /// Stable action name
    pub fn name(&self) -> String {
        match self {
            ViewAction::NextView => "next-view".to_string(),
            ViewAction::PreviousView => "previous-view".to_string(),
            ViewAction::LastTab => "last-tab".to_string(),
            ViewAction::NextContainer => "next-container".to_string(),
            ViewAction::MoveViewLeft => "move-view-left".to_string(),
            ViewAction::MoveViewRight => "move-view-right".to_string(),
            ViewAction::SwitchToTab(n) => format!("switch-to-tab-{n}"),
            ViewAction::SplitPaneVertical => "split-pane-vertical".to_string(),
            ViewAction::SplitPaneHorizontal => "split-pane-horizontal".to_string(),
            ViewAction::ClosePane => "close-pane".to_string(),
            ViewAction::FocusPane(direction) => match direction {
                NavigationDirection::Left => "focus-pane-left".to_string(),
                NavigationDirection::Up => "focus-pane-up".to_string(),
                NavigationDirection::Right => "focus-pane-right".to_string(),
                NavigationDirection::Down => "focus-pane-down".to_string(),
            },
            ViewAction::ResizePane(direction) => match direction {
                NavigationDirection::Left => "resize-pane-left".to_string(),
                NavigationDirection::Up => "resize-pane-up".to_string(),
                NavigationDirection::Right => "resize-pane-right".to_string(),
                NavigationDirection::Down => "resize-pane-down".to_string(),
            },
            ViewAction::SplitViewLeftRight => "split-view-left-right".to_string(),
            ViewAction::SplitViewTopBottom => "split-view-top-bottom".to_string(),
            ViewAction::CloseActiveView => "close-active-view".to_string(),
            ViewAction::CloseOtherViews => "close-other-views".to_string(),
            ViewAction::ExpandActiveView => "expand-active-view".to_string(),
            ViewAction::ShrinkActiveView => "shrink-active-view".to_string(),
            ViewAction::DetachView => "detach-view".to_string(),
        }
    }

    /// Actions disabled when navigation is turned off
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            ViewAction::NextView
                | ViewAction::PreviousView
                | ViewAction::LastTab
                | ViewAction::SplitViewLeftRight
                | ViewAction::SplitViewTopBottom
                | ViewAction::MoveViewLeft
                | ViewAction::MoveViewRight
                | ViewAction::SplitPaneVertical
                | ViewAction::SplitPaneHorizontal
        )
    }

    /// Shortcuts bound by default
    pub fn default_shortcuts(&self) -> &'static [&'static str] {
        match self {
            ViewAction::NextView => &["Shift+Right", "Ctrl+PgDown"],
            ViewAction::PreviousView => &["Shift+Left", "Ctrl+PgUp"],
            ViewAction::NextContainer => &["Shift+Tab"],
            ViewAction::MoveViewLeft => &["Ctrl+Shift+Left"],
            ViewAction::MoveViewRight => &["Ctrl+Shift+Right"],
            ViewAction::SplitPaneVertical => &["Meta+D"],
            ViewAction::SplitPaneHorizontal => &["Meta+Ctrl+D"],
            ViewAction::ClosePane => &["Ctrl+W"],
            ViewAction::FocusPane(NavigationDirection::Left) => &["Alt+Left"],
            ViewAction::FocusPane(NavigationDirection::Up) => &["Alt+Up"],
            ViewAction::FocusPane(NavigationDirection::Right) => &["Alt+Right"],
            ViewAction::FocusPane(NavigationDirection::Down) => &["Alt+Down"],
            ViewAction::ResizePane(NavigationDirection::Left) => &["Alt+Shift+Left"],
            ViewAction::ResizePane(NavigationDirection::Up) => &["Alt+Shift+Up"],
            ViewAction::ResizePane(NavigationDirection::Right) => &["Alt+Shift+Right"],
            ViewAction::ResizePane(NavigationDirection::Down) => &["Alt+Shift+Down"],
            ViewAction::SplitViewLeftRight => &["Ctrl+("],
            ViewAction::SplitViewTopBottom => &["Ctrl+)"],
            ViewAction::CloseActiveView => &["Ctrl+Shift+X"],
            ViewAction::CloseOtherViews => &["Ctrl+Shift+O"],
            ViewAction::ExpandActiveView => &["Ctrl+Shift+]"],
            ViewAction::ShrinkActiveView => &["Ctrl+Shift+["],
            ViewAction::DetachView => &["Ctrl+Shift+H"],
            ViewAction::LastTab | ViewAction::SwitchToTab(_) => &[],
        }
    }
}

impl fmt::Display for ViewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for ViewAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if let Some(index) = name.strip_prefix("switch-to-tab-") {
            return index
                .parse::<u8>()
                .ok()
                .filter(|n| *n < SWITCH_TO_TAB_COUNT)
                .map(ViewAction::SwitchToTab)
                .ok_or_else(|| ParseActionError(name.to_string()));
        }
        ViewAction::all()
            .into_iter()
            .find(|action| action.name() == name)
            .ok_or_else(|| ParseActionError(name.to_string()))
    }
}

#[derive(Debug, Clone)]
struct ActionState {
    enabled: bool,
    shortcuts: Vec<String>,
}

/// Registered actions of one window
#[derive(Debug, Clone)]
pub struct ActionCollection {
    order: Vec<ViewAction>,
    states: HashMap<ViewAction, ActionState>,
}

impl Default for ActionCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionCollection {
    /// Collection with every action enabled and bound to its default shortcuts
    ///
    /// `detach-view` is only registered when the `detach` feature is on.
    pub fn new() -> Self {
        let mut collection = Self {
            order: Vec::new(),
            states: HashMap::new(),
        };
        for action in ViewAction::all() {
            if action == ViewAction::DetachView && !cfg!(feature = "detach") {
                continue;
            }
            collection.add(action);
        }
        collection
    }

    /// Register an action with its default shortcuts
    pub fn add(&mut self, action: ViewAction) {
        if !self.states.contains_key(&action) {
            self.order.push(action);
        }
        self.states.insert(
            action,
            ActionState {
                enabled: true,
                shortcuts: action
                    .default_shortcuts()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
        );
    }

    pub fn contains(&self, action: ViewAction) -> bool {
        self.states.contains_key(&action)
    }

    /// Registered and enabled
    pub fn is_enabled(&self, action: ViewAction) -> bool {
        self.states.get(&action).is_some_and(|s| s.enabled)
    }

    /// Enable or disable an action; returns true if the state changed
    pub fn set_enabled(&mut self, action: ViewAction, enabled: bool) -> bool {
        match self.states.get_mut(&action) {
            Some(state) if state.enabled != enabled => {
                state.enabled = enabled;
                true
            }
            _ => false,
        }
    }

    /// Replace the shortcuts of an action
    pub fn set_shortcuts(&mut self, action: ViewAction, shortcuts: Vec<String>) {
        if let Some(state) = self.states.get_mut(&action) {
            state.shortcuts = shortcuts;
        }
    }

    pub fn shortcuts(&self, action: ViewAction) -> &[String] {
        self.states
            .get(&action)
            .map(|s| s.shortcuts.as_slice())
            .unwrap_or_default()
    }

    /// Enabled action bound to `shortcut` (case-insensitive)
    pub fn action_for_shortcut(&self, shortcut: &str) -> Option<ViewAction> {
        self.order.iter().copied().find(|action| {
            self.is_enabled(*action)
                && self
                    .shortcuts(*action)
                    .iter()
                    .any(|s| s.eq_ignore_ascii_case(shortcut))
        })
    }

    /// Registered actions in registration order
    pub fn actions(&self) -> &[ViewAction] {
        &self.order
    }
}
