//! Shared enums used by `Config` and `Profile`.

use serde::{Deserialize, Serialize};

/// Where a new tab is placed in its container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewTabBehavior {
    /// Append after the last tab
    #[default]
    AtEnd,
    /// Insert right after the current tab
    AfterCurrent,
}

/// Whether tab navigation actions are available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationMethod {
    /// Tab and container navigation actions are enabled
    #[default]
    TabbedNavigation,
    /// Navigation actions are disabled (embedded use)
    NoNavigation,
}

/// Visibility of the tab bar in each container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationVisibility {
    #[default]
    NotSet,
    AlwaysShow,
    ShowWhenNeeded,
    AlwaysHide,
}

/// Scroll bar placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBarPosition {
    Left,
    #[default]
    Right,
    Hidden,
}

/// Selection behavior of a triple click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripleClickMode {
    #[default]
    SelectWholeLine,
    SelectForwardsFromCursor,
}

/// Source used by a middle-click paste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MiddleClickPasteMode {
    #[default]
    FromSelection,
    FromClipboard,
}

/// Keyboard cursor shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorShape {
    #[default]
    Block,
    IBeam,
    Underline,
}

/// How the terminal bell is surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BellMode {
    #[default]
    System,
    Notify,
    Visual,
    None,
}

/// Log level used when no CLI flag or `RUST_LOG` is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the `log` crate's filter type
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
