//! Profile types for terminal views.
//!
//! A profile carries the fixed set of visual and behavioral options that the
//! view layer applies to every terminal display of a session started from it.
//!
//! ## Sub-modules
//!
//! - [`manager`]: `ProfileManager`, collection management, default profile and
//!   name lookup with fallback
//! - [`storage`]: YAML persistence of the profile list

mod manager;
mod storage;

pub use manager::ProfileManager;
pub use storage::{load_profiles_from, profiles_path, save_profiles_to};

use crate::color_scheme::Color;
use crate::defaults;
use crate::types::{BellMode, CursorShape, MiddleClickPasteMode, ScrollBarPosition, TripleClickMode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a profile
pub type ProfileId = Uuid;

/// Font family and point size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: defaults::font_family(),
            size: defaults::font_size(),
        }
    }
}

/// A terminal session profile
///
/// Missing fields in a stored profile take the values of [`Profile::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Unique identifier for this profile
    pub id: ProfileId,
    /// Display name, also the lookup key for RPC callers
    pub name: String,
    /// Icon identifier shown on tabs using this profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Display order in the profile list
    pub order: usize,
    /// Working directory for new sessions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    /// Command to run instead of the default shell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Start split panes in the directory of the focused session
    pub start_in_current_session_dir: bool,

    // Appearance
    /// Color scheme name, resolved through `ColorSchemeManager`
    pub color_scheme: String,
    pub font: FontSpec,
    pub antialias_fonts: bool,
    pub bold_intense: bool,
    pub use_font_line_characters: bool,
    pub line_spacing: u32,
    pub terminal_margin: u32,
    pub terminal_center: bool,
    pub dim_when_inactive: bool,
    pub show_terminal_size_hint: bool,

    // Cursor
    pub cursor_shape: CursorShape,
    pub blinking_cursor: bool,
    /// `None` draws the cursor in the text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_cursor_color: Option<Color>,
    pub blinking_text: bool,

    // Scrolling
    pub scroll_bar_position: ScrollBarPosition,
    pub scroll_full_page: bool,
    pub mouse_wheel_zoom: bool,
    pub alternate_scrolling: bool,

    // Selection & mouse
    pub triple_click_mode: TripleClickMode,
    pub word_characters: String,
    pub auto_copy_selected_text: bool,
    pub trim_leading_spaces: bool,
    pub trim_trailing_spaces: bool,
    pub ctrl_required_for_drag: bool,
    pub drop_urls_as_text: bool,
    pub middle_click_paste_mode: MiddleClickPasteMode,
    pub copy_text_as_html: bool,
    pub open_links_by_direct_click: bool,
    pub url_hints_modifiers: u32,
    pub reverse_url_hints: bool,

    // Misc terminal features
    pub bidi_rendering: bool,
    pub bell_mode: BellMode,
}

impl Profile {
    /// Create a profile with default options and a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            icon: None,
            order: 0,
            working_directory: None,
            command: None,
            start_in_current_session_dir: true,
            color_scheme: defaults::color_scheme(),
            font: FontSpec::default(),
            antialias_fonts: true,
            bold_intense: true,
            use_font_line_characters: false,
            line_spacing: defaults::line_spacing(),
            terminal_margin: defaults::terminal_margin(),
            terminal_center: false,
            dim_when_inactive: false,
            show_terminal_size_hint: true,
            cursor_shape: CursorShape::default(),
            blinking_cursor: false,
            custom_cursor_color: None,
            blinking_text: true,
            scroll_bar_position: ScrollBarPosition::default(),
            scroll_full_page: false,
            mouse_wheel_zoom: true,
            alternate_scrolling: true,
            triple_click_mode: TripleClickMode::default(),
            word_characters: defaults::word_characters(),
            auto_copy_selected_text: false,
            trim_leading_spaces: false,
            trim_trailing_spaces: true,
            ctrl_required_for_drag: true,
            drop_urls_as_text: true,
            middle_click_paste_mode: MiddleClickPasteMode::default(),
            copy_text_as_html: true,
            open_links_by_direct_click: false,
            url_hints_modifiers: defaults::url_hints_modifiers(),
            reverse_url_hints: false,
            bidi_rendering: true,
            bell_mode: BellMode::default(),
        }
    }

    /// Builder: set the color scheme name
    pub fn color_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.color_scheme = scheme.into();
        self
    }

    /// Builder: set the working directory
    pub fn working_directory(mut self, dir: impl Into<String>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new(defaults::profile_name())
    }
}
