//! Terminal displays and the settings a profile applies to them
//!
//! A `TerminalDisplay` is bound to one session for its whole life. Its
//! `DisplaySettings` are recomputed from the session's profile and color
//! scheme whenever the profile changes.

use crate::types::{DisplayId, SessionId};
use term_views_config::{
    BellMode, Color, ColorScheme, CursorShape, FontSpec, MiddleClickPasteMode, Profile,
    ScrollBarPosition, TABLE_COLORS, TripleClickMode,
};

/// Rendering and behavior options applied from a profile
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    // Color scheme
    pub color_table: [Color; TABLE_COLORS],
    pub opacity: f32,
    pub wallpaper: Option<String>,

    // Font
    pub antialias: bool,
    pub bold_intense: bool,
    pub use_font_line_characters: bool,
    pub font: FontSpec,
    pub line_spacing: u32,

    // Scrolling
    pub scroll_bar_position: ScrollBarPosition,
    pub scroll_full_page: bool,
    pub mouse_wheel_zoom: bool,
    pub alternate_scrolling: bool,

    pub show_terminal_size_hint: bool,
    pub dim_when_inactive: bool,

    // Terminal features
    pub blinking_cursor: bool,
    pub blinking_text: bool,
    pub triple_click_mode: TripleClickMode,
    pub auto_copy_selected_text: bool,
    pub control_drag: bool,
    pub drop_urls_as_text: bool,
    pub bidi_enabled: bool,
    pub trim_leading_spaces: bool,
    pub trim_trailing_spaces: bool,
    pub open_links_by_direct_click: bool,
    pub url_hints_modifiers: u32,
    pub reverse_url_hints: bool,
    pub middle_click_paste_mode: MiddleClickPasteMode,
    pub copy_text_as_html: bool,

    // Margin/center
    pub margin: u32,
    pub center_contents: bool,

    // Cursor
    pub cursor_shape: CursorShape,
    /// `None` draws the cursor in the text color
    pub cursor_color: Option<Color>,

    pub word_characters: String,
    pub bell_mode: BellMode,
}

impl DisplaySettings {
    /// Settings for a display with the given random seed
    pub fn from_profile(profile: &Profile, scheme: &ColorScheme, seed: u32) -> Self {
        Self {
            color_table: scheme.color_table(seed),
            opacity: scheme.opacity,
            wallpaper: scheme.wallpaper.clone(),

            antialias: profile.antialias_fonts,
            bold_intense: profile.bold_intense,
            use_font_line_characters: profile.use_font_line_characters,
            font: profile.font.clone(),
            line_spacing: profile.line_spacing,

            scroll_bar_position: profile.scroll_bar_position,
            scroll_full_page: profile.scroll_full_page,
            mouse_wheel_zoom: profile.mouse_wheel_zoom,
            alternate_scrolling: profile.alternate_scrolling,

            show_terminal_size_hint: profile.show_terminal_size_hint,
            dim_when_inactive: profile.dim_when_inactive,

            blinking_cursor: profile.blinking_cursor,
            blinking_text: profile.blinking_text,
            triple_click_mode: profile.triple_click_mode,
            auto_copy_selected_text: profile.auto_copy_selected_text,
            control_drag: profile.ctrl_required_for_drag,
            drop_urls_as_text: profile.drop_urls_as_text,
            bidi_enabled: profile.bidi_rendering,
            trim_leading_spaces: profile.trim_leading_spaces,
            trim_trailing_spaces: profile.trim_trailing_spaces,
            open_links_by_direct_click: profile.open_links_by_direct_click,
            url_hints_modifiers: profile.url_hints_modifiers,
            reverse_url_hints: profile.reverse_url_hints,
            middle_click_paste_mode: profile.middle_click_paste_mode,
            copy_text_as_html: profile.copy_text_as_html,

            margin: profile.terminal_margin,
            center_contents: profile.terminal_center,

            cursor_shape: profile.cursor_shape,
            cursor_color: profile.custom_cursor_color,

            word_characters: profile.word_characters.clone(),
            bell_mode: profile.bell_mode,
        }
    }
}

/// A terminal display bound to one session
#[derive(Debug, Clone)]
pub struct TerminalDisplay {
    id: DisplayId,
    session: SessionId,
    random_seed: u32,
    size: (u16, u16),
    settings: Option<DisplaySettings>,
}

impl TerminalDisplay {
    /// Create a display for `session`, seeded from the session id
    pub fn new(id: DisplayId, session: SessionId) -> Self {
        Self {
            id,
            session,
            random_seed: (session as u32).wrapping_mul(31),
            size: (0, 0),
            settings: None,
        }
    }

    pub fn id(&self) -> DisplayId {
        self.id
    }

    /// Session this display was created for
    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn random_seed(&self) -> u32 {
        self.random_seed
    }

    /// Size in (columns, lines)
    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn set_size(&mut self, columns: u16, lines: u16) {
        self.size = (columns, lines);
    }

    /// Settings from the last profile application
    pub fn settings(&self) -> Option<&DisplaySettings> {
        self.settings.as_ref()
    }

    /// Apply a profile and color scheme
    pub fn apply(&mut self, profile: &Profile, scheme: &ColorScheme) {
        self.settings = Some(DisplaySettings::from_profile(profile, scheme, self.random_seed));
    }
}
