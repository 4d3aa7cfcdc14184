//! Color schemes and the color scheme manager.
//!
//! A [`ColorScheme`] carries the fixed 20-entry color table that terminal
//! displays render with, plus opacity, blur and wallpaper settings.
//! [`ColorSchemeManager`] resolves schemes by name and falls back to the
//! default scheme on a failed lookup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of entries in a color table
///
/// Foreground, background, 8 normal colors, intense foreground, intense
/// background, 8 intense colors.
pub const TABLE_COLORS: usize = 20;

/// Name of the scheme used when a lookup fails
pub const DEFAULT_SCHEME_NAME: &str = "Breeze";

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Brightest channel, used for the dark-background heuristic
    fn max_channel(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }
}

/// Seeded background randomization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Randomization {
    /// Maximum channel shift applied to the background
    pub max_shift: u8,
}

/// A named terminal color scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub table: [Color; TABLE_COLORS],
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default)]
    pub blur: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallpaper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub randomization: Option<Randomization>,
}

fn default_opacity() -> f32 {
    1.0
}

impl ColorScheme {
    pub fn foreground(&self) -> Color {
        self.table[0]
    }

    pub fn background(&self) -> Color {
        self.table[1]
    }

    /// Color table for a display, with the background shifted by `seed` when
    /// the scheme randomizes backgrounds
    pub fn color_table(&self, seed: u32) -> [Color; TABLE_COLORS] {
        let mut table = self.table;
        if let Some(random) = self.randomization
            && random.max_shift > 0
        {
            let span = u32::from(random.max_shift) * 2 + 1;
            let mut state = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let mut shift = |channel: u8| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                let offset = ((state >> 16) % span) as i32 - i32::from(random.max_shift);
                (i32::from(channel) + offset).clamp(0, 255) as u8
            };
            let bg = table[1];
            table[1] = Color::rgb(shift(bg.r), shift(bg.g), shift(bg.b));
        }
        table
    }

    /// Whether the background is dark enough for light text
    pub fn has_dark_background(&self) -> bool {
        self.background().max_channel() < 127
    }
}

/// Lookup table of available color schemes
#[derive(Debug, Clone)]
pub struct ColorSchemeManager {
    schemes: HashMap<String, ColorScheme>,
    default_name: String,
}

impl ColorSchemeManager {
    /// Manager preloaded with the built-in schemes
    pub fn new() -> Self {
        let mut manager = Self {
            schemes: HashMap::new(),
            default_name: DEFAULT_SCHEME_NAME.to_string(),
        };
        for scheme in builtin_schemes() {
            manager.add(scheme);
        }
        manager
    }

    /// Add or replace a scheme
    pub fn add(&mut self, scheme: ColorScheme) {
        self.schemes.insert(scheme.name.clone(), scheme);
    }

    pub fn find_color_scheme(&self, name: &str) -> Option<&ColorScheme> {
        self.schemes.get(name)
    }

    pub fn default_color_scheme(&self) -> &ColorScheme {
        self.schemes
            .get(&self.default_name)
            .unwrap_or_else(|| &*BUILTIN_FALLBACK)
    }

    /// Resolve a scheme by name, falling back to the default scheme
    pub fn scheme_or_default(&self, name: &str) -> &ColorScheme {
        match self.find_color_scheme(name) {
            Some(scheme) => scheme,
            None => {
                log::warn!("Color scheme '{}' not found, using default", name);
                self.default_color_scheme()
            }
        }
    }

    /// Scheme names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.schemes.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for ColorSchemeManager {
    fn default() -> Self {
        Self::new()
    }
}

static BUILTIN_FALLBACK: std::sync::LazyLock<ColorScheme> = std::sync::LazyLock::new(breeze);

fn breeze() -> ColorScheme {
    ColorScheme {
        name: DEFAULT_SCHEME_NAME.to_string(),
        description: "Breeze".to_string(),
        table: [
            Color::rgb(0xfc, 0xfc, 0xfc),
            Color::rgb(0x23, 0x26, 0x27),
            Color::rgb(0x23, 0x26, 0x27),
            Color::rgb(0xed, 0x15, 0x15),
            Color::rgb(0x11, 0xd1, 0x16),
            Color::rgb(0xf6, 0x74, 0x00),
            Color::rgb(0x1d, 0x99, 0xf3),
            Color::rgb(0x9b, 0x59, 0xb6),
            Color::rgb(0x1a, 0xbc, 0x9c),
            Color::rgb(0xfc, 0xfc, 0xfc),
            Color::rgb(0xff, 0xff, 0xff),
            Color::rgb(0x31, 0x36, 0x3b),
            Color::rgb(0x7f, 0x8c, 0x8d),
            Color::rgb(0xc0, 0x39, 0x2b),
            Color::rgb(0x1c, 0xdc, 0x9a),
            Color::rgb(0xfd, 0xbc, 0x4b),
            Color::rgb(0x3d, 0xae, 0xe9),
            Color::rgb(0x8e, 0x44, 0xad),
            Color::rgb(0x16, 0xa0, 0x85),
            Color::rgb(0xff, 0xff, 0xff),
        ],
        opacity: 1.0,
        blur: false,
        wallpaper: None,
        randomization: None,
    }
}

fn black_on_white() -> ColorScheme {
    ColorScheme {
        name: "BlackOnWhite".to_string(),
        description: "Black on White".to_string(),
        table: [
            Color::rgb(0x00, 0x00, 0x00),
            Color::rgb(0xff, 0xff, 0xff),
            Color::rgb(0x00, 0x00, 0x00),
            Color::rgb(0xb2, 0x18, 0x18),
            Color::rgb(0x18, 0xb2, 0x18),
            Color::rgb(0xb2, 0x68, 0x18),
            Color::rgb(0x18, 0x18, 0xb2),
            Color::rgb(0xb2, 0x18, 0xb2),
            Color::rgb(0x18, 0xb2, 0xb2),
            Color::rgb(0xb2, 0xb2, 0xb2),
            Color::rgb(0x00, 0x00, 0x00),
            Color::rgb(0xff, 0xff, 0xff),
            Color::rgb(0x68, 0x68, 0x68),
            Color::rgb(0xff, 0x54, 0x54),
            Color::rgb(0x54, 0xff, 0x54),
            Color::rgb(0xff, 0xff, 0x54),
            Color::rgb(0x54, 0x54, 0xff),
            Color::rgb(0xff, 0x54, 0xff),
            Color::rgb(0x54, 0xff, 0xff),
            Color::rgb(0xff, 0xff, 0xff),
        ],
        opacity: 1.0,
        blur: false,
        wallpaper: None,
        randomization: None,
    }
}

fn linux() -> ColorScheme {
    let mut scheme = black_on_white();
    scheme.name = "Linux".to_string();
    scheme.description = "Linux Colors".to_string();
    scheme.table[0] = Color::rgb(0xb2, 0xb2, 0xb2);
    scheme.table[1] = Color::rgb(0x00, 0x00, 0x00);
    scheme.table[10] = Color::rgb(0xff, 0xff, 0xff);
    scheme.table[11] = Color::rgb(0x68, 0x68, 0x68);
    scheme
}

fn builtin_schemes() -> Vec<ColorScheme> {
    vec![breeze(), black_on_white(), linux()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_present() {
        let manager = ColorSchemeManager::new();
        assert_eq!(manager.names(), vec!["BlackOnWhite", "Breeze", "Linux"]);
        assert_eq!(manager.default_color_scheme().name, "Breeze");
    }

    #[test]
    fn test_lookup_falls_back_to_default() {
        let manager = ColorSchemeManager::new();
        assert_eq!(manager.scheme_or_default("Linux").name, "Linux");
        assert_eq!(manager.scheme_or_default("NoSuchScheme").name, "Breeze");
    }

    #[test]
    fn test_dark_background() {
        let manager = ColorSchemeManager::new();
        assert!(manager.scheme_or_default("Breeze").has_dark_background());
        assert!(!manager.scheme_or_default("BlackOnWhite").has_dark_background());
    }

    #[test]
    fn test_color_table_randomization_is_seeded() {
        let mut scheme = breeze();
        assert_eq!(scheme.color_table(7), scheme.table);

        scheme.randomization = Some(Randomization { max_shift: 20 });
        let a = scheme.color_table(31);
        let b = scheme.color_table(31);
        assert_eq!(a, b);
        assert_eq!(a[0], scheme.table[0]);
        let bg = a[1];
        let orig = scheme.table[1];
        assert!((i32::from(bg.r) - i32::from(orig.r)).abs() <= 20);
    }
}
