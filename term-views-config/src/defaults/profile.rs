//! Profile defaults.

pub fn profile_name() -> String {
    "Default".to_string()
}

pub fn color_scheme() -> String {
    "Breeze".to_string()
}

pub fn font_family() -> String {
    "Monospace".to_string()
}

pub fn font_size() -> f32 {
    10.0
}

pub fn line_spacing() -> u32 {
    0
}

pub fn terminal_margin() -> u32 {
    1
}

/// Characters considered part of a word for double-click selection
pub fn word_characters() -> String {
    ":@-./_~?&=%+#".to_string()
}

/// Ctrl modifier mask
pub fn url_hints_modifiers() -> u32 {
    0x0400_0000
}
