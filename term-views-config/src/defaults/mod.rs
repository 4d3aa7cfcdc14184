//! Default value functions for configuration.
//!
//! Each sub-module groups related `default_*` free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on `Config` and
//! `Profile` fields.

mod profile;
mod window;

// ── Profile appearance & behaviour ─────────────────────────────────────────
pub use profile::{
    color_scheme, font_family, font_size, line_spacing, profile_name, terminal_margin,
    url_hints_modifiers, word_characters,
};

// ── Window & session handling ──────────────────────────────────────────────
pub use window::{bool_true, default_profile};
