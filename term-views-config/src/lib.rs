//! Configuration system for term-views.
//!
//! This crate provides configuration loading, saving, and default values
//! for the view layer. It includes:
//!
//! - Window-level configuration (tab placement, navigation, restore)
//! - Profile types and the profile manager
//! - Color scheme definitions and the color scheme manager
//! - Typed configuration errors

pub mod color_scheme;
pub mod config;
pub mod defaults;
pub mod error;
pub mod profile;
pub mod types;

pub use color_scheme::{
    Color, ColorScheme, ColorSchemeManager, DEFAULT_SCHEME_NAME, Randomization, TABLE_COLORS,
};
pub use config::Config;
pub use error::ConfigError;
pub use profile::{
    FontSpec, Profile, ProfileId, ProfileManager, load_profiles_from, save_profiles_to,
};
pub use types::{
    BellMode, CursorShape, LogLevel, MiddleClickPasteMode, NavigationMethod,
    NavigationVisibility, NewTabBehavior, ScrollBarPosition, TripleClickMode,
};
