// Library exports for the view layer and its integration tests
//
// # Ownership and locking
//
// Each window (`ViewManager`) owns its splitter, displays and session map.
// Sessions, profiles and color schemes are shared between windows through
// `Services`, which wraps them in `parking_lot` locks:
//
//   - `Mutex<SessionManager>`       : sessions are mutated by every window.
//   - `RwLock<ProfileManager>`      : read on every view creation, written
//                                     only when a profile is edited.
//   - `RwLock<ColorSchemeManager>`  : read-mostly, like profiles.
//
// Locks are scoped to a single statement or block and are never held while
// window observers run. When more than one is needed they are taken in the
// order `profiles`, `color_schemes`, `sessions`.

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod actions;
pub mod app;
pub mod cli;
pub mod display;
pub mod events;
pub mod pane;
pub mod services;
pub mod session;
pub mod splitter;
pub mod tab;
pub mod types;
pub mod view_manager;
pub mod window_adaptor;
