//! Identifier types shared across the view layer.

/// Session identifier assigned by the session registry (always positive)
pub type SessionId = i32;

/// Identifier a session is saved under in the restore file
pub type RestoreId = i32;

/// Terminal display identifier, unique across all windows
pub type DisplayId = u64;

/// Tab identifier, unique within its container
pub type TabId = u64;

/// Container identifier, unique within its splitter
pub type ContainerId = u64;

/// Controller identifier; a controller is keyed by the display it controls
pub type ControllerId = DisplayId;

/// Window (view manager) identifier allocated by the window registry
pub type ManagerId = u32;

/// Session id returned to RPC callers when an operation fails
pub const INVALID_SESSION: SessionId = -1;
