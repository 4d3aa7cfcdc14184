//! Pane trees for split terminal displays
//!
//! Every tab holds one `PaneTree`: a binary tree of splits whose leaves are
//! terminal displays. The tree tracks which display has focus and answers
//! directional focus queries.
//!
//! - `PaneTree`: arena-backed tree with split, removal, cloning and navigation
//! - `PaneNode`: a leaf or a split node stored in the arena
//! - `PaneBounds`: layout rectangle used for directional navigation

mod tree;
mod types;

pub use tree::PaneTree;
pub use types::{NavigationDirection, NodeId, PaneBounds, PaneNode, SplitDirection};
