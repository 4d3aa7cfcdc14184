//! Core types for the pane tree.

use crate::types::DisplayId;
use std::fmt;

/// Index of a node in a `PaneTree` arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Direction of a split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDirection {
    /// Panes are stacked vertically (split creates top/bottom panes)
    Horizontal,
    /// Panes are side by side (split creates left/right panes)
    Vertical,
}

/// Direction for pane navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Tree node for pane layout
///
/// - Leaf nodes hold a terminal display
/// - Split nodes hold two children with a split direction and ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaneNode {
    /// A leaf node containing a terminal display
    Leaf(DisplayId),
    /// A split containing two child nodes
    Split {
        /// Direction of the split
        direction: SplitDirection,
        /// Split ratio (0.1 to 0.9) - position of divider
        /// For horizontal: ratio is height of first child / total height
        /// For vertical: ratio is width of first child / total width
        ratio: f32,
        /// First child (top for horizontal, left for vertical)
        first: NodeId,
        /// Second child (bottom for horizontal, right for vertical)
        second: NodeId,
    },
}

impl PaneNode {
    /// Display held by a leaf node
    pub fn display(&self) -> Option<DisplayId> {
        match self {
            PaneNode::Leaf(display) => Some(*display),
            PaneNode::Split { .. } => None,
        }
    }
}

/// Bounds of a pane in layout units
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaneBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PaneBounds {
    /// Create new bounds
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the center point of the bounds
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Split into (first, second) along `direction`, leaving `divider` between them
    pub fn split(&self, direction: SplitDirection, ratio: f32, divider: f32) -> (Self, Self) {
        match direction {
            SplitDirection::Horizontal => {
                let first_height = (self.height - divider) * ratio;
                let second_height = self.height - first_height - divider;
                (
                    PaneBounds::new(self.x, self.y, self.width, first_height),
                    PaneBounds::new(
                        self.x,
                        self.y + first_height + divider,
                        self.width,
                        second_height,
                    ),
                )
            }
            SplitDirection::Vertical => {
                let first_width = (self.width - divider) * ratio;
                let second_width = self.width - first_width - divider;
                (
                    PaneBounds::new(self.x, self.y, first_width, self.height),
                    PaneBounds::new(
                        self.x + first_width + divider,
                        self.y,
                        second_width,
                        self.height,
                    ),
                )
            }
        }
    }
}
