//! `PaneTree`: arena-backed binary tree of terminal displays.
//!
//! Nodes live in a `Vec` and are addressed by [`NodeId`]; each node records
//! its parent so removal can collapse a split without walking from the root.
//! Freed slots are reused by later insertions.
//!
//! Sub-modules:
//! - [`edit`]: split, remove, resize and clone
//! - [`navigation`]: layout and directional focus search

mod edit;
mod navigation;

use super::types::{NodeId, PaneNode, SplitDirection};
use crate::types::DisplayId;
use std::fmt;

#[derive(Debug, Clone)]
struct Slot {
    parent: Option<NodeId>,
    node: PaneNode,
}

/// Pane layout of one tab
#[derive(Debug, Clone, Default)]
pub struct PaneTree {
    slots: Vec<Option<Slot>>,
    free: Vec<usize>,
    root: Option<NodeId>,
    focused: Option<DisplayId>,
}

impl PaneTree {
    /// Seed a tree with a single focused display
    pub fn with_root(display: DisplayId) -> Self {
        let mut tree = Self::default();
        let root = tree.alloc(None, PaneNode::Leaf(display));
        tree.root = Some(root);
        tree.focused = Some(display);
        crate::debug_trace!("PANE", "Created pane tree with root display {}", display);
        tree
    }

    /// Root node, `None` once the last display was removed
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Node stored at `id`
    pub fn node(&self, id: NodeId) -> Option<&PaneNode> {
        self.slot(id).map(|slot| &slot.node)
    }

    /// Parent of the node at `id`
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).and_then(|slot| slot.parent)
    }

    /// All displays in leaf order (first child before second child)
    pub fn displays(&self) -> Vec<DisplayId> {
        let mut out = Vec::new();
        if let Some(root) = self.root {
            self.collect_displays(root, &mut out);
        }
        out
    }

    /// Number of displays in the tree
    pub fn len(&self) -> usize {
        self.slots
            .iter()
            .flatten()
            .filter(|slot| matches!(slot.node, PaneNode::Leaf(_)))
            .count()
    }

    /// Check if the tree holds no displays
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Check if `display` is a leaf of this tree
    pub fn contains(&self, display: DisplayId) -> bool {
        self.find_leaf(display).is_some()
    }

    /// The focused display
    pub fn focused_display(&self) -> Option<DisplayId> {
        self.focused
    }

    /// Focus a display; returns false if it is not in the tree
    pub fn focus(&mut self, display: DisplayId) -> bool {
        if self.contains(display) {
            self.focused = Some(display);
            true
        } else {
            false
        }
    }

    pub(crate) fn find_leaf(&self, display: DisplayId) -> Option<NodeId> {
        self.slots.iter().enumerate().find_map(|(idx, slot)| match slot {
            Some(Slot {
                node: PaneNode::Leaf(d),
                ..
            }) if *d == display => Some(NodeId(idx)),
            _ => None,
        })
    }

    /// First display of the subtree rooted at `id`
    pub(crate) fn first_display(&self, mut id: NodeId) -> Option<DisplayId> {
        loop {
            match self.node(id)? {
                PaneNode::Leaf(display) => return Some(*display),
                PaneNode::Split { first, .. } => id = *first,
            }
        }
    }

    fn collect_displays(&self, id: NodeId, out: &mut Vec<DisplayId>) {
        match self.node(id) {
            Some(PaneNode::Leaf(display)) => out.push(*display),
            Some(PaneNode::Split { first, second, .. }) => {
                let (first, second) = (*first, *second);
                self.collect_displays(first, out);
                self.collect_displays(second, out);
            }
            None => {}
        }
    }

    fn slot(&self, id: NodeId) -> Option<&Slot> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut Slot> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    fn alloc(&mut self, parent: Option<NodeId>, node: PaneNode) -> NodeId {
        let slot = Some(Slot { parent, node });
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = slot;
                NodeId(idx)
            }
            None => {
                self.slots.push(slot);
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Option<Slot> {
        let slot = self.slots.get_mut(id.0)?.take();
        if slot.is_some() {
            self.free.push(id.0);
        }
        slot
    }

    fn fmt_node(&self, id: NodeId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node(id) {
            Some(PaneNode::Leaf(display)) => {
                write!(f, "{}", display)?;
                if self.focused == Some(*display) {
                    write!(f, "*")?;
                }
                Ok(())
            }
            Some(PaneNode::Split {
                direction,
                first,
                second,
                ..
            }) => {
                let (sep, tag) = match direction {
                    SplitDirection::Vertical => ("|", "V"),
                    SplitDirection::Horizontal => ("/", "H"),
                };
                write!(f, "({} ", tag)?;
                self.fmt_node(*first, f)?;
                write!(f, " {} ", sep)?;
                self.fmt_node(*second, f)?;
                write!(f, ")")
            }
            None => write!(f, "?"),
        }
    }
}

/// Compact layout rendering: `(V 1* | (H 2 / 3))`, `*` marks focus
impl fmt::Display for PaneTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => self.fmt_node(root, f),
            None => write!(f, "()"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_root() {
        let tree = PaneTree::with_root(7);
        assert_eq!(tree.displays(), vec![7]);
        assert_eq!(tree.focused_display(), Some(7));
        assert_eq!(tree.len(), 1);
        assert!(tree.contains(7));
        assert!(!tree.contains(8));
        assert_eq!(tree.to_string(), "7*");
    }

    #[test]
    fn test_focus_unknown_display_is_rejected() {
        let mut tree = PaneTree::with_root(1);
        assert!(!tree.focus(2));
        assert_eq!(tree.focused_display(), Some(1));
    }

    #[test]
    fn test_display_rendering() {
        let mut tree = PaneTree::with_root(1);
        tree.split(1, 2, SplitDirection::Vertical);
        tree.split(2, 3, SplitDirection::Horizontal);
        assert_eq!(tree.to_string(), "(V 1 | (H 2 / 3*))");
    }
}
