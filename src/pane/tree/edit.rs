//! Structural edits for `PaneTree`: split, remove, resize and clone.

use super::{PaneTree, Slot};
use crate::pane::types::{NodeId, PaneNode, SplitDirection};
use crate::types::DisplayId;

/// Ratio given to a fresh split
const DEFAULT_RATIO: f32 = 0.5;

impl PaneTree {
    /// Split the leaf holding `from` into `from` and `new_display`
    ///
    /// The old display stays first (left/top), the new display goes second and
    /// takes focus. Returns false if `from` is missing or `new_display` is
    /// already in the tree.
    pub fn split(
        &mut self,
        from: DisplayId,
        new_display: DisplayId,
        direction: SplitDirection,
    ) -> bool {
        if self.contains(new_display) {
            log::warn!("Display {} is already in the pane tree", new_display);
            return false;
        }
        let Some(leaf) = self.find_leaf(from) else {
            log::warn!("Cannot split: display {} not in pane tree", from);
            return false;
        };

        let first = self.alloc(Some(leaf), PaneNode::Leaf(from));
        let second = self.alloc(Some(leaf), PaneNode::Leaf(new_display));
        if let Some(slot) = self.slot_mut(leaf) {
            slot.node = PaneNode::Split {
                direction,
                ratio: DEFAULT_RATIO,
                first,
                second,
            };
        }
        self.focused = Some(new_display);

        crate::debug_info!(
            "PANE_SPLIT",
            "Split display {} {:?}, new display {}",
            from,
            direction,
            new_display
        );
        true
    }

    /// Remove the leaf holding `display`, collapsing its parent split
    ///
    /// Returns true if the tree is now empty. When the focused display is
    /// removed, focus moves to the first display of the sibling subtree.
    pub fn remove(&mut self, display: DisplayId) -> bool {
        let Some(leaf) = self.find_leaf(display) else {
            crate::debug_info!("PANE_CLOSE", "Display {} not found in tree", display);
            return self.is_empty();
        };

        let parent = self.parent(leaf);
        self.release(leaf);

        let Some(parent) = parent else {
            // Removed the root leaf
            self.root = None;
            self.focused = None;
            self.slots.clear();
            self.free.clear();
            crate::debug_info!("PANE_CLOSE", "Removed last display {}", display);
            return true;
        };

        let sibling = match self.node(parent) {
            Some(PaneNode::Split { first, second, .. }) => {
                if *first == leaf {
                    *second
                } else {
                    *first
                }
            }
            _ => return self.is_empty(),
        };

        // Hoist the sibling into the parent's slot so the grandparent link stays valid
        if let Some(Slot { node, .. }) = self.release(sibling) {
            if let PaneNode::Split { first, second, .. } = node {
                for child in [first, second] {
                    if let Some(slot) = self.slot_mut(child) {
                        slot.parent = Some(parent);
                    }
                }
            }
            if let Some(slot) = self.slot_mut(parent) {
                slot.node = node;
            }
        }

        if self.focused == Some(display) {
            self.focused = self.first_display(parent);
        }

        crate::debug_info!(
            "PANE_CLOSE",
            "Removed display {}, new focus: {:?}",
            display,
            self.focused
        );
        false
    }

    /// Grow (positive `delta`) or shrink the pane of `display` within its
    /// enclosing split
    ///
    /// The ratio is clamped to `0.1..=0.9`. Returns false for a lone display.
    pub fn resize_split(&mut self, display: DisplayId, delta: f32) -> bool {
        let Some(leaf) = self.find_leaf(display) else {
            return false;
        };
        let Some(parent) = self.parent(leaf) else {
            return false;
        };
        match self.slot_mut(parent).map(|slot| &mut slot.node) {
            Some(PaneNode::Split { ratio, first, .. }) => {
                let signed = if *first == leaf { delta } else { -delta };
                *ratio = (*ratio + signed).clamp(0.1, 0.9);
                true
            }
            _ => false,
        }
    }

    /// Structural copy with every display replaced by `map(display)`
    ///
    /// Split directions, ratios and the focus position are preserved; `self`
    /// is left untouched.
    pub fn clone_with<F>(&self, mut map: F) -> PaneTree
    where
        F: FnMut(DisplayId) -> DisplayId,
    {
        let mut clone = PaneTree::default();
        let Some(root) = self.root else {
            return clone;
        };
        let new_root = self.copy_subtree(root, None, &mut clone, &mut map);
        clone.root = Some(new_root);
        clone
    }

    fn copy_subtree<F>(
        &self,
        id: NodeId,
        parent: Option<NodeId>,
        target: &mut PaneTree,
        map: &mut F,
    ) -> NodeId
    where
        F: FnMut(DisplayId) -> DisplayId,
    {
        match self.node(id).copied() {
            Some(PaneNode::Split {
                direction,
                ratio,
                first,
                second,
            }) => {
                // Placeholder children are patched once both subtrees exist
                let node = target.alloc(
                    parent,
                    PaneNode::Split {
                        direction,
                        ratio,
                        first: NodeId(0),
                        second: NodeId(0),
                    },
                );
                let new_first = self.copy_subtree(first, Some(node), target, map);
                let new_second = self.copy_subtree(second, Some(node), target, map);
                if let Some(PaneNode::Split { first, second, .. }) =
                    target.slot_mut(node).map(|slot| &mut slot.node)
                {
                    *first = new_first;
                    *second = new_second;
                }
                node
            }
            Some(PaneNode::Leaf(display)) => {
                let mapped = map(display);
                if self.focused == Some(display) {
                    target.focused = Some(mapped);
                }
                target.alloc(parent, PaneNode::Leaf(mapped))
            }
            None => target.alloc(parent, PaneNode::Leaf(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_panes() -> PaneTree {
        // (V 1 | (H 2 / 3))
        let mut tree = PaneTree::with_root(1);
        assert!(tree.split(1, 2, SplitDirection::Vertical));
        assert!(tree.split(2, 3, SplitDirection::Horizontal));
        tree
    }

    #[test]
    fn test_split_focuses_new_display() {
        let tree = three_panes();
        assert_eq!(tree.displays(), vec![1, 2, 3]);
        assert_eq!(tree.focused_display(), Some(3));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_split_rejects_missing_and_duplicate() {
        let mut tree = PaneTree::with_root(1);
        assert!(!tree.split(9, 2, SplitDirection::Vertical));
        assert!(!tree.split(1, 1, SplitDirection::Vertical));
        assert_eq!(tree.displays(), vec![1]);
    }

    #[test]
    fn test_remove_collapses_parent_into_sibling() {
        let mut tree = three_panes();
        assert!(!tree.remove(2));
        assert_eq!(tree.displays(), vec![1, 3]);
        assert_eq!(tree.to_string(), "(V 1 | 3*)");

        let root = tree.root().unwrap();
        if let Some(PaneNode::Split { first, second, .. }) = tree.node(root) {
            assert_eq!(tree.parent(*first), Some(root));
            assert_eq!(tree.parent(*second), Some(root));
        } else {
            panic!("root should still be a split");
        }
    }

    #[test]
    fn test_remove_focused_moves_focus_to_sibling_subtree() {
        let mut tree = three_panes();
        tree.focus(1);
        assert!(!tree.remove(1));
        // Sibling subtree is (H 2 / 3); its first display takes focus
        assert_eq!(tree.focused_display(), Some(2));
        assert_eq!(tree.to_string(), "(H 2* / 3)");
    }

    #[test]
    fn test_remove_last_display_empties_tree() {
        let mut tree = PaneTree::with_root(4);
        assert!(tree.remove(4));
        assert!(tree.is_empty());
        assert_eq!(tree.focused_display(), None);
        assert!(tree.displays().is_empty());
    }

    #[test]
    fn test_remove_missing_display_is_noop() {
        let mut tree = three_panes();
        assert!(!tree.remove(42));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut tree = three_panes();
        let before = tree.slots.len();
        tree.remove(3);
        tree.split(2, 5, SplitDirection::Horizontal);
        assert_eq!(tree.slots.len(), before);
        assert_eq!(tree.displays(), vec![1, 2, 5]);
    }

    #[test]
    fn test_resize_split_clamps() {
        let mut tree = PaneTree::with_root(1);
        tree.split(1, 2, SplitDirection::Vertical);
        assert!(tree.resize_split(1, 0.3));
        assert!(tree.resize_split(1, 0.3));
        let root = tree.root().unwrap();
        match tree.node(root) {
            Some(PaneNode::Split { ratio, .. }) => assert!((*ratio - 0.9).abs() < f32::EPSILON),
            other => panic!("unexpected node {:?}", other),
        }
        // Growing the second pane shrinks the first
        assert!(tree.resize_split(2, 0.5));
        match tree.node(root) {
            Some(PaneNode::Split { ratio, .. }) => assert!((*ratio - 0.4).abs() < 1e-5),
            other => panic!("unexpected node {:?}", other),
        }
        assert!(!PaneTree::with_root(3).resize_split(3, 0.1));
    }

    #[test]
    fn test_clone_with_preserves_structure_and_focus() {
        let mut tree = three_panes();
        tree.resize_split(1, 0.2);
        tree.focus(2);
        let original = tree.to_string();

        let clone = tree.clone_with(|d| d + 100);
        assert_eq!(clone.displays(), vec![101, 102, 103]);
        assert_eq!(clone.focused_display(), Some(102));
        assert_eq!(clone.to_string(), "(V 101 | (H 102* / 103))");
        assert_eq!(tree.to_string(), original);

        let ratio_of = |t: &PaneTree| match t.root().and_then(|r| t.node(r)) {
            Some(PaneNode::Split { ratio, .. }) => *ratio,
            _ => 0.0,
        };
        assert_eq!(ratio_of(&clone), ratio_of(&tree));
    }
}
