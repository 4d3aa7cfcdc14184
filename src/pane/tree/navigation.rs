//! Layout and directional focus search for `PaneTree`.

use super::PaneTree;
use crate::pane::types::{NavigationDirection, NodeId, PaneBounds, PaneNode};
use crate::types::DisplayId;

/// Virtual area used when no real geometry is known
const VIRTUAL_SIZE: f32 = 1000.0;

impl PaneTree {
    /// Bounds of every display when the tree fills `bounds`
    ///
    /// Space is distributed recursively according to split ratios; displays
    /// are returned in leaf order.
    pub fn layout(&self, bounds: PaneBounds, divider_width: f32) -> Vec<(DisplayId, PaneBounds)> {
        let mut out = Vec::new();
        if let Some(root) = self.root {
            self.layout_node(root, bounds, divider_width, &mut out);
        }
        out
    }

    fn layout_node(
        &self,
        id: NodeId,
        bounds: PaneBounds,
        divider_width: f32,
        out: &mut Vec<(DisplayId, PaneBounds)>,
    ) {
        match self.node(id) {
            Some(PaneNode::Leaf(display)) => out.push((*display, bounds)),
            Some(PaneNode::Split {
                direction,
                ratio,
                first,
                second,
            }) => {
                let (first_bounds, second_bounds) = bounds.split(*direction, *ratio, divider_width);
                let (first, second) = (*first, *second);
                self.layout_node(first, first_bounds, divider_width, out);
                self.layout_node(second, second_bounds, divider_width, out);
            }
            None => {}
        }
    }

    /// Find the closest display in a given direction from `from`
    ///
    /// Only displays whose centers lie strictly in `direction` qualify; among
    /// them the nearest by Manhattan distance wins, with the off-axis offset
    /// weighted double. Returns `None` if there is no display that way.
    pub fn display_in_direction(
        &self,
        from: DisplayId,
        direction: NavigationDirection,
    ) -> Option<DisplayId> {
        let layout = self.layout(
            PaneBounds::new(0.0, 0.0, VIRTUAL_SIZE, VIRTUAL_SIZE),
            0.0,
        );
        let from_center = layout
            .iter()
            .find(|(display, _)| *display == from)
            .map(|(_, bounds)| bounds.center())?;

        let mut best: Option<(DisplayId, f32)> = None;

        for (display, bounds) in &layout {
            if *display == from {
                continue;
            }

            let center = bounds.center();
            let is_in_direction = match direction {
                NavigationDirection::Left => center.0 < from_center.0,
                NavigationDirection::Right => center.0 > from_center.0,
                NavigationDirection::Up => center.1 < from_center.1,
                NavigationDirection::Down => center.1 > from_center.1,
            };
            if !is_in_direction {
                continue;
            }

            let dx = (center.0 - from_center.0).abs();
            let dy = (center.1 - from_center.1).abs();
            let distance = match direction {
                NavigationDirection::Left | NavigationDirection::Right => dx + dy * 2.0,
                NavigationDirection::Up | NavigationDirection::Down => dy + dx * 2.0,
            };

            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((*display, distance));
            }
        }

        best.map(|(display, _)| display)
    }

    /// Move focus to the display in `direction`; returns the new focus
    pub fn navigate(&mut self, direction: NavigationDirection) -> Option<DisplayId> {
        let focused = self.focused?;
        let target = self.display_in_direction(focused, direction)?;
        self.focused = Some(target);
        log::debug!(
            "Navigated {:?} from display {} to display {}",
            direction,
            focused,
            target
        );
        Some(target)
    }
}
