//! Window-level splitter of tab containers
//!
//! Containers are laid out side by side (or stacked) in a single row: the
//! splitter never nests, and every divider shares one orientation.

use crate::pane::SplitDirection;
use crate::tab::TabContainer;
use crate::types::{ContainerId, DisplayId};

/// Smallest share of the window a container can be shrunk to
const MIN_FRACTION: f32 = 0.05;

/// Ordered containers with one active container
#[derive(Debug, Clone)]
pub struct ViewSplitter {
    containers: Vec<TabContainer>,
    /// Share of the window per container, parallel to `containers`
    sizes: Vec<f32>,
    active: Option<ContainerId>,
    orientation: SplitDirection,
    next_container_id: ContainerId,
}

impl Default for ViewSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSplitter {
    pub fn new() -> Self {
        Self {
            containers: Vec::new(),
            sizes: Vec::new(),
            active: None,
            orientation: SplitDirection::Vertical,
            next_container_id: 1,
        }
    }

    /// Allocate an empty container that is not yet part of the splitter
    pub fn create_container(&mut self) -> TabContainer {
        let id = self.next_container_id;
        self.next_container_id += 1;
        TabContainer::new(id)
    }

    /// Append a container and make it active
    ///
    /// `orientation` applies to every divider of the splitter; sizes are
    /// rebalanced so each container gets an equal share.
    pub fn add_container(&mut self, container: TabContainer, orientation: SplitDirection) {
        let id = container.id();
        self.orientation = orientation;
        self.containers.push(container);
        let share = 1.0 / self.containers.len() as f32;
        self.sizes = vec![share; self.containers.len()];
        self.active = Some(id);
        crate::debug_info!(
            "SPLITTER",
            "Added container {} ({:?}, total: {})",
            id,
            orientation,
            self.containers.len()
        );
    }

    /// Remove a container; refused when it is the only one
    ///
    /// If the active container is removed, the container that follows it in
    /// ring order becomes active.
    pub fn remove_container(&mut self, id: ContainerId) -> Option<TabContainer> {
        if self.containers.len() <= 1 {
            log::debug!("Refusing to remove the last container {}", id);
            return None;
        }
        let idx = self.index_of(id)?;
        let container = self.containers.remove(idx);
        let freed = self.sizes.remove(idx);
        let remaining: f32 = self.sizes.iter().sum();
        if remaining > 0.0 {
            for size in &mut self.sizes {
                *size += freed * (*size / remaining);
            }
        }

        if self.active == Some(id) {
            let next = idx % self.containers.len();
            self.active = Some(self.containers[next].id());
        }
        crate::debug_info!(
            "SPLITTER",
            "Removed container {} (remaining: {})",
            id,
            self.containers.len()
        );
        Some(container)
    }

    /// Activate the next container, wrapping to the first
    pub fn activate_next_container(&mut self) -> Option<ContainerId> {
        let idx = self.active.and_then(|id| self.index_of(id))?;
        let next = self.containers[(idx + 1) % self.containers.len()].id();
        self.active = Some(next);
        Some(next)
    }

    /// Make `id` the active container; returns false if unknown
    pub fn set_active_container(&mut self, id: ContainerId) -> bool {
        if self.index_of(id).is_some() {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    /// Grow (positive) or shrink a container by `percent` of its size
    ///
    /// The difference is taken from, or given to, the other containers in
    /// equal parts. Shares stay above a small minimum and sum to one.
    pub fn adjust_container_size(&mut self, id: ContainerId, percent: i32) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        let count = self.sizes.len();
        if count < 2 {
            return false;
        }

        let old = self.sizes[idx];
        let new = old * (1.0 + percent as f32 / 100.0);
        let per_other = (new - old) / (count - 1) as f32;
        for (i, size) in self.sizes.iter_mut().enumerate() {
            *size = if i == idx { new } else { *size - per_other };
            *size = size.max(MIN_FRACTION);
        }
        let total: f32 = self.sizes.iter().sum();
        for size in &mut self.sizes {
            *size /= total;
        }
        true
    }

    /// Check that no container holds a tab
    pub fn all_containers_empty(&self) -> bool {
        self.containers.iter().all(TabContainer::is_empty)
    }

    /// Container whose tabs hold `display`
    pub fn container_of_display(&self, display: DisplayId) -> Option<ContainerId> {
        self.containers
            .iter()
            .find(|c| c.tab_of_display(display).is_some())
            .map(TabContainer::id)
    }

    pub fn active_container_id(&self) -> Option<ContainerId> {
        self.active
    }

    pub fn active_container(&self) -> Option<&TabContainer> {
        self.active.and_then(|id| self.container(id))
    }

    pub fn active_container_mut(&mut self) -> Option<&mut TabContainer> {
        let id = self.active?;
        self.container_mut(id)
    }

    pub fn container(&self, id: ContainerId) -> Option<&TabContainer> {
        self.containers.iter().find(|c| c.id() == id)
    }

    pub fn container_mut(&mut self, id: ContainerId) -> Option<&mut TabContainer> {
        self.containers.iter_mut().find(|c| c.id() == id)
    }

    pub fn containers(&self) -> &[TabContainer] {
        &self.containers
    }

    pub fn containers_mut(&mut self) -> &mut [TabContainer] {
        &mut self.containers
    }

    /// Ids of all containers, in order
    pub fn container_ids(&self) -> Vec<ContainerId> {
        self.containers.iter().map(TabContainer::id).collect()
    }

    pub fn index_of(&self, id: ContainerId) -> Option<usize> {
        self.containers.iter().position(|c| c.id() == id)
    }

    pub fn count(&self) -> usize {
        self.containers.len()
    }

    pub fn orientation(&self) -> SplitDirection {
        self.orientation
    }

    /// Share of the window per container, in container order
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splitter_with(n: usize) -> ViewSplitter {
        let mut splitter = ViewSplitter::new();
        for _ in 0..n {
            let container = splitter.create_container();
            splitter.add_container(container, SplitDirection::Vertical);
        }
        splitter
    }

    #[test]
    fn test_add_container_activates_and_rebalances() {
        let mut splitter = splitter_with(2);
        assert_eq!(splitter.active_container_id(), Some(2));
        assert_eq!(splitter.sizes(), &[0.5, 0.5]);

        let third = splitter.create_container();
        splitter.add_container(third, SplitDirection::Horizontal);
        assert_eq!(splitter.orientation(), SplitDirection::Horizontal);
        assert_eq!(splitter.count(), 3);
        assert_eq!(splitter.active_container_id(), Some(3));
    }

    #[test]
    fn test_remove_last_container_refused() {
        let mut splitter = splitter_with(1);
        assert!(splitter.remove_container(1).is_none());
        assert_eq!(splitter.count(), 1);
    }

    #[test]
    fn test_remove_active_activates_next_in_ring() {
        let mut splitter = splitter_with(3);
        splitter.set_active_container(2);
        assert!(splitter.remove_container(2).is_some());
        assert_eq!(splitter.active_container_id(), Some(3));

        splitter.set_active_container(3);
        splitter.remove_container(3);
        assert_eq!(splitter.active_container_id(), Some(1));
        assert!((splitter.sizes().iter().sum::<f32>() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_activate_next_container_wraps() {
        let mut splitter = splitter_with(3);
        assert_eq!(splitter.activate_next_container(), Some(1));
        assert_eq!(splitter.activate_next_container(), Some(2));
        assert_eq!(ViewSplitter::new().activate_next_container(), None);
    }

    #[test]
    fn test_adjust_container_size() {
        let mut splitter = splitter_with(2);
        assert!(splitter.adjust_container_size(1, 10));
        let sizes = splitter.sizes();
        assert!(sizes[0] > sizes[1]);
        assert!((sizes[0] + sizes[1] - 1.0).abs() < 1e-5);

        assert!(splitter.adjust_container_size(1, -90));
        assert!(splitter.sizes()[0] >= MIN_FRACTION / 2.0);
        assert!(!splitter_with(1).adjust_container_size(1, 10));
    }

    #[test]
    fn test_all_containers_empty() {
        let splitter = splitter_with(2);
        assert!(splitter.all_containers_empty());
        assert!(splitter.container_of_display(1).is_none());
    }
}
