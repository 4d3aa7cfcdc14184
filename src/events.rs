//! Notifications emitted by a view manager
//!
//! Listeners register a callback with [`Observers::subscribe`] and receive
//! every [`ViewEvent`] in emission order. The application root subscribes a
//! forwarder that buffers events for its own loop to drain.

use crate::tab::ViewProperties;
use crate::types::{ControllerId, SessionId};

/// Something a window needs to react to
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Focus moved to a different session controller; window actions should be replugged
    ActiveViewChanged(ControllerId),
    /// The plugged controller's session finished; its actions must be removed
    UnplugController(ControllerId),
    /// A session was taken out of this window and needs a new one
    ViewDetached(SessionId),
    /// The window was split or unsplit; true when more than one container exists
    SplitViewToggled(bool),
    /// Properties of the active container's tabs changed
    ViewPropertiesChanged(Vec<ViewProperties>),
    /// A session lost its last view and was closed
    SessionClosed(SessionId),
    /// Every container of the window is empty
    Empty,
    /// The window icon should be refreshed
    UpdateWindowIcon,
    /// Background blur of the applied color scheme
    BlurSettingChanged(bool),
}

/// Handle returned by [`Observers::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&ViewEvent)>;

/// Ordered list of event listeners
#[derive(Default)]
pub struct Observers {
    listeners: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ViewEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(callback)));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Deliver an event to every listener in subscription order
    pub fn emit(&mut self, event: ViewEvent) {
        crate::debug_trace!("EVENT", "{:?}", event);
        for (_, callback) in &mut self.listeners {
            callback(&event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
