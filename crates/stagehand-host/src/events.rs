//! Host lifecycle events and handler subscriptions

/// Trigger points the host invokes Stagehand at.
///
/// All dispatch is synchronous on the host's single-threaded context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// High-frequency editor update callback
    Tick,
    /// The tool window or editor regained focus
    FocusGained,
    /// The host's build configuration list changed
    BuildListChanged,
    /// A scene finished opening in the host
    SceneOpened { path: String },
}

/// Registry of event handlers, invoked in registration order.
#[derive(Default)]
pub struct Subscriptions {
    handlers: Vec<Box<dyn FnMut(&HostEvent)>>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for all host events
    pub fn subscribe<F: FnMut(&HostEvent) + 'static>(&mut self, handler: F) {
        self.handlers.push(Box::new(handler));
    }

    /// Invoke every handler with `event`, in registration order
    pub fn emit(&mut self, event: &HostEvent) {
        for handler in &mut self.handlers {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
