//! Store change notification.
//!
//! Collaborators (renderer, toolbar, minimap) subscribe to receive the full
//! state snapshot after each committed mutation. Registration hands back a
//! [`Subscription`] guard; dropping it (or calling `unsubscribe`) removes
//! the callback exactly once. Nothing is ever released by garbage
//! collection timing.

use crate::store::GraphSnapshot;
use parking_lot::Mutex;
use std::sync::Arc;

type Callback = Box<dyn FnMut(&GraphSnapshot)>;

#[derive(Default)]
struct RegistryInner {
    next_id: u64,
    subscribers: Vec<(u64, Callback)>,
}

/// Ordered registry of snapshot subscribers.
///
/// Notification is synchronous and in registration order; every subscriber
/// observes a fully committed snapshot.
#[derive(Clone, Default)]
pub struct SubscriberRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: impl FnMut(&GraphSnapshot) + 'static) -> Subscription {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Box::new(callback)));

        Subscription {
            registry: Arc::clone(&self.inner),
            id: Some(id),
        }
    }

    pub fn notify(&self, snapshot: &GraphSnapshot) {
        let mut inner = self.inner.lock();
        for (_, callback) in inner.subscribers.iter_mut() {
            callback(snapshot);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().subscribers.is_empty()
    }

    /// Drop every subscriber. Used on editor teardown; outstanding
    /// [`Subscription`] guards become inert.
    pub fn clear(&self) {
        self.inner.lock().subscribers.clear();
    }
}

/// Guard for a registered subscriber.
///
/// Unsubscribes on drop, or earlier through [`Subscription::unsubscribe`];
/// either way the callback is removed at most once.
pub struct Subscription {
    registry: Arc<Mutex<RegistryInner>>,
    id: Option<u64>,
}

impl Subscription {
    /// Remove the callback now. Safe to call more than once.
    pub fn unsubscribe(&mut self) {
        if let Some(id) = self.id.take() {
            self.registry
                .lock()
                .subscribers
                .retain(|(sub_id, _)| *sub_id != id);
        }
    }

    /// Returns true if the callback is still registered.
    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
