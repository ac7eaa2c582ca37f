#![forbid(unsafe_code)]

//! Synchronous subscriber registry.
//!
//! [`Subscribers`] is the notification fan-out primitive shared by the
//! collection and property types: an ordered list of callbacks, each
//! identified by an opaque [`SubscriberId`] handle returned at
//! registration time.
//!
//! # How it works
//!
//! 1. A host calls `subscribe` with a callback and keeps the returned id
//! 2. `emit` invokes every live callback with a borrowed event, in
//!    registration order
//! 3. The host calls `unsubscribe` with its id before it is discarded,
//!    so no callback outlives the state it captures
//!
//! # Design Notes
//!
//! - Delivery is synchronous and single-threaded; callbacks run on the
//!   caller's (UI) thread inside the emitting operation
//! - Callbacks must not re-enter the object that is emitting to them
//! - Ids are never reused within a registry, so a stale id held after
//!   `unsubscribe` can only ever fail to match

use core::fmt;

/// A unique identifier for a registered subscriber.
///
/// Returned by [`Subscribers::subscribe`] and required by
/// [`Subscribers::unsubscribe`]. Ids are unique per registry for its
/// whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscriber#{}", self.0)
    }
}

/// An ordered registry of event callbacks.
///
/// Events of type `E` are delivered by shared reference to every
/// registered callback, in registration order.
pub struct Subscribers<E> {
    next_id: u64,
    entries: Vec<(SubscriberId, Box<dyn FnMut(&E)>)>,
}

impl<E> fmt::Debug for Subscribers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Subscribers<E> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Register a callback and return its handle.
    ///
    /// The handle is required to unregister the callback later; hosts
    /// should unsubscribe before tearing down whatever the callback
    /// captures.
    pub fn subscribe(&mut self, callback: impl FnMut(&E) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        #[cfg(feature = "tracing")]
        tracing::trace!(id = id.0, subscribers = self.entries.len(), "subscribed");
        id
    }

    /// Remove a previously registered callback.
    ///
    /// Returns `true` if the id was registered, `false` if it was
    /// unknown (already unsubscribed, or from another registry).
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        let removed = self.entries.len() != before;
        #[cfg(feature = "tracing")]
        tracing::trace!(id = id.0, removed, "unsubscribed");
        removed
    }

    /// Deliver an event to every registered callback, in registration
    /// order.
    pub fn emit(&mut self, event: &E) {
        for (_, callback) in &mut self.entries {
            callback(event);
        }
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every registered callback at once.
    ///
    /// Bulk teardown for hosts that own the registry outright.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
