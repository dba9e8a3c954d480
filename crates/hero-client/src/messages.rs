//! Message log side channel.
//!
//! An append-only, ordered list of operation outcomes
//! (`"HeroService: fetched heroes"`) with explicit subscriber notification.
//! Every entry is also emitted as a `tracing` event.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Callback invoked with every new message.
pub type Subscriber = Arc<dyn Fn(&str) + Send + Sync>;

/// Handle returned by [`MessageLog::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Inner {
    messages: Vec<String>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

#[derive(Default)]
pub struct MessageLog {
    inner: Mutex<Inner>,
}

impl fmt::Debug for MessageLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("MessageLog")
            .field("messages", &inner.messages)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl MessageLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and notify subscribers in registration order.
    ///
    /// Subscribers run after the lock is released, so they may call back
    /// into the log.
    pub fn add(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(target: "heroes::messages", "{message}");

        let subscribers = {
            let mut inner = self.lock();
            inner.messages.push(message.clone());
            inner
                .subscribers
                .iter()
                .map(|(_, subscriber)| Arc::clone(subscriber))
                .collect::<Vec<_>>()
        };
        for subscriber in subscribers {
            subscriber(&message);
        }
    }

    /// Register a callback for future messages.
    pub fn subscribe(&self, subscriber: impl Fn(&str) + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Arc::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(existing, _)| *existing != id);
        inner.subscribers.len() != before
    }

    /// Snapshot of all messages in append order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lock().messages.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().messages.is_empty()
    }

    /// Empty the display list. Subscribers are kept.
    pub fn clear(&self) {
        self.lock().messages.clear();
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
