//! Observer list for "language changed" notifications.
//!
//! Notifications are broadcast to the observers registered at the time of
//! the change, in registration order. Nothing is replayed to observers that
//! subscribe later.

use crate::i18n::LanguageTag;
use std::fmt;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

enum Subscriber {
    Callback(Box<dyn FnMut(&LanguageTag) + Send>),
    Channel(UnboundedSender<LanguageTag>),
}

#[derive(Default)]
pub struct LanguageObservers {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl LanguageObservers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback observer.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&LanguageTag) + Send + 'static,
    {
        self.push(Subscriber::Callback(Box::new(observer)))
    }

    /// Register a channel observer. It is dropped once the receiver closes.
    pub fn subscribe_channel(&mut self) -> UnboundedReceiver<LanguageTag> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.push(Subscriber::Channel(tx));
        rx
    }

    fn push(&mut self, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        id
    }

    /// Remove an observer.
    ///
    /// # Returns
    /// `true` if the observer was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Deliver `tag` to every observer, in registration order.
    pub fn notify(&mut self, tag: &LanguageTag) {
        self.subscribers.retain(|(_, subscriber)| match subscriber {
            Subscriber::Channel(tx) => !tx.is_closed(),
            Subscriber::Callback(_) => true,
        });

        for (_, subscriber) in self.subscribers.iter_mut() {
            match subscriber {
                Subscriber::Callback(observer) => observer(tag),
                Subscriber::Channel(tx) => {
                    // Receiver closed between prune and send
                    let _ = tx.send(tag.clone());
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl fmt::Debug for LanguageObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageObservers")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
