//! Subscription manager for broadcasting snapshots.

use crate::types::WidgetState;
use crossbeam_channel::{bounded, Sender, TrySendError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use super::types::{DropReason, StoreEvent, SubscriptionConfig, SubscriptionHandle, SubscriptionId};

/// Internal subscription state.
struct Subscription {
    sender: Sender<StoreEvent>,
}

impl Subscription {
    /// Try to send an event. On failure, returns why the subscriber must go.
    fn try_send(&self, event: StoreEvent) -> Result<(), DropReason> {
        match self.sender.try_send(event) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(DropReason::BufferOverflow),
            Err(TrySendError::Disconnected(_)) => Err(DropReason::Disconnected),
        }
    }
}

/// Manages subscriptions and broadcasts snapshots.
pub struct SubscriptionManager {
    /// Active subscriptions by ID.
    subscriptions: RwLock<HashMap<SubscriptionId, Subscription>>,
    /// Counter for generating subscription IDs.
    next_id: AtomicU64,
}

impl SubscriptionManager {
    /// Create a new subscription manager.
    pub fn new() -> Self {
        Self {
            subscriptions: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a new subscription.
    ///
    /// Replay of the current snapshot is the caller's job (see `send_to`).
    pub fn subscribe(&self, config: &SubscriptionConfig) -> SubscriptionHandle {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let (sender, receiver) = bounded(config.buffer_size.max(1));

        self.subscriptions
            .write()
            .insert(id, Subscription { sender });

        SubscriptionHandle { id, receiver }
    }

    /// Unsubscribe and clean up.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut subs = self.subscriptions.write();
        if let Some(sub) = subs.remove(&id) {
            // Best effort
            let _ = sub.sender.try_send(StoreEvent::Dropped {
                reason: DropReason::Unsubscribed,
            });
        }
    }

    /// Get subscription count.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.read().len()
    }

    /// Broadcast a snapshot to every subscriber.
    pub fn broadcast_snapshot(&self, sequence: u64, action: &str, state: &WidgetState) {
        let event = StoreEvent::Snapshot {
            sequence,
            action: Some(action.to_string()),
            state: state.clone(),
        };

        self.broadcast(event);
    }

    /// Send an event to a single subscription (for replay).
    /// Returns false if the subscription was dropped.
    pub fn send_to(&self, id: SubscriptionId, event: StoreEvent) -> bool {
        let result = {
            let subs = self.subscriptions.read();
            match subs.get(&id) {
                Some(sub) => sub.try_send(event),
                None => return false,
            }
        };

        match result {
            Ok(()) => true,
            Err(reason) => {
                self.drop_subscribers(vec![(id, reason)]);
                false
            }
        }
    }

    /// Internal broadcast helper. Drops subscribers that fail to receive.
    fn broadcast(&self, event: StoreEvent) {
        let mut to_remove = Vec::new();

        {
            let subs = self.subscriptions.read();
            for (id, sub) in subs.iter() {
                if let Err(reason) = sub.try_send(event.clone()) {
                    to_remove.push((*id, reason));
                }
            }
        }

        if !to_remove.is_empty() {
            self.drop_subscribers(to_remove);
        }
    }

    fn drop_subscribers(&self, dropped: Vec<(SubscriptionId, DropReason)>) {
        let mut subs = self.subscriptions.write();
        for (id, reason) in dropped {
            if let Some(sub) = subs.remove(&id) {
                debug!(subscription = id.0, ?reason, "dropping subscriber");
                // Might fail, that's ok
                let _ = sub.sender.try_send(StoreEvent::Dropped { reason });
            }
        }
    }
}

impl Default for SubscriptionManager {
    fn default() -> Self {
        Self::new()
    }
}
