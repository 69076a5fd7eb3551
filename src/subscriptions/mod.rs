//! Subscriptions for live snapshot updates.
//!
//! The store publishes a [`StoreEvent::Snapshot`] after every successful
//! dispatch. A view layer holds a [`SubscriptionHandle`] and re-renders from
//! whatever arrives.
//!
//! Subscriptions use bounded buffers; a subscriber that falls behind or
//! disconnects is dropped rather than blocking dispatch.
//!
//! # Example
//!
//! ```ignore
//! let handle = store.subscribe();
//!
//! loop {
//!     match handle.recv() {
//!         Ok(StoreEvent::Snapshot { state, .. }) => render(&state),
//!         Ok(StoreEvent::Dropped { .. }) | Err(_) => break,
//!     }
//! }
//! ```

mod manager;
mod types;

pub use manager::SubscriptionManager;
pub use types::{DropReason, StoreEvent, SubscriptionConfig, SubscriptionHandle, SubscriptionId};
