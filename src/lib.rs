//! # Quantity Selector
//!
//! State core for a quantity selector paired with an item dropdown. The
//! view layer renders snapshots and forwards user intents; everything else
//! lives here.
//!
//! ## Core Concepts
//!
//! - **Actions**: `Initialize`, `IncrementQuantity`, `DecrementQuantity`,
//!   `SelectItem`
//! - **Transition**: a pure reducer that recomputes the derived total and
//!   the increment/decrement flags
//! - **Store**: the single owner of the current state; publishes snapshots
//! - **Mount**: fires `Initialize` once and honors disabled buttons
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use quantity_selector::{Mount, Store, StoreConfig};
//!
//! let store = Arc::new(Store::new(StoreConfig::default()).unwrap());
//! let mount = Mount::new(Arc::clone(&store));
//!
//! mount.on_mount().unwrap();
//! mount.press_increment().unwrap();
//! let state = mount.select("3").unwrap();
//!
//! assert_eq!(state.quantity(), 2);
//! assert_eq!(state.total(), Some(400.0));
//! ```

pub mod action;
pub mod error;
pub mod mount;
pub mod state;
pub mod store;
pub mod subscriptions;
pub mod types;

// Re-exports
pub use action::{Action, RawAction};
pub use error::{Result, WidgetError};
pub use mount::Mount;
pub use state::{recompute_allowed, recompute_total, transition};
pub use store::{Store, StoreConfig};
pub use subscriptions::{
    DropReason, StoreEvent, SubscriptionConfig, SubscriptionHandle, SubscriptionId,
    SubscriptionManager,
};
pub use types::*;
