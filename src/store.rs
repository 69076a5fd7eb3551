//! Store: the single owner of the current selector state.

use crate::action::{Action, RawAction};
use crate::error::{Result, WidgetError};
use crate::state::transition;
use crate::subscriptions::{
    StoreEvent, SubscriptionConfig, SubscriptionHandle, SubscriptionId, SubscriptionManager,
};
use crate::types::{Catalog, ItemId, StoreStats, WidgetState, MAX_QUANTITY, MIN_QUANTITY};
use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Store configuration. Stands in for the initial state.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Items offered by the dropdown.
    pub catalog: Catalog,

    /// Quantity shown at mount. Must lie in `[0, 10]`.
    pub initial_quantity: i64,

    /// Item selected at mount (None = first catalog item).
    pub initial_selection: Option<ItemId>,

    /// Settings for subscriptions created via `Store::subscribe`.
    pub subscription: SubscriptionConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog: Catalog::default(),
            initial_quantity: 1,
            initial_selection: None,
            subscription: SubscriptionConfig::default(),
        }
    }
}

impl StoreConfig {
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    /// Check the initial quantity and selection against the catalog.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&self.initial_quantity) {
            return Err(WidgetError::QuantityOutOfRange(self.initial_quantity));
        }
        if let Some(id) = self.initial_selection {
            if !self.catalog.contains(id) {
                return Err(WidgetError::UnknownItem(id));
            }
        }
        Ok(())
    }

    /// The pre-mount state this config describes.
    fn initial_state(&self) -> WidgetState {
        let selected = self
            .initial_selection
            .unwrap_or_else(|| self.catalog.first().id);
        WidgetState::new(self.catalog.clone(), self.initial_quantity, selected)
    }
}

/// The selector store.
///
/// Holds one `WidgetState`, replaces it on every successful dispatch, and
/// publishes the new snapshot to subscribers. Dispatches are serialized;
/// a failed dispatch leaves the held state untouched and publishes nothing.
pub struct Store {
    /// Store configuration.
    config: StoreConfig,

    /// Current snapshot.
    state: RwLock<WidgetState>,

    /// Snapshot listeners.
    subscriptions: SubscriptionManager,

    /// Successful dispatches so far.
    dispatched: AtomicU64,

    /// Failed dispatches so far.
    rejected: AtomicU64,

    /// Lock for dispatch to keep transition + publish atomic.
    write_lock: Mutex<()>,
}

impl Store {
    /// Create a store holding the pre-mount state described by `config`.
    pub fn new(config: StoreConfig) -> Result<Self> {
        config.validate()?;

        let state = config.initial_state();

        Ok(Self {
            config,
            state: RwLock::new(state),
            subscriptions: SubscriptionManager::new(),
            dispatched: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
            write_lock: Mutex::new(()),
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Read-only copy of the current state.
    pub fn snapshot(&self) -> WidgetState {
        self.state.read().clone()
    }

    // --- Dispatch ---

    /// Apply an action and return the resulting snapshot.
    pub fn dispatch(&self, action: Action) -> Result<WidgetState> {
        let _lock = self.write_lock.lock();
        self.apply(action)
    }

    /// Apply an action only if `guard` accepts the current state.
    ///
    /// The guard runs under the same lock as the transition, so no other
    /// dispatch can land between the check and the write. Returns `Ok(None)`
    /// when the guard refuses.
    pub fn dispatch_if<F>(&self, action: Action, guard: F) -> Result<Option<WidgetState>>
    where
        F: FnOnce(&WidgetState) -> bool,
    {
        let _lock = self.write_lock.lock();

        if !guard(&*self.state.read()) {
            debug!(action = action.kind(), "dispatch skipped by guard");
            return Ok(None);
        }

        self.apply(action).map(Some)
    }

    /// Transition, store and publish. Caller must hold `write_lock`.
    fn apply(&self, action: Action) -> Result<WidgetState> {
        let next = match transition(&self.state.read(), &action) {
            Ok(next) => next,
            Err(e) => {
                self.rejected.fetch_add(1, Ordering::SeqCst);
                warn!(action = action.kind(), error = %e, "dispatch rejected");
                return Err(e);
            }
        };

        *self.state.write() = next.clone();
        let sequence = self.dispatched.fetch_add(1, Ordering::SeqCst) + 1;

        debug!(
            action = action.kind(),
            sequence,
            quantity = next.quantity(),
            selected = %next.selected(),
            total = ?next.total(),
            "dispatched"
        );

        self.subscriptions
            .broadcast_snapshot(sequence, action.kind(), &next);

        Ok(next)
    }

    /// Dispatch an untyped action. Unknown kinds fail with `InvalidAction`.
    pub fn dispatch_raw(&self, raw: RawAction) -> Result<WidgetState> {
        match Action::try_from(raw) {
            Ok(action) => self.dispatch(action),
            Err(e) => Err(self.reject(e)),
        }
    }

    /// Dispatch an action given as JSON, e.g. `{"type": "selectItem", "id": "2"}`.
    pub fn dispatch_json(&self, json: &str) -> Result<WidgetState> {
        match Action::from_json(json) {
            Ok(action) => self.dispatch(action),
            Err(e) => Err(self.reject(e)),
        }
    }

    fn reject(&self, error: WidgetError) -> WidgetError {
        self.rejected.fetch_add(1, Ordering::SeqCst);
        warn!(error = %error, "dispatch rejected");
        error
    }

    // --- Subscriptions ---

    /// Subscribe to snapshots using the store's subscription config.
    pub fn subscribe(&self) -> SubscriptionHandle {
        self.subscribe_with(&self.config.subscription)
    }

    /// Subscribe with a custom config.
    pub fn subscribe_with(&self, config: &SubscriptionConfig) -> SubscriptionHandle {
        // Hold the write lock so no dispatch slips between replay and live.
        let _lock = self.write_lock.lock();

        let handle = self.subscriptions.subscribe(config);

        if config.replay_current {
            let event = StoreEvent::Snapshot {
                sequence: self.dispatched.load(Ordering::SeqCst),
                action: None,
                state: self.state.read().clone(),
            };
            self.subscriptions.send_to(handle.id, event);
        }

        handle
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscriptions.unsubscribe(id);
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            dispatched: self.dispatched.load(Ordering::SeqCst),
            rejected: self.rejected.load(Ordering::SeqCst),
            subscribers: self.subscriptions.subscription_count(),
        }
    }
}
