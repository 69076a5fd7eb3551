//! View-side adapter around a store.
//!
//! A view layer renders snapshots and forwards user intents. `Mount` is the
//! piece of that boundary that lives in this crate: it fires `Initialize`
//! exactly once however many times the view re-renders, and it refuses
//! increment/decrement the way disabled buttons would.

use crate::action::Action;
use crate::error::{Result, WidgetError};
use crate::store::Store;
use crate::types::WidgetState;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// One-shot mount guard plus button semantics for a store.
pub struct Mount {
    store: Arc<Store>,
    /// Set only once `Initialize` has been applied.
    mounted: AtomicBool,
    /// Serializes concurrent `on_mount` calls.
    mount_lock: Mutex<()>,
}

impl Mount {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            mounted: AtomicBool::new(false),
            mount_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Call on every render. Dispatches `Initialize` the first time only.
    ///
    /// Returns the initialized snapshot on the first call, `None` after.
    /// Button intents stay `NotMounted` until `Initialize` has landed.
    pub fn on_mount(&self) -> Result<Option<WidgetState>> {
        if self.is_mounted() {
            return Ok(None);
        }

        let _lock = self.mount_lock.lock();
        if self.is_mounted() {
            return Ok(None);
        }

        let state = self.store.dispatch(Action::Initialize)?;
        self.mounted.store(true, Ordering::SeqCst);

        info!(
            quantity = state.quantity(),
            selected = %state.selected(),
            "selector mounted"
        );
        Ok(Some(state))
    }

    /// The "-" button. Does nothing while decrement is disallowed.
    pub fn press_decrement(&self) -> Result<WidgetState> {
        self.press(Action::DecrementQuantity, |s| {
            s.decrement_allowed() != Some(false)
        })
    }

    /// The "+" button. Does nothing while increment is disallowed.
    pub fn press_increment(&self) -> Result<WidgetState> {
        self.press(Action::IncrementQuantity, |s| {
            s.increment_allowed() != Some(false)
        })
    }

    fn press<F>(&self, action: Action, enabled: F) -> Result<WidgetState>
    where
        F: FnOnce(&WidgetState) -> bool,
    {
        self.ensure_mounted()?;
        match self.store.dispatch_if(action, enabled)? {
            Some(state) => Ok(state),
            None => {
                let current = self.store.snapshot();
                debug!(quantity = current.quantity(), "button disabled");
                Ok(current)
            }
        }
    }

    /// The dropdown's change event, carrying the option value as a string.
    pub fn select(&self, raw_id: &str) -> Result<WidgetState> {
        self.ensure_mounted()?;
        self.store.dispatch(Action::select(raw_id))
    }

    fn ensure_mounted(&self) -> Result<()> {
        if self.is_mounted() {
            Ok(())
        } else {
            Err(WidgetError::NotMounted)
        }
    }
}
