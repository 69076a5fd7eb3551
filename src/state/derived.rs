//! Derived-field recomputation.

use crate::error::Result;
use crate::types::{WidgetState, MAX_QUANTITY, MIN_QUANTITY};

/// Recompute `total` from the current quantity and selection.
///
/// Fails with `UnknownItem` if the selection is not in the catalog.
pub fn recompute_total(state: WidgetState) -> Result<WidgetState> {
    let unit_value = state.selected_item()?.unit_value;
    let total = state.quantity as f64 * unit_value;
    Ok(WidgetState {
        total: Some(total),
        ..state
    })
}

/// Recompute the decrement/increment flags from the current quantity.
pub fn recompute_allowed(state: WidgetState) -> WidgetState {
    WidgetState {
        decrement_allowed: Some(state.quantity > MIN_QUANTITY),
        increment_allowed: Some(state.quantity < MAX_QUANTITY),
        ..state
    }
}
