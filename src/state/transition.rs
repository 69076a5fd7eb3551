//! The reducer.

use super::derived::{recompute_allowed, recompute_total};
use crate::action::Action;
use crate::error::Result;
use crate::types::{ItemId, WidgetState};

/// Apply an action to a state, producing the next state.
///
/// Pure: the input is never modified. Quantity is not clamped here; the
/// allowed flags tell the view when to stop offering increment/decrement.
/// `SelectItem` recomputes only `total` and leaves the flags as they were.
pub fn transition(state: &WidgetState, action: &Action) -> Result<WidgetState> {
    match action {
        Action::Initialize => {
            let next = recompute_total(state.clone())?;
            Ok(recompute_allowed(next))
        }

        Action::DecrementQuantity => {
            let next = WidgetState {
                quantity: state.quantity - 1,
                ..state.clone()
            };
            let next = recompute_total(next)?;
            Ok(recompute_allowed(next))
        }

        Action::IncrementQuantity => {
            let next = WidgetState {
                quantity: state.quantity + 1,
                ..state.clone()
            };
            let next = recompute_total(next)?;
            Ok(recompute_allowed(next))
        }

        Action::SelectItem { id } => {
            let selected: ItemId = id.parse()?;
            let next = WidgetState {
                selected,
                ..state.clone()
            };
            recompute_total(next)
        }
    }
}
