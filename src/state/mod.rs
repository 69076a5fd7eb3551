//! State transitions.
//!
//! The reducer is a pure function from `(state, action)` to the next state.
//! Derived fields (`total` and the allowed flags) are recomputed here and
//! nowhere else.

mod derived;
mod transition;

pub use derived::{recompute_allowed, recompute_total};
pub use transition::transition;
