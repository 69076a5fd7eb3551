//! Actions dispatched to the store.
//!
//! [`Action`] is the typed form the reducer matches on. [`RawAction`] is the
//! untyped `{"type": ..., "id": ...}` form a view layer produces; converting
//! it is where unrecognized kinds are rejected.

use crate::error::{Result, WidgetError};
use serde::{Deserialize, Serialize};

pub const INIT: &str = "init";
pub const DECREMENT_QUANTITY: &str = "decrementQuantity";
pub const INCREMENT_QUANTITY: &str = "incrementQuantity";
pub const SELECT_ITEM: &str = "selectItem";

/// A user intent (or the mount signal) for the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Populate derived fields. Sent once on mount.
    Initialize,
    DecrementQuantity,
    IncrementQuantity,
    /// Select an item by the raw id string the dropdown reports.
    SelectItem { id: String },
}

impl Action {
    pub fn select(id: impl Into<String>) -> Self {
        Action::SelectItem { id: id.into() }
    }

    /// Wire name of this action kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Initialize => INIT,
            Action::DecrementQuantity => DECREMENT_QUANTITY,
            Action::IncrementQuantity => INCREMENT_QUANTITY,
            Action::SelectItem { .. } => SELECT_ITEM,
        }
    }

    /// Parse an action from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawAction =
            serde_json::from_str(json).map_err(|e| WidgetError::Deserialization(e.to_string()))?;
        Action::try_from(raw)
    }
}

/// Untyped action as produced by a view layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl RawAction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl TryFrom<RawAction> for Action {
    type Error = WidgetError;

    fn try_from(raw: RawAction) -> Result<Self> {
        match raw.kind.as_str() {
            INIT => Ok(Action::Initialize),
            DECREMENT_QUANTITY => Ok(Action::DecrementQuantity),
            INCREMENT_QUANTITY => Ok(Action::IncrementQuantity),
            SELECT_ITEM => match raw.id {
                Some(id) => Ok(Action::SelectItem { id }),
                None => Err(WidgetError::MissingItemId),
            },
            _ => Err(WidgetError::InvalidAction(raw.kind)),
        }
    }
}

impl From<Action> for RawAction {
    fn from(action: Action) -> Self {
        let raw = RawAction::new(action.kind());
        match action {
            Action::SelectItem { id } => raw.with_id(id),
            _ => raw,
        }
    }
}
