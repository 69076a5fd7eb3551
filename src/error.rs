//! Error types for the selector state core.

use crate::types::ItemId;
use thiserror::Error;

/// Main error type for transitions and store operations.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("{0} is not a valid action")]
    InvalidAction(String),

    #[error("Invalid item id: {0:?}")]
    InvalidItemId(String),

    #[error("selectItem action is missing an item id")]
    MissingItemId,

    #[error("Item not in catalog: {0}")]
    UnknownItem(ItemId),

    #[error("Catalog must contain at least one item")]
    EmptyCatalog,

    #[error("Duplicate catalog item: {0}")]
    DuplicateItem(ItemId),

    #[error("Quantity out of range: {0}")]
    QuantityOutOfRange(i64),

    #[error("Widget is not mounted")]
    NotMounted,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Result type for selector operations.
pub type Result<T> = std::result::Result<T, WidgetError>;
