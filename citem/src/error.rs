use thiserror::Error;

/// Errors raised while building, registering or restoring custom items.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomItemError {
    /// The item needs more parameters than `get_item` can take. The
    /// descriptor offers its own factory instead.
    #[error("Custom item {0} cannot be created without extra parameters, use its own factory")]
    UnsupportedFactory(String),

    #[error("Custom item identifiers must not be empty")]
    EmptyIdentifier,

    #[error("A custom item with identifier {0} is already registered")]
    DuplicateIdentifier(String),

    #[error("Custom item {expected} produced an item tagged {found:?}")]
    TagMismatch {
        expected: String,
        found: Option<String>,
    },

    #[error("No custom item registered with identifier {0}")]
    UnknownIdentifier(String),

    #[error("Unknown item {0}")]
    UnknownItem(String),

    #[error("Malformed item stack: {0}")]
    MalformedStack(&'static str),
}
