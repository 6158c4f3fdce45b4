use thiserror::Error;

/// Caller supplied a button configuration that breaks the component contract.
///
/// Raised at the boundary (parsing literals, validating a descriptor) and
/// never retried: the caller fixes the configuration for the next render.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Unknown button type: {0} (expected button, submit or reset)")]
    UnknownKind(String),

    #[error("Unknown button variant: {0}")]
    UnknownVariant(String),

    #[error("Unknown button size: {0} (expected sm, md or lg)")]
    UnknownSize(String),

    #[error("Button content is required when not loading")]
    MissingContent,

    #[error("Attribute not allowed on button: {0}")]
    DisallowedAttribute(String),

    #[error("Invalid button configuration JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
