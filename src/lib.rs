// Public API exports
pub mod domain;
pub mod shared;

// Dioxus components and the gallery app
pub mod app;

pub use app::components::{Button, ConfiguredButton, DefaultLoader};
pub use domain::models::{
    ButtonConfig, ButtonDescriptor, ButtonKind, ButtonSize, ButtonVariant, PassthroughAttribute,
    PassthroughAttributes, ValidatedButton,
};
pub use shared::errors::ConfigurationError;
