// Domain models
// Pure Rust, no framework dependencies

pub mod attributes;
pub mod button;
pub mod descriptor;

pub use attributes::{PassthroughAttribute, PassthroughAttributes};
pub use button::{ButtonConfig, ButtonKind, ButtonSize, ButtonVariant};
pub use descriptor::{ButtonDescriptor, ValidatedButton};
