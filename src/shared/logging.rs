//! Structured logging for the button component
//!
//! Keeps field names consistent between render and validation events.

/// Operation a log event belongs to
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Validation,
    Render,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Validation => "validation",
            LogOperation::Render => "render",
        }
    }
}

/// Log a button render
pub fn log_render(class_names: &str, inactive: bool, loading: bool) {
    tracing::trace!(
        operation = LogOperation::Render.as_str(),
        class_names = class_names,
        inactive = inactive,
        loading = loading,
        "Rendering button"
    );
}

/// Log a descriptor that passed validation
pub fn log_validation_success(variant: &str, size: &str, attribute_count: usize) {
    tracing::debug!(
        operation = LogOperation::Validation.as_str(),
        variant = variant,
        size = size,
        attribute_count = attribute_count,
        "Button configuration validated"
    );
}

/// Log a rejected configuration
pub fn log_validation_error(error: &str) {
    tracing::warn!(
        operation = LogOperation::Validation.as_str(),
        error = error,
        "Rejected button configuration"
    );
}
