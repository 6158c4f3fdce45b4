use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::models::attributes::PassthroughAttributes;
use crate::domain::models::button::{ButtonConfig, ButtonKind, ButtonSize, ButtonVariant};
use crate::shared::errors::{ConfigurationError, Result};
use crate::shared::logging::{log_validation_error, log_validation_success};

/// String-typed button description as it arrives from outside Rust
/// (JSON, templates). Enumerated fields stay plain strings here so that an
/// unknown literal becomes a typed [`ConfigurationError`] in [`validate`].
/// Only an absent `content` counts as missing; empty text is rendered as is.
///
/// [`validate`]: ButtonDescriptor::validate
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ButtonDescriptor {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default)]
    pub outline: bool,
    #[serde(default)]
    pub block: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub loading: bool,
    #[serde(default)]
    pub class_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

/// Descriptor after boundary validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedButton {
    pub config: ButtonConfig,
    /// Text content; `None` only when loading
    pub content: Option<String>,
    pub attributes: PassthroughAttributes,
}

impl ButtonDescriptor {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            let err = ConfigurationError::from(e);
            log_validation_error(&err.to_string());
            err
        })
    }

    pub fn validate(&self) -> Result<ValidatedButton> {
        match self.validate_inner() {
            Ok(button) => {
                log_validation_success(
                    button.config.variant.as_str(),
                    button.config.size.as_str(),
                    button.attributes.len(),
                );
                Ok(button)
            }
            Err(err) => {
                log_validation_error(&err.to_string());
                Err(err)
            }
        }
    }

    fn validate_inner(&self) -> Result<ValidatedButton> {
        let kind = self
            .kind
            .as_deref()
            .map(str::parse::<ButtonKind>)
            .transpose()?
            .unwrap_or_default();
        let variant = self
            .variant
            .as_deref()
            .map(str::parse::<ButtonVariant>)
            .transpose()?
            .unwrap_or_default();
        let size = self
            .size
            .as_deref()
            .map(str::parse::<ButtonSize>)
            .transpose()?
            .unwrap_or_default();

        let content = self.content.clone();
        if content.is_none() && !self.loading {
            return Err(ConfigurationError::MissingContent);
        }

        let attributes = PassthroughAttributes::from_raw(&self.attributes)?;

        Ok(ValidatedButton {
            config: ButtonConfig {
                kind,
                variant,
                size,
                outline: self.outline,
                block: self.block,
                disabled: self.disabled,
                loading: self.loading,
                extra_class: self.class_name.clone(),
            },
            // Discarded while loading, never rendered
            content: if self.loading { None } else { content },
            attributes,
        })
    }
}
