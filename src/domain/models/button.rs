use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::services::class_names::compose_class_names;
use crate::shared::errors::ConfigurationError;

/// HTML `type` of the rendered button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonKind::Button => "button",
            ButtonKind::Submit => "submit",
            ButtonKind::Reset => "reset",
        }
    }
}

impl std::fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "button" => Ok(ButtonKind::Button),
            "submit" => Ok(ButtonKind::Submit),
            "reset" => Ok(ButtonKind::Reset),
            _ => Err(ConfigurationError::UnknownKind(s.to_string())),
        }
    }
}

/// Colour scheme of the button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
    Link,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 9] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Success,
        ButtonVariant::Danger,
        ButtonVariant::Warning,
        ButtonVariant::Info,
        ButtonVariant::Light,
        ButtonVariant::Dark,
        ButtonVariant::Link,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Success => "success",
            ButtonVariant::Danger => "danger",
            ButtonVariant::Warning => "warning",
            ButtonVariant::Info => "info",
            ButtonVariant::Light => "light",
            ButtonVariant::Dark => "dark",
            ButtonVariant::Link => "link",
        }
    }
}

impl std::fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonVariant {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ButtonVariant::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| ConfigurationError::UnknownVariant(s.to_string()))
    }
}

/// Button size. `Medium` is the implicit default and has no class token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ButtonSize {
    #[serde(rename = "sm", alias = "small")]
    Small,
    #[default]
    #[serde(rename = "md", alias = "medium")]
    Medium,
    #[serde(rename = "lg", alias = "large")]
    Large,
}

impl ButtonSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Small => "sm",
            ButtonSize::Medium => "md",
            ButtonSize::Large => "lg",
        }
    }
}

impl std::fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonSize {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" | "small" => Ok(ButtonSize::Small),
            "md" | "medium" => Ok(ButtonSize::Medium),
            "lg" | "large" => Ok(ButtonSize::Large),
            _ => Err(ConfigurationError::UnknownSize(s.to_string())),
        }
    }
}

/// Style-relevant part of a button render: everything except the
/// renderable content, loader and forwarded attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ButtonConfig {
    pub kind: ButtonKind,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub outline: bool,
    pub block: bool,
    pub disabled: bool,
    pub loading: bool,
    /// Appended verbatim after the generated tokens
    pub extra_class: String,
}

impl ButtonConfig {
    /// Loading visually and semantically disables the control
    pub fn is_inactive(&self) -> bool {
        self.disabled || self.loading
    }

    pub fn class_names(&self) -> String {
        compose_class_names(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_component_defaults() {
        let config = ButtonConfig::default();
        assert_eq!(config.kind, ButtonKind::Button);
        assert_eq!(config.variant, ButtonVariant::Primary);
        assert_eq!(config.size, ButtonSize::Medium);
        assert!(!config.outline && !config.block && !config.disabled && !config.loading);
        assert!(config.extra_class.is_empty());
    }

    #[test]
    fn test_inactive_when_disabled_or_loading() {
        let mut config = ButtonConfig::default();
        assert!(!config.is_inactive());

        config.disabled = true;
        assert!(config.is_inactive());

        config.disabled = false;
        config.loading = true;
        assert!(config.is_inactive());
    }

    #[test]
    fn test_variant_from_str_accepts_every_literal() {
        for variant in ButtonVariant::ALL {
            assert_eq!(variant.as_str().parse::<ButtonVariant>().unwrap(), variant);
        }
    }

    #[test]
    fn test_variant_from_str_rejects_unknown() {
        let err = "purple".parse::<ButtonVariant>().unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownVariant(ref v) if v == "purple"));
    }

    #[test]
    fn test_size_accepts_short_and_long_literals() {
        assert_eq!("sm".parse::<ButtonSize>().unwrap(), ButtonSize::Small);
        assert_eq!("large".parse::<ButtonSize>().unwrap(), ButtonSize::Large);
        assert_eq!("md".parse::<ButtonSize>().unwrap(), ButtonSize::Medium);
        assert!(matches!(
            "xl".parse::<ButtonSize>(),
            Err(ConfigurationError::UnknownSize(_))
        ));
    }

    #[test]
    fn test_kind_is_case_sensitive() {
        assert_eq!("submit".parse::<ButtonKind>().unwrap(), ButtonKind::Submit);
        assert!(matches!(
            "Submit".parse::<ButtonKind>(),
            Err(ConfigurationError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_serde_uses_literals() {
        assert_eq!(serde_json::to_string(&ButtonSize::Large).unwrap(), "\"lg\"");
        assert_eq!(serde_json::to_string(&ButtonVariant::Danger).unwrap(), "\"danger\"");
        let size: ButtonSize = serde_json::from_str("\"small\"").unwrap();
        assert_eq!(size, ButtonSize::Small);
    }
}
