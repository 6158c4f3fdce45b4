//! Attributes forwarded unmodified to the rendered `<button>`
//!
//! Closed allow-list for the HTML host: anything outside
//! [`PassthroughAttribute`] is rejected at the boundary.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::shared::errors::{ConfigurationError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PassthroughAttribute {
    Id,
    Title,
    Name,
    Value,
    Form,
    TabIndex,
    AriaLabel,
    AriaDescribedBy,
    AriaControls,
    AriaExpanded,
    AriaPressed,
}

impl PassthroughAttribute {
    pub const ALL: [PassthroughAttribute; 11] = [
        PassthroughAttribute::Id,
        PassthroughAttribute::Title,
        PassthroughAttribute::Name,
        PassthroughAttribute::Value,
        PassthroughAttribute::Form,
        PassthroughAttribute::TabIndex,
        PassthroughAttribute::AriaLabel,
        PassthroughAttribute::AriaDescribedBy,
        PassthroughAttribute::AriaControls,
        PassthroughAttribute::AriaExpanded,
        PassthroughAttribute::AriaPressed,
    ];

    /// HTML attribute name
    pub fn as_str(&self) -> &'static str {
        match self {
            PassthroughAttribute::Id => "id",
            PassthroughAttribute::Title => "title",
            PassthroughAttribute::Name => "name",
            PassthroughAttribute::Value => "value",
            PassthroughAttribute::Form => "form",
            PassthroughAttribute::TabIndex => "tabindex",
            PassthroughAttribute::AriaLabel => "aria-label",
            PassthroughAttribute::AriaDescribedBy => "aria-describedby",
            PassthroughAttribute::AriaControls => "aria-controls",
            PassthroughAttribute::AriaExpanded => "aria-expanded",
            PassthroughAttribute::AriaPressed => "aria-pressed",
        }
    }
}

impl std::fmt::Display for PassthroughAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PassthroughAttribute {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PassthroughAttribute::ALL
            .into_iter()
            .find(|attr| attr.as_str() == s)
            .ok_or_else(|| ConfigurationError::DisallowedAttribute(s.to_string()))
    }
}

/// Mapping of allowed attribute to its (uninterpreted) value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PassthroughAttributes {
    values: BTreeMap<PassthroughAttribute, String>,
}

impl PassthroughAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, attribute: PassthroughAttribute, value: impl Into<String>) -> Self {
        self.insert(attribute, value);
        self
    }

    pub fn insert(&mut self, attribute: PassthroughAttribute, value: impl Into<String>) {
        self.values.insert(attribute, value.into());
    }

    /// Value to forward, `None` leaves the attribute off the element
    pub fn get(&self, attribute: PassthroughAttribute) -> Option<String> {
        self.values.get(&attribute).cloned()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build from raw attribute names, rejecting the first name outside the allow-list
    pub fn from_raw<I, K, V>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut attributes = Self::new();
        for (name, value) in raw {
            let attribute = name.as_ref().parse::<PassthroughAttribute>()?;
            attributes.insert(attribute, value);
        }
        Ok(attributes)
    }
}
