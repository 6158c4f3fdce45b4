use dioxus::prelude::*;

use crate::app::components::button::Button;
use crate::domain::models::{ButtonDescriptor, ValidatedButton};

/// Renders a [`ButtonDescriptor`] (e.g. loaded from JSON) through [`Button`].
/// An invalid descriptor fails the render with its `ConfigurationError`,
/// which bubbles to the nearest `ErrorBoundary`.
#[component]
pub fn ConfiguredButton(
    descriptor: ButtonDescriptor,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let ValidatedButton {
        config,
        content,
        attributes,
    } = descriptor.validate()?;

    rsx! {
        Button {
            kind: config.kind,
            variant: config.variant,
            size: config.size,
            outline: config.outline,
            block: config.block,
            disabled: config.disabled,
            loading: config.loading,
            class: config.extra_class,
            attributes,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            if let Some(text) = content {
                "{text}"
            }
        }
    }
}
