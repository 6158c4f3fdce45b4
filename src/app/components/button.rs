use dioxus::prelude::*;

use crate::app::components::loader::DefaultLoader;
use crate::domain::models::{
    ButtonConfig, ButtonKind, ButtonSize, ButtonVariant, PassthroughAttribute, PassthroughAttributes,
};
use crate::shared::constants::LOADER_CLASS;
use crate::shared::logging::log_render;

/// Bootstrap-style button.
///
/// Class tokens come from [`ButtonConfig::class_names`]. While `disabled` or
/// `loading` the element is disabled and `onclick` is never called. While
/// `loading`, `children` are dropped and replaced by `span.btn-loader`
/// wrapping `loader` (or [`DefaultLoader`]).
#[component]
pub fn Button(
    #[props(default)] kind: ButtonKind,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] outline: bool,
    #[props(default)] block: bool,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    /// Custom indicator, only rendered while loading
    #[props(default)]
    loader: Option<Element>,
    /// Extra classes appended after the generated tokens
    #[props(default, into)]
    class: String,
    /// Forwarded unmodified to the `<button>`
    #[props(default)]
    attributes: PassthroughAttributes,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let config = ButtonConfig {
        kind,
        variant,
        size,
        outline,
        block,
        disabled,
        loading,
        extra_class: class,
    };
    let class_names = config.class_names();
    let inactive = config.is_inactive();

    log_render(&class_names, inactive, loading);

    rsx! {
        button {
            r#type: kind.as_str(),
            class: "{class_names}",
            disabled: inactive,
            id: attributes.get(PassthroughAttribute::Id),
            title: attributes.get(PassthroughAttribute::Title),
            name: attributes.get(PassthroughAttribute::Name),
            value: attributes.get(PassthroughAttribute::Value),
            form: attributes.get(PassthroughAttribute::Form),
            tabindex: attributes.get(PassthroughAttribute::TabIndex),
            aria_label: attributes.get(PassthroughAttribute::AriaLabel),
            aria_describedby: attributes.get(PassthroughAttribute::AriaDescribedBy),
            aria_controls: attributes.get(PassthroughAttribute::AriaControls),
            aria_expanded: attributes.get(PassthroughAttribute::AriaExpanded),
            aria_pressed: attributes.get(PassthroughAttribute::AriaPressed),
            onclick: move |evt| {
                forward_click(inactive, evt, |evt| {
                    if let Some(handler) = &onclick {
                        handler.call(evt);
                    }
                });
            },
            if loading {
                span {
                    class: LOADER_CLASS,
                    if let Some(loader) = loader {
                        {loader}
                    } else {
                        DefaultLoader {}
                    }
                }
            } else {
                {children}
            }
        }
    }
}

/// Hands `evt` to `forward` unless the button is inactive.
/// Returns whether the click was forwarded.
fn forward_click<E>(inactive: bool, evt: E, forward: impl FnOnce(E)) -> bool {
    if inactive {
        return false;
    }
    forward(evt);
    true
}
