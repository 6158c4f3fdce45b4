pub mod components;

use dioxus::prelude::*;

use crate::app::components::{Button, ConfiguredButton};
use crate::domain::models::{
    ButtonDescriptor, ButtonKind, ButtonSize, ButtonVariant, PassthroughAttribute,
    PassthroughAttributes,
};

// Generated by build.rs from assets/css
const BUNDLE_CSS: &str = include_str!("../../assets/dist/bundle.css");

const SAMPLE_DESCRIPTOR: &str = r#"{
    "type": "submit",
    "variant": "success",
    "outline": true,
    "content": "Loaded from JSON",
    "attributes": { "title": "Rendered from a ButtonDescriptor" }
}"#;

// Gallery of every variant, size and state (BEM: c-gallery)
#[component]
pub fn App() -> Element {
    let mut saving = use_signal(|| false);
    let mut clicks = use_signal(|| 0u32);
    let descriptor = ButtonDescriptor::from_json(SAMPLE_DESCRIPTOR)?;

    let toggle_attributes = PassthroughAttributes::new()
        .with(PassthroughAttribute::AriaPressed, saving().to_string())
        .with(PassthroughAttribute::Id, "gallery-save");

    rsx! {
        style { {BUNDLE_CSS} }
        main { class: "c-gallery",
            h1 { "Button" }

            section { class: "c-gallery__section",
                h2 { "Variants" }
                for variant in ButtonVariant::ALL {
                    Button { key: "{variant}", variant, "{variant}" }
                }
            }

            section { class: "c-gallery__section",
                h2 { "Outline" }
                for variant in ButtonVariant::ALL {
                    Button { key: "outline-{variant}", variant, outline: true, "{variant}" }
                }
            }

            section { class: "c-gallery__section",
                h2 { "Sizes" }
                Button { size: ButtonSize::Small, "Small" }
                Button { "Medium" }
                Button { size: ButtonSize::Large, "Large" }
                Button { block: true, variant: ButtonVariant::Secondary, "Block" }
            }

            section { class: "c-gallery__section",
                h2 { "States" }
                Button { disabled: true, "Disabled" }
                Button { loading: true, "Hidden while loading" }
                Button {
                    loading: true,
                    variant: ButtonVariant::Dark,
                    loader: rsx! { "Working…" },
                    "Hidden while loading"
                }
            }

            section { class: "c-gallery__section",
                h2 { "Interactive" }
                p { "Clicks: {clicks}" }
                Button {
                    variant: ButtonVariant::Success,
                    loading: saving(),
                    attributes: toggle_attributes,
                    onclick: move |_| {
                        clicks += 1;
                        saving.set(true);
                    },
                    "Save"
                }
                Button {
                    kind: ButtonKind::Reset,
                    variant: ButtonVariant::Link,
                    onclick: move |_| saving.set(false),
                    "Reset"
                }
            }

            section { class: "c-gallery__section",
                h2 { "From JSON" }
                ConfiguredButton { descriptor }
            }
        }
    }
}
