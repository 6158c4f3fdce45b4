use dioxus::prelude::*;

use crate::shared::constants::{DEFAULT_LOADER_CLASS, DEFAULT_LOADER_LABEL};

// Fallback indicator shown while loading without a custom loader
// Content-less; the spinner comes from the .default-loader rule
#[component]
pub fn DefaultLoader() -> Element {
    rsx! {
        span {
            class: DEFAULT_LOADER_CLASS,
            aria_label: DEFAULT_LOADER_LABEL,
        }
    }
}
