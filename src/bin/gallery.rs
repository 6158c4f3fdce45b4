//! Button gallery - desktop entry point
//!
//! Renders every variant, size and state of the Button component.

use bs_button::app::App;

fn main() {
    // Initialize tracing BEFORE dioxus::launch
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Button gallery...");

    dioxus::launch(App);
}
