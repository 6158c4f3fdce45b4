pub mod button;
pub mod configured_button;
pub mod loader;

pub use button::Button;
pub use configured_button::ConfiguredButton;
pub use loader::DefaultLoader;
