//! Style token names shared with `assets/css/button.css`.

pub const BASE_CLASS: &str = "btn";
pub const VARIANT_PREFIX: &str = "btn-";
pub const OUTLINE_VARIANT_PREFIX: &str = "btn-outline-";
pub const SMALL_CLASS: &str = "btn-sm";
pub const LARGE_CLASS: &str = "btn-lg";
pub const BLOCK_CLASS: &str = "btn-block";
pub const DISABLED_CLASS: &str = "disabled";
pub const LOADER_CLASS: &str = "btn-loader";
pub const DEFAULT_LOADER_CLASS: &str = "default-loader";

/// Accessible label carried by the default loading indicator
pub const DEFAULT_LOADER_LABEL: &str = "Loading...";
