// Class-name composition
// Framework-agnostic, 100% testable

pub mod class_names;
pub use class_names::compose_class_names;
