//! Domain models with validation at construction
//!
//! Untyped request bodies are checked here before anything touches the
//! store. Invalid input returns ValidationError, not panic.

pub mod item;
pub mod validation;

pub use item::{NewItem, MIN_NAME_LEN};
pub use validation::{ValidationError, Violation, ViolationKind};
