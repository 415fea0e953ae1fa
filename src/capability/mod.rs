pub mod actions;
pub mod error;
pub mod registry;

pub use error::{ValidationError, ValidationErrorKind};
pub use registry::{CapabilityRegistry, ParamBounds};
