pub mod id_validator;
pub mod models;
pub mod processing;
pub mod utils;
pub mod validation;
pub mod verification;

pub use id_validator::IdNumberValidator;
pub use models::{ErrorReason, IdentifierFields, ValidationVerdict};
pub use processing::parse;
pub use utils::{IdCheckError, ParseError};
pub use validation::{classify, format_error};
