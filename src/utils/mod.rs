pub mod error;
pub mod mask;

pub use error::{IdCheckError, ParseError};
pub use mask::mask;
