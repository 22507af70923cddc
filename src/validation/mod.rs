pub mod checksum;
pub mod classifier;
pub mod fields;
pub mod format;
pub mod messages;

pub use checksum::{CheckDigit, NoCheckDigit};
pub use classifier::{classify, classify_with};
pub use fields::FieldValidator;
pub use format::FormatValidator;
pub use messages::{format_error, verdict_message, INVALID_ID_TITLE};
