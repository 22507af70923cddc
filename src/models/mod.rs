pub mod data;
pub mod rules;

pub use data::*;
pub use rules::{Field, FieldRule, CHECK_DIGIT_OFFSET, ID_LENGTH, SA_ID_RULES};
