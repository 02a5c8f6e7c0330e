//! Mock data: core library for synthetic record generation across a fixed set of field kinds.

pub mod generator;
pub mod types;
pub mod validate;

pub use generator::{sample_token, GenerateFn, MockDataGenerator, SAMPLE_TOKEN_LEN};
pub use types::*;
pub use validate::validate_arguments;
