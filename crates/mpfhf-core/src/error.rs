// crates/mpfhf-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MpfError>;

#[derive(Debug, Error)]
pub enum MpfError {
    #[error("validation error: {0}")]
    Validation(String),
}
