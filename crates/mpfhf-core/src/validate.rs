// crates/mpfhf-core/src/validate.rs

use crate::error::{MpfError, Result};

/// Parse a bitstring into raw bits.
///
/// Requirements:
/// - Every character must be '0' or '1'.
pub fn parse_bits(what: &str, s: &str) -> Result<Vec<u8>> {
    s.bytes()
        .map(|b| match b {
            b'0' => Ok(0),
            b'1' => Ok(1),
            other => Err(MpfError::Validation(format!(
                "{what} must be a bitstring of '0'/'1', found byte 0x{other:02x}"
            ))),
        })
        .collect()
}

/// Reject a zero size/length where the algorithms require a positive one.
pub fn require_positive(what: &str, n: usize) -> Result<()> {
    if n == 0 {
        return Err(MpfError::Validation(format!("{what} must be positive")));
    }
    Ok(())
}
