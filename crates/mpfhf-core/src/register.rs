// crates/mpfhf-core/src/register.rs

use crate::error::Result;
use crate::validate::{parse_bits, require_positive};

/// Growable bit vector with a global inversion flag.
///
/// Every read decodes through the flag: `val(pos) = inverted ^ bits[pos % len]`.
/// Position arguments always wrap via modulo, so reads and flips never go out
/// of range. The flag makes `invert` O(1) regardless of length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Register {
    bits: Vec<u8>,
    inverted: u8,
}

impl Register {
    /// Register of `size` positions, all decoding to 0.
    pub fn zeroed(size: usize) -> Self {
        Self {
            bits: vec![0; size],
            inverted: 0,
        }
    }

    /// Register initialized from a rendered bitstring (the search-side
    /// counterpart of `zeroed`: it carries a target digest to unwind).
    ///
    /// Requirements:
    /// - `s` must be non-empty and contain only '0'/'1'.
    pub fn from_bits(what: &str, s: &str) -> Result<Self> {
        require_positive(&format!("{what} length"), s.len())?;
        Ok(Self {
            bits: parse_bits(what, s)?,
            inverted: 0,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Grow by one position. The stored bit equals the current inversion
    /// flag, so the new position decodes to 0 under either flag state.
    #[inline]
    pub fn expand(&mut self) {
        self.bits.push(self.inverted);
    }

    /// Shrink by one position; exact inverse of `expand`.
    ///
    /// Callers must guarantee length >= 1 (every search branch that despands
    /// is guarded by a `len() > 1` check).
    #[inline]
    pub fn despand(&mut self) {
        assert!(!self.bits.is_empty(), "despand on empty register");
        self.bits.pop();
    }

    /// Toggle the decoded value of every position, without touching storage.
    #[inline]
    pub fn invert(&mut self) {
        self.inverted ^= 1;
    }

    /// Flip the stored bit at `pos % len`.
    #[inline]
    pub fn flip(&mut self, pos: usize) {
        let pos = pos % self.bits.len();
        self.bits[pos] ^= 1;
    }

    /// Strided toggle: flip positions `0, stride, 2*stride, ...` for `count`
    /// steps, each reduced mod len. Repeated hits cancel in pairs, so only
    /// the per-position parity matters.
    pub fn screw(&mut self, count: usize, stride: usize) {
        for k in 0..count {
            self.flip(k * stride);
        }
    }

    /// Decoded bit at `pos % len`.
    #[inline]
    pub fn val(&self, pos: usize) -> u8 {
        self.inverted ^ self.bits[pos % self.bits.len()]
    }

    /// Decoded final position.
    #[inline]
    pub fn last(&self) -> u8 {
        self.val(self.bits.len() - 1)
    }

    /// Canonical bitstring, one character per position, decoded through the
    /// inversion flag.
    pub fn render(&self) -> String {
        self.bits
            .iter()
            .map(|&b| if self.inverted ^ b == 1 { '1' } else { '0' })
            .collect()
    }

    /// True when every position decodes to 0.
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|&b| self.inverted ^ b == 0)
    }
}
