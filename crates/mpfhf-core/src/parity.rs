// crates/mpfhf-core/src/parity.rs

/// How many of the flips of `screw(count, stride)` land on `pos`, for a
/// register of length `len`.
///
/// The search uses the parity of this count to decide whether a target bit
/// is consistent with a hypothetical screw, without materializing it.
pub fn flip_count(len: usize, count: usize, stride: usize, pos: usize) -> usize {
    let pos = pos % len;
    (0..count).filter(|k| (k * stride) % len == pos).count()
}

/// Parity of `flip_count`, as a bit.
#[inline]
pub fn flip_parity(len: usize, count: usize, stride: usize, pos: usize) -> u8 {
    (flip_count(len, count, stride, pos) % 2) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_zero_piles_on_position_zero() {
        assert_eq!(flip_count(5, 7, 0, 0), 7);
        assert_eq!(flip_count(5, 7, 0, 3), 0);
        assert_eq!(flip_parity(5, 7, 0, 0), 1);
    }

    #[test]
    fn pos_reduces_modulo_len() {
        assert_eq!(flip_count(4, 8, 2, 2), flip_count(4, 8, 2, 6));
    }
}
