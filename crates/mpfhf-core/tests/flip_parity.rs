// crates/mpfhf-core/tests/flip_parity.rs

use mpfhf_core::parity::{flip_count, flip_parity};
use mpfhf_core::Register;

#[test]
fn parity_matches_materialized_screw() {
    for len in 1..=8usize {
        for count in 0..=8usize {
            for stride in 0..=8usize {
                let mut reg = Register::zeroed(len);
                reg.screw(count, stride);
                // Starting from all zeros, the decoded bit at each position
                // is exactly the parity of flips that landed there.
                for pos in 0..len {
                    assert_eq!(
                        reg.val(pos),
                        flip_parity(len, count, stride, pos),
                        "len={len} count={count} stride={stride} pos={pos}"
                    );
                }
            }
        }
    }
}

#[test]
fn counts_sum_to_count() {
    for len in 1..=6usize {
        for count in 0..=6usize {
            for stride in 0..=6usize {
                let total: usize = (0..len)
                    .map(|pos| flip_count(len, count, stride, pos))
                    .sum();
                assert_eq!(total, count, "len={len} count={count} stride={stride}");
            }
        }
    }
}
