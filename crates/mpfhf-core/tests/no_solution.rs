// crates/mpfhf-core/tests/no_solution.rs

use mpfhf_core::preimage;

#[test]
fn inconsistent_targets_exhaust_cleanly() {
    // S can only grow by one position per evaluated transition, so these
    // lengths are unreachable (or the bit patterns are): the search must
    // report no solution instead of crashing or spinning.
    assert_eq!(preimage("1", "0", 1).expect("search ok"), None);
    assert_eq!(preimage("0", "1111111", 2).expect("search ok"), None);
    assert_eq!(preimage("0", "0", 5).expect("search ok"), None);
    assert_eq!(preimage("11", "01", 3).expect("search ok"), None);
    assert_eq!(preimage("0101", "110", 4).expect("search ok"), None);
}

#[test]
fn rejects_bad_input() {
    assert!(preimage("", "10", 2).is_err());
    assert!(preimage("10", "", 2).is_err());
    assert!(preimage("10", "2", 2).is_err());
    assert!(preimage("x", "10", 2).is_err());
    assert!(preimage("1", "10", 0).is_err());
}
