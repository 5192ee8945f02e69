// crates/mpfhf-cli/src/cmd/mod.rs

pub mod hash;
pub mod invert;
pub mod roundtrip;
pub mod trace;
