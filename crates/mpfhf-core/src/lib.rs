pub mod error;
pub mod validate;

pub mod forward;
pub mod parity;
pub mod register;
pub mod reverse;

pub use crate::error::{MpfError, Result};
pub use crate::forward::{mpfhf, Digest, Machine, Tick, Transition};
pub use crate::register::Register;
pub use crate::reverse::preimage;
