// crates/mpfhf-core/src/forward.rs

use crate::error::Result;
use crate::register::Register;
use crate::validate::{parse_bits, require_positive};

/// The rendered (R, S) pair produced by the forward hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Digest {
    pub r: String,
    pub s: String,
}

/// Which of the four forward transitions one evaluation took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Bit 0, R read back 0: flip and re-process the same index.
    Rewind,
    /// Bit 0, R read back 1: flip R, invert S, advance.
    Invert,
    /// Bit 1, R and S agree at the index: S grows and gets screwed, advance.
    Grow,
    /// Bit 1, R and S disagree: flip R, advance.
    Flip,
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Transition::Rewind => "rewind",
            Transition::Invert => "invert",
            Transition::Grow => "grow",
            Transition::Flip => "flip",
        };
        f.write_str(name)
    }
}

/// One transition evaluation, for tracing.
#[derive(Clone, Copy, Debug)]
pub struct Tick {
    pub index: usize,
    pub bit: u8,
    pub transition: Transition,
}

/// The forward hash state machine.
///
/// Consumes the message left to right, driving R (fixed size) and S
/// (growing) through the register primitives. A rewind re-processes the
/// current index under the new register state, so the machine can evaluate
/// more transitions than the message has bits, but each rewind is paid for
/// by S growing, and the cursor never moves left past index 0.
pub struct Machine {
    bits: Vec<u8>,
    r: Register,
    s: Register,
    cursor: usize,
}

impl Machine {
    /// Requirements:
    /// - `message` contains only '0'/'1' (empty is legal).
    /// - `output_size` >= 1.
    pub fn new(message: &str, output_size: usize) -> Result<Self> {
        require_positive("output size", output_size)?;
        Ok(Self {
            bits: parse_bits("message", message)?,
            r: Register::zeroed(output_size),
            s: Register::zeroed(1),
            cursor: 0,
        })
    }

    #[inline]
    pub fn r(&self) -> &Register {
        &self.r
    }

    #[inline]
    pub fn s(&self) -> &Register {
        &self.s
    }

    /// Perform one transition evaluation; `None` once the cursor has passed
    /// the end of the message.
    pub fn step(&mut self) -> Option<Tick> {
        if self.cursor >= self.bits.len() {
            return None;
        }
        let index = self.cursor;
        let bit = self.bits[index];

        let transition = if bit == 0 {
            self.s.expand();
            self.r.screw(self.s.len(), index);
            if self.r.val(index) == 0 {
                self.r.flip(index);
                if index > 0 {
                    self.cursor -= 1;
                }
                Transition::Rewind
            } else {
                self.r.flip(index);
                self.s.invert();
                Transition::Invert
            }
        } else {
            self.r.screw(self.s.len() / 2, index);
            if self.r.val(index) == self.s.val(index) {
                self.s.expand();
                self.s.screw(self.r.len(), index);
                Transition::Grow
            } else {
                self.r.flip(index);
                Transition::Flip
            }
        };

        self.cursor += 1;
        Some(Tick {
            index,
            bit,
            transition,
        })
    }

    /// Run to completion and render the digest.
    pub fn finish(mut self) -> Digest {
        while self.step().is_some() {}
        Digest {
            r: self.r.render(),
            s: self.s.render(),
        }
    }
}

/// Fold `message` into an (R, S) digest, with R of `output_size` bits.
pub fn mpfhf(message: &str, output_size: usize) -> Result<Digest> {
    Ok(Machine::new(message, output_size)?.finish())
}
