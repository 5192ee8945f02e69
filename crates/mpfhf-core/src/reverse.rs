// crates/mpfhf-core/src/reverse.rs

use crate::error::Result;
use crate::parity::flip_parity;
use crate::register::Register;
use crate::validate::require_positive;

/// Search for some message of length `len` whose forward digest is exactly
/// (`r`, `s`). `Ok(None)` means the search exhausted every branch: no
/// message of that length reaches the target pair.
///
/// Requirements:
/// - `r` and `s` are non-empty bitstrings, `len` >= 1.
pub fn preimage(r: &str, s: &str, len: usize) -> Result<Option<String>> {
    require_positive("message length", len)?;
    let r = Register::from_bits("R target", r)?;
    let s = Register::from_bits("S target", s)?;
    let mut suffix = Vec::with_capacity(len);
    Ok(check(len - 1, &mut suffix, &r, &s, len))
}

/// The machine's start state: S is a single zero and R decodes to all
/// zeros of its own length.
fn at_start(r: &Register, s: &Register) -> bool {
    s.len() == 1 && s.val(0) == 0 && r.is_zero()
}

/// Bits are decided from the last message position down to the first, so
/// `suffix` holds them reversed.
fn emit(suffix: &[u8]) -> String {
    suffix
        .iter()
        .rev()
        .map(|&b| if b == 1 { '1' } else { '0' })
        .collect()
}

/// Resolve message position `m`, given registers describing the state right
/// after the forward machine processed that position.
///
/// Each branch undoes one forward transition on its own register clones,
/// then recurses one position left (or checks the start state once all
/// `want` bits are decided). Guards are not mutually exclusive; every
/// holding branch is attempted in order and the first full success wins.
fn check(m: usize, suffix: &mut Vec<u8>, r: &Register, s: &Register, want: usize) -> Option<String> {
    // Rewind at index 0 advances instead of looping, so it terminates a
    // search exactly like the other bit-0 transitions.
    if m == 0 && r.val(0) == 1 && s.len() > 1 && s.last() == 0 {
        let mut rt = r.clone();
        let mut st = s.clone();
        rt.flip(0);
        rt.screw(st.len(), 0);
        st.despand();
        suffix.push(0);
        if at_start(&rt, &st) {
            return Some(emit(suffix));
        }
        suffix.pop();
    }

    // Undo an invert transition (bit 0, R read back 1). The forward leg
    // appended a position that decodes 1 after the invert.
    if r.val(m) == 0 && s.len() > 1 && s.last() == 1 {
        let mut rt = r.clone();
        let mut st = s.clone();
        st.invert();
        rt.flip(m);
        rt.screw(st.len(), m);
        st.despand();
        suffix.push(0);
        if suffix.len() == want {
            if at_start(&rt, &st) {
                return Some(emit(suffix));
            }
        } else if m > 0 {
            // The invert leg may have been preceded by rewind legs at this
            // same index; they consumed no message bits, so unwind them
            // before moving left.
            if let Some(found) = cyclecheck(m, suffix, &rt, &st, want) {
                return Some(found);
            }
            if let Some(found) = check(m - 1, suffix, &rt, &st, want) {
                return Some(found);
            }
        }
        suffix.pop();
    }

    // Undo a flip transition (bit 1, registers disagreed). After the
    // forward flip the registers agree at `m`, which is the guard.
    if r.val(m) == s.val(m) {
        let mut rt = r.clone();
        let st = s.clone();
        rt.flip(m);
        rt.screw(s.len() / 2, m);
        suffix.push(1);
        if suffix.len() == want {
            if at_start(&rt, &st) {
                return Some(emit(suffix));
            }
        } else if m > 0 {
            if let Some(found) = check(m - 1, suffix, &rt, &st, want) {
                return Some(found);
            }
        }
        suffix.pop();
    }

    // Undo a grow transition (bit 1, registers agreed; S expanded and was
    // screwed). Validated through the flip-parity oracle instead of
    // materializing the screw: the despanded position must decode back to
    // 0, and the position the forward comparison read must agree with R.
    if s.len() > 1 {
        let ls = s.len();
        let lr = r.len();
        let read = m % (ls - 1);
        let tail_ok = (s.last() ^ flip_parity(ls, lr, m, ls - 1)) == 0;
        let body_ok = (s.val(read) ^ flip_parity(ls, lr, m, read)) == r.val(m);
        if tail_ok && body_ok {
            let mut rt = r.clone();
            let mut st = s.clone();
            st.screw(rt.len(), m);
            st.despand();
            rt.screw(st.len() / 2, m);
            suffix.push(1);
            if suffix.len() == want {
                if at_start(&rt, &st) {
                    return Some(emit(suffix));
                }
            } else if m > 0 {
                if let Some(found) = check(m - 1, suffix, &rt, &st, want) {
                    return Some(found);
                }
            }
            suffix.pop();
        }
    }

    None
}

/// Unwind a chain of rewind legs at index `m`.
///
/// A rewind leg appends a position to S that decodes 0 and leaves R reading
/// 1 at the index; it consumes no message bit, so the chain recurses at the
/// same position without pushing anything. Every leg despands S, which
/// bounds the chain by S's length at entry.
fn cyclecheck(
    m: usize,
    suffix: &mut Vec<u8>,
    r: &Register,
    s: &Register,
    want: usize,
) -> Option<String> {
    if r.val(m) == 1 && s.len() > 1 && s.last() == 0 {
        let mut rt = r.clone();
        let mut st = s.clone();
        rt.flip(m);
        rt.screw(st.len(), m);
        st.despand();
        if suffix.len() == want {
            if at_start(&rt, &st) {
                return Some(emit(suffix));
            }
        } else {
            if let Some(found) = cyclecheck(m, suffix, &rt, &st, want) {
                return Some(found);
            }
            if m > 0 {
                if let Some(found) = check(m - 1, suffix, &rt, &st, want) {
                    return Some(found);
                }
            }
        }
    }
    None
}
