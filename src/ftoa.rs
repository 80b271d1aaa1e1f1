//! Float-to-decimal-text conversion with a fixed two-decimal-place layout.

use crate::constants::{FLOAT_BUF_LEN, MAX_FLOAT_MAGNITUDE};
use crate::error::Error;

const NAN: &str = "NaN";
const INFINITY: &str = "inf";
const NEG_INFINITY: &str = "-inf";

/// Formats `value` with exactly two decimal places, truncated toward zero,
/// then trims trailing zero decimals from the output: `3.10` becomes `"3.1"`,
/// `3.00` becomes `"3"`. Returns the number of bytes written into `out`.
///
/// At most [`FLOAT_BUF_LEN`] bytes are written. Trimming is position-aware:
/// only trailing zeros of the two-decimal field (and a then-dangling `.`) are
/// removed, never unit digits or an interior zero decimal.
///
/// The fractional digits inherit binary representation error for values whose
/// fractional part is not exactly representable; digits beyond the second
/// decimal place are discarded, not rounded (`1.999` formats as `"1.99"`).
///
/// # Errors
///
/// `ErrorKind::Overflow` if the unit magnitude needs more than 16 digits,
/// `ErrorKind::Capacity` if the trimmed text does not fit in `out`.
pub fn format(value: f32, out: &mut [u8]) -> Result<usize, Error> {
    if is_nonfinite(value) {
        return copy_to(format_nonfinite(value).as_bytes(), out);
    }

    let negative = value < 0.0;
    let magnitude = if negative { -value } else { value };
    if magnitude >= MAX_FLOAT_MAGNITUDE {
        return Err(Error::overflow());
    }

    let mut units = magnitude as u64;
    // 100 for 2 decimals, 1000 for 3, etc.
    let mut decimals = (magnitude * 100.0) as u64 % 100;

    // Emit back-to-front into the scratch layout, exactly as wide as the
    // worst case: sign + 16 unit digits + '.' + 2 decimals.
    let mut tmp = [0u8; FLOAT_BUF_LEN];
    let mut s = FLOAT_BUF_LEN;

    s -= 1;
    tmp[s] = b'0' + (decimals % 10) as u8;
    decimals /= 10;
    s -= 1;
    tmp[s] = b'0' + (decimals % 10) as u8;
    s -= 1;
    tmp[s] = b'.';

    loop {
        s -= 1;
        tmp[s] = b'0' + (units % 10) as u8;
        units /= 10;
        if units == 0 {
            break;
        }
    }

    if negative {
        s -= 1;
        tmp[s] = b'-';
    }

    // Trim trailing zero decimals, then the separator if both are gone.
    let mut end = FLOAT_BUF_LEN;
    if tmp[end - 1] == b'0' {
        end -= 1;
        if tmp[end - 1] == b'0' {
            end -= 1;
        }
    }
    if tmp[end - 1] == b'.' {
        end -= 1;
    }

    copy_to(&tmp[s..end], out)
}

fn copy_to(src: &[u8], out: &mut [u8]) -> Result<usize, Error> {
    if out.len() < src.len() {
        return Err(Error::capacity(src.len(), out.len()));
    }
    out[..src.len()].copy_from_slice(src);
    Ok(src.len())
}

fn is_nonfinite(f: f32) -> bool {
    const EXP_MASK: u32 = 0x7f800000;
    let bits = f.to_bits();
    bits & EXP_MASK == EXP_MASK
}

#[cold]
fn format_nonfinite(f: f32) -> &'static str {
    const MANTISSA_MASK: u32 = 0x007fffff;
    const SIGN_MASK: u32 = 0x80000000;
    let bits = f.to_bits();
    if bits & MANTISSA_MASK != 0 {
        NAN
    } else if bits & SIGN_MASK != 0 {
        NEG_INFINITY
    } else {
        INFINITY
    }
}
