//! Integer-to-decimal-text conversion.

use crate::error::Error;
use crate::reverse::reverse;

/// An integer that can be formatted as decimal text.
///
/// This trait is sealed and cannot be implemented for types outside of this
/// crate. It is implemented for `i8`, `i16`, `i32`, `u8`, `u16` and `u32`.
pub trait Integer: crate::private::Sealed {
    #[doc(hidden)]
    fn is_negative(self) -> bool;

    #[doc(hidden)]
    fn unsigned_magnitude(self) -> u32;
}

macro_rules! impl_integer {
    ($($t:ident),* as $conv_fn:ident) => {$(
        impl crate::private::Sealed for $t {}

        impl Integer for $t {
            #[allow(unused_comparisons)]
            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[allow(unused_comparisons)]
            #[inline]
            fn unsigned_magnitude(self) -> $conv_fn {
                if self >= 0 {
                    self as $conv_fn
                } else {
                    // convert the negative num to positive by summing 1 to it's 2 complement
                    (!(self as $conv_fn)).wrapping_add(1)
                }
            }
        }
    )*};
}

impl_integer!(i8, u8, i16, u16, i32, u32 as u32);

/// Formats `n` as a decimal ASCII string into `out` and returns the number of
/// bytes written (sign included).
///
/// `max_digits` bounds the digit-extraction loop only; the minus sign does not
/// count against it. If the rendering needs more digits than `max_digits`, or
/// more bytes than `out` holds, `ErrorKind::Capacity` is returned and the
/// contents of `out` are unspecified.
pub fn format<N>(n: N, out: &mut [u8], max_digits: usize) -> Result<usize, Error>
where
    N: Integer,
{
    let is_negative = n.is_negative();
    let mut nr = n.unsigned_magnitude();
    let cap = max_digits.min(out.len());

    // Emit least-significant digit first; reverse below once the sign is in.
    let mut i = 0;
    loop {
        if i == cap {
            return Err(Error::capacity(
                decimal_len(n.unsigned_magnitude()) + is_negative as usize,
                cap,
            ));
        }
        out[i] = b'0' + (nr % 10) as u8;
        i += 1;
        nr /= 10;
        if nr == 0 {
            break;
        }
    }

    if is_negative {
        if i == out.len() {
            return Err(Error::capacity(i + 1, out.len()));
        }
        out[i] = b'-';
        i += 1;
    }

    reverse(&mut out[..i]);
    Ok(i)
}

fn decimal_len(mut v: u32) -> usize {
    let mut len = 1;
    while v >= 10 {
        v /= 10;
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::decimal_len;

    #[test]
    fn decimal_lengths() {
        assert_eq!(decimal_len(0), 1);
        assert_eq!(decimal_len(9), 1);
        assert_eq!(decimal_len(10), 2);
        assert_eq!(decimal_len(u32::MAX), 10);
    }
}
