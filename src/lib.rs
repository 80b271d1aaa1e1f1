//! A crate for producing fixed-decimal string-representations of numbers
//! without heap allocation, intended for embedded displays.
//!
//! Two formatters and one helper, all stateless:
//!
//! * [`itoa::format`] — signed or unsigned integers (up to 32 bits) to decimal
//!   ASCII, bounded by a caller-supplied digit budget.
//! * [`ftoa::format`] — `f32` to text with exactly two decimal places,
//!   truncated (never rounded), trailing zero decimals trimmed
//!   (`3.10` → `"3.1"`, `3.00` → `"3"`).
//! * [`reverse`] — in-place byte reversal, used by the integer formatter to
//!   put least-significant-first digits into reading order.
//!
//! All output goes into caller-supplied byte slices or into the
//! stack-allocated [`Buffer`]; the crate never allocates and never exposes
//! pointers into its own scratch storage. Failures are explicit: a call that
//! would truncate or overflow returns an [`Error`] instead of leaving the
//! destination in a sentinel state.
//!
//! # Examples
//!
//! ```
//! use num_text::Buffer;
//!
//! let mut buf = Buffer::new();
//! assert_eq!(buf.write_float(3.10).unwrap(), "3.1");
//! assert_eq!(buf.write_integer(-128).unwrap(), "-128");
//! ```
//!
//! Writing into a caller-owned slice:
//!
//! ```
//! let mut out = [0u8; num_text::FLOAT_BUF_LEN];
//! let len = num_text::ftoa::format(-2.5, &mut out).unwrap();
//! assert_eq!(&out[..len], b"-2.5");
//! ```

#![doc(html_root_url = "https://docs.rs/num-text/0.1.0")]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod buffer;
mod constants;
mod error;
pub mod ftoa;
pub mod itoa;
mod reverse;

pub use crate::buffer::Buffer;
pub use crate::constants::FLOAT_BUF_LEN;
pub use crate::error::{Error, ErrorKind};
pub use crate::itoa::Integer;
pub use crate::reverse::reverse;

// Seal to prevent downstream implementations of the Integer trait.
mod private {
    pub trait Sealed: Copy {}
}
