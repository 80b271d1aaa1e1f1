/// Fixed layout for float output: a sign, up to 16 unit digits, the `.`
/// separator and two decimal digits. Destination slices passed to
/// [`ftoa::format`](crate::ftoa::format) never need more than this many bytes.
pub const FLOAT_BUF_LEN: usize = 20;

// Want these to be as large as the longest decimal rendering of each
// input type, minus sign included for the signed ones.
pub(crate) const U32_MAX_LEN: usize = 10;
pub(crate) const I32_MAX_LEN: usize = 11;

// Want this to be as large as the largest possible string representation of
// any supported input, which is currently the float layout.
pub(crate) const MAX_BUF_LEN: usize = FLOAT_BUF_LEN;

// Unit magnitudes at or above this need more than 16 digits and cannot fit
// the fixed float layout.
pub(crate) const MAX_FLOAT_MAGNITUDE: f32 = 1e16;
