/// Reverses the bytes of `buf` in place.
///
/// Two-index symmetric swap converging toward the middle; O(n) time, O(1)
/// space, its own inverse. Slices shorter than two bytes are left untouched
/// (the original firmware underflowed its index arithmetic on empty input).
pub fn reverse(buf: &mut [u8]) {
    if buf.len() < 2 {
        return;
    }

    let mut i = 0;
    let mut j = buf.len() - 1;
    while i < j {
        buf.swap(i, j);
        i += 1;
        j -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_length() {
        let mut buf = *b"1234";
        reverse(&mut buf);
        assert_eq!(&buf, b"4321");
    }

    #[test]
    fn odd_length() {
        let mut buf = *b"abcde";
        reverse(&mut buf);
        assert_eq!(&buf, b"edcba");
    }

    #[test]
    fn short_slices_untouched() {
        let mut empty: [u8; 0] = [];
        reverse(&mut empty);

        let mut one = *b"x";
        reverse(&mut one);
        assert_eq!(&one, b"x");
    }

    #[test]
    fn own_inverse() {
        let mut buf = *b"-2147483648";
        let orig = buf;
        reverse(&mut buf);
        reverse(&mut buf);
        assert_eq!(buf, orig);
    }
}
