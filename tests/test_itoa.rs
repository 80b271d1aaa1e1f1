use num_text::{itoa, reverse, Buffer, ErrorKind};

use rand::Rng;

fn fmt(n: i32, max_digits: usize) -> String {
    let mut out = [0u8; 16];
    let len = itoa::format(n, &mut out, max_digits).unwrap();
    std::str::from_utf8(&out[..len]).unwrap().to_string()
}

#[test]
fn test_i32() {
    let test_cases: &[(&str, i32)] = &[
        ("0", 0),
        ("1", 1),
        ("-1", -1),
        ("-128", -128),
        ("10", 10),
        ("-100", -100),
        ("12345", 12345),
        ("2147483647", i32::MAX),
        ("-2147483648", i32::MIN),
    ];

    for (expected, input) in test_cases {
        assert_eq!(*expected, fmt(*input, 10));
    }
}

#[test]
fn test_returned_length() {
    let mut out = [0u8; 16];
    let len = itoa::format(-128, &mut out, 10).unwrap();
    assert_eq!(len, 4);
    assert_eq!(&out[..len], b"-128");
}

#[test]
fn test_unsigned_and_narrow_types() {
    let mut out = [0u8; 16];

    let len = itoa::format(u32::MAX, &mut out, 10).unwrap();
    assert_eq!(&out[..len], b"4294967295");

    let len = itoa::format(i8::MIN, &mut out, 10).unwrap();
    assert_eq!(&out[..len], b"-128");

    let len = itoa::format(u16::MAX, &mut out, 10).unwrap();
    assert_eq!(&out[..len], b"65535");
}

#[test]
fn test_digit_budget_exceeded() {
    let mut out = [0u8; 16];
    let err = itoa::format(12345, &mut out, 3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Capacity { len: 5, cap: 3 });
}

#[test]
fn test_budget_excludes_sign() {
    // Three digits plus the sign must succeed with a budget of exactly 3.
    let mut out = [0u8; 16];
    let len = itoa::format(-128, &mut out, 3).unwrap();
    assert_eq!(&out[..len], b"-128");

    let err = itoa::format(-1234, &mut out, 3).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Capacity { .. }));
}

#[test]
fn test_destination_too_small() {
    let mut out = [0u8; 2];
    let err = itoa::format(12345, &mut out, 10).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Capacity { len: 5, cap: 2 });

    // Digits fit but the sign does not.
    let mut out = [0u8; 2];
    let err = itoa::format(-42i32, &mut out, 10).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Capacity { len: 3, cap: 2 });
}

#[test]
fn test_zero_budget() {
    let mut out = [0u8; 16];
    let err = itoa::format(0, &mut out, 0).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Capacity { .. }));
}

#[test]
fn test_matches_core_fmt() {
    let mut rng = rand::thread_rng();
    let mut out = [0u8; 16];

    for _ in 0..10_000 {
        let n: i32 = rng.gen();
        let len = itoa::format(n, &mut out, 10).unwrap();
        assert_eq!(std::str::from_utf8(&out[..len]).unwrap(), n.to_string());
    }
}

#[test]
fn test_buffer_write_integer() {
    let mut buf = Buffer::new();
    assert_eq!(buf.write_integer(0).unwrap(), "0");
    assert_eq!(buf.write_integer(-2147483648i32).unwrap(), "-2147483648");
    assert_eq!(buf.as_str(), "-2147483648");
    assert_eq!(buf.len(), 11);
}

#[test]
fn test_reverse_round_trip() {
    let mut rng = rand::thread_rng();

    for len in 0..32 {
        let mut buf: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let orig = buf.clone();
        reverse(&mut buf);
        reverse(&mut buf);
        assert_eq!(buf, orig);
    }
}
