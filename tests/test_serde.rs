#![cfg(feature = "with-serde")]

use num_text::Buffer;

#[test]
fn test_buffer_round_trip() {
    let mut buf = Buffer::new();
    buf.write_float(3.10).unwrap();

    let json = serde_json::to_string(&buf).unwrap();
    assert_eq!(json, "\"3.1\"");

    let back: Buffer = serde_json::from_str(&json).unwrap();
    assert_eq!(back, buf);
}

#[test]
fn test_buffer_rejects_oversized_input() {
    let long = format!("\"{}\"", "9".repeat(64));
    assert!(serde_json::from_str::<Buffer>(&long).is_err());
}
