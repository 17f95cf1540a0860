//! Basic test - prove the public surface works end to end

use bitstream::BitStream;

#[test]
fn test_decode_shift_and_dump() {
    let value = BitStream::from_hex("ff").unwrap();

    // Single block, lowest byte set, everything above zero.
    assert_eq!(value.block_count(), 1);
    assert_eq!(value.dump(), format!("{}ff", "0".repeat(62)));

    // One nibble up and back down.
    let up = &value << 4;
    assert_eq!(up.dump(), format!("{}ff0", "0".repeat(61)));
    assert_eq!(&up >> 4, value);
}

#[test]
fn test_truth_value() {
    // A freshly allocated default vector reports false.
    assert!(!BitStream::default().any());

    // Any nonzero construction reports true.
    let nonzero = BitStream::from_hex("4000").unwrap();
    assert!(nonzero.any());
}

#[test]
fn test_widths_are_independent() {
    let narrow = BitStream::from_hex("1").unwrap();
    let wide = BitStream::from_hex(&"f".repeat(200)).unwrap();

    assert_eq!(narrow.block_count(), 1);
    assert_eq!(wide.block_count(), 4);

    let merged = &narrow | &wide;
    assert_eq!(merged.block_count(), 4);
    assert!(merged.any());
}
