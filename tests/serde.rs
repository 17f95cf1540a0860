//! Serialization round trips (requires the `serde` feature).

#![cfg(feature = "serde")]

use bitstream::{BitStream, Block};

#[test]
fn test_stream_json_round_trip() {
    let original = BitStream::from_hex("deadbeefcafef00d1234").unwrap();

    let json = serde_json::to_string(&original).unwrap();
    let restored: BitStream = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, original);
    assert_eq!(restored.dump(), original.dump());
}

#[test]
fn test_empty_stream_round_trip() {
    let empty = BitStream::new(0);
    let json = serde_json::to_string(&empty).unwrap();
    let restored: BitStream = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.block_count(), 0);
}

#[test]
fn test_block_round_trip() {
    let block = Block::from_words([1, u64::MAX, 0, 42]);
    let json = serde_json::to_string(&block).unwrap();
    let restored: Block = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, block);
}
