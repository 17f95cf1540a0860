//! Shift engine: left shift primitive, transpose, derived right shift.
//!
//! Only one direction is implemented directly. [`shl`] walks the source and
//! destination words in lock-step, carrying bits across word and block
//! boundaries. [`shr`] is derived from it by sandwiching the left shift
//! between two [`transpose`] passes: transpose reverses the whole structure
//! (block order, word order within each block, bit order within each word),
//! so a left shift of the reversed value is a right shift of the original.
//! Transpose is an involution, which is what makes the derivation sound.

use crate::core::block::{WORDS_PER_BLOCK, WORD_BITS};
use crate::core::stream::BitStream;

/// Shift toward higher significance by `count` bit positions.
///
/// The result has the same block count as `src`. Bits shifted past the top
/// are discarded; vacated low-order positions are zero-filled. A count of
/// zero returns a clone, and a count of at least the total bit width
/// returns an all-zero vector of unchanged size.
pub(crate) fn shl(src: &BitStream, count: u64) -> BitStream {
    if count == 0 {
        return src.clone();
    }
    let mut dst = BitStream::new(src.block_count());
    if count >= src.bit_width() {
        return dst;
    }

    let word_offset = (count / WORD_BITS as u64) as usize;
    let bit = (count % WORD_BITS as u64) as u32;
    let total_words = src.block_count() * WORDS_PER_BLOCK;

    // In the mirrored layout, moving bits toward higher significance is a
    // per-word right shift; the bits dropped off the low end of a word are
    // the carry into the high end of the next destination word.
    let mut carry = 0u64;
    for k in 0..total_words - word_offset {
        let word = src.word(k);
        dst.set_word(k + word_offset, carry | (word >> bit));
        carry = if bit == 0 {
            0
        } else {
            word << (WORD_BITS as u32 - bit)
        };
    }
    dst
}

/// Shift toward lower significance by `count` bit positions.
///
/// Derived from [`shl`]: transpose a clone of the input, left-shift it,
/// transpose the result back.
pub(crate) fn shr(src: &BitStream, count: u64) -> BitStream {
    let mut reversed = src.clone();
    transpose(&mut reversed);
    let mut result = shl(&reversed, count);
    transpose(&mut result);
    result
}

/// Reverse the stream's structure in place.
///
/// Reverses the block order and mirrors every block (word order plus
/// per-word bit order). Applying transpose twice restores the original
/// value.
pub(crate) fn transpose(stream: &mut BitStream) {
    let blocks = stream.blocks_mut();
    blocks.reverse();
    for block in blocks {
        block.mirror();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::block::Block;

    fn single(words: [u64; 4]) -> BitStream {
        BitStream::from_blocks(vec![Block::from_words(words)])
    }

    #[test]
    fn test_shl_zero_count_clones() {
        let x = single([0xdead, 0xbeef, 1, 2]);
        assert_eq!(shl(&x, 0), x);
    }

    #[test]
    fn test_shl_saturates_at_width() {
        let x = single([u64::MAX; 4]);
        let shifted = shl(&x, 256);
        assert_eq!(shifted.block_count(), 1);
        assert!(!shifted.any());

        let far = shl(&x, 100_000);
        assert_eq!(far.block_count(), 1);
        assert!(!far.any());
    }

    #[test]
    fn test_shl_moves_lsb_within_word() {
        // Logical bit 0 is the msb of word 0; logical bit 1 sits one
        // position below it.
        let x = single([1u64 << 63, 0, 0, 0]);
        let shifted = shl(&x, 1);
        assert_eq!(shifted.to_blocks()[0].word(0), 1u64 << 62);
    }

    #[test]
    fn test_shl_carries_across_word_boundary() {
        // Logical bit 63 is the lsb of word 0; one more step lands on the
        // msb of word 1.
        let x = single([1, 0, 0, 0]);
        let shifted = shl(&x, 1);
        assert_eq!(shifted.to_blocks()[0].word(0), 0);
        assert_eq!(shifted.to_blocks()[0].word(1), 1u64 << 63);
    }

    #[test]
    fn test_shl_whole_word_offset() {
        let x = single([0xabcd, 0, 0, 0]);
        let shifted = shl(&x, 64);
        let words = shifted.to_blocks()[0].words();
        assert_eq!(words, [0, 0xabcd, 0, 0]);
    }

    #[test]
    fn test_shl_carries_across_block_boundary() {
        let x = BitStream::from_blocks(vec![
            Block::from_words([0, 0, 0, 1]), // logical bit 255
            Block::ZERO,
        ]);
        let shifted = shl(&x, 1);
        let blocks = shifted.to_blocks();
        assert!(blocks[0].is_zero());
        assert_eq!(blocks[1].word(0), 1u64 << 63); // logical bit 256
    }

    #[test]
    fn test_transpose_involution() {
        let original = BitStream::from_blocks(vec![
            Block::from_words([0x0123_4567_89ab_cdef, 1, 2, 3]),
            Block::from_words([4, 5, 6, u64::MAX]),
            Block::from_words([7, 8, 9, 10]),
        ]);
        let mut stream = original.clone();
        transpose(&mut stream);
        assert_ne!(stream, original);
        transpose(&mut stream);
        assert_eq!(stream, original);
    }

    #[test]
    fn test_transpose_reverses_block_order() {
        let mut stream = BitStream::from_blocks(vec![
            Block::from_words([1, 0, 0, 0]),
            Block::ZERO,
        ]);
        transpose(&mut stream);
        let blocks = stream.to_blocks();
        assert!(blocks[0].is_zero());
        assert_eq!(blocks[1].words(), [0, 0, 0, 1u64.reverse_bits()]);
    }

    #[test]
    fn test_shr_inverts_shl_when_no_bits_fall_off() {
        // Only logical bits 0..8 are set, so any left shift up to 248
        // keeps every bit in range and the round trip is exact.
        let x = single([0xff00_0000_0000_0000, 0, 0, 0]);
        for count in [1u64, 13, 64, 65, 200, 248] {
            let round = shr(&shl(&x, count), count);
            assert_eq!(round, x, "count = {count}");
        }
    }

    #[test]
    fn test_shl_then_shr_drops_top_bits() {
        // Logical bit 255 is shifted out by the left shift and cannot be
        // restored by the right shift.
        let x = single([0, 0, 0, 1]);
        let round = shr(&shl(&x, 1), 1);
        assert_eq!(round.block_count(), 1);
        assert!(!round.any());
    }

    #[test]
    fn test_shr_moves_bit_toward_lower_significance() {
        // Logical bit 64 (msb of word 1) moves down to bit 63 (lsb of
        // word 0).
        let x = single([0, 1u64 << 63, 0, 0]);
        let shifted = shr(&x, 1);
        let words = shifted.to_blocks()[0].words();
        assert_eq!(words, [1, 0, 0, 0]);
    }

    #[test]
    fn test_shr_saturates_at_width() {
        let x = single([u64::MAX; 4]);
        let shifted = shr(&x, 256);
        assert_eq!(shifted.block_count(), 1);
        assert!(!shifted.any());
    }
}
