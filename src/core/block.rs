//! Fixed-size storage blocks.
//!
//! A [`Block`] is the atomic unit of allocation: four 64-bit words, 256
//! contiguous bits of the logical bit vector. A bitstream value owns a
//! sequence of blocks in which the block at index 0 holds the
//! least-significant 256 bits.
//!
//! # Memory Layout
//!
//! Words are stored in the mirrored order produced by the hex decoder:
//! logical bit `p` of a block lives in word `p / 64` at word bit
//! `63 - (p % 64)`. The mirrored order is what lets one shift primitive
//! serve both directions (see [`crate::ops::shift`]).

use crate::util::bitops::reverse_bits;

/// Number of bits in a word, the atomic unit of bitwise computation.
pub const WORD_BITS: usize = 64;

/// Number of words in a block.
pub const WORDS_PER_BLOCK: usize = 4;

/// Number of bits in a block, the atomic unit of allocation.
pub const BLOCK_BITS: usize = WORD_BITS * WORDS_PER_BLOCK;

/// A group of four consecutive words: 256 contiguous bits of a bitstream.
///
/// `Block` is `Copy` and compares by value. It has no notion of
/// significance on its own; ordering is imposed by the owning
/// [`BitStream`](crate::BitStream).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block([u64; WORDS_PER_BLOCK]);

impl Block {
    /// The all-zero block.
    pub const ZERO: Self = Self([0; WORDS_PER_BLOCK]);

    /// Create a block from four words in storage order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitstream::Block;
    ///
    /// let block = Block::from_words([1, 2, 3, 4]);
    /// assert_eq!(block.words(), [1, 2, 3, 4]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_words(words: [u64; WORDS_PER_BLOCK]) -> Self {
        Self(words)
    }

    /// Get the four words in storage order.
    #[inline]
    #[must_use]
    pub const fn words(&self) -> [u64; WORDS_PER_BLOCK] {
        self.0
    }

    /// Get a single word by index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 4`.
    #[inline]
    #[must_use]
    pub const fn word(&self, index: usize) -> u64 {
        self.0[index]
    }

    /// Check whether every bit in the block is zero.
    ///
    /// ORs the four words before testing, matching the per-block step of
    /// the aggregate truth test.
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0[0] | self.0[1] | self.0[2] | self.0[3] == 0
    }

    /// Complement every bit in the block.
    #[inline]
    pub fn complement(&mut self) {
        for word in &mut self.0 {
            *word = !*word;
        }
    }

    /// Reverse the block's 256 bits end to end.
    ///
    /// Reverses the word order and bit-reverses every word. This is the
    /// per-block half of the whole-structure transpose.
    #[inline]
    pub fn mirror(&mut self) {
        self.0.reverse();
        for word in &mut self.0 {
            *word = reverse_bits(*word);
        }
    }

    #[inline]
    pub(crate) fn set_word(&mut self, index: usize, value: u64) {
        self.0[index] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_block() {
        assert!(Block::ZERO.is_zero());
        assert_eq!(Block::ZERO.words(), [0; 4]);
        assert_eq!(Block::default(), Block::ZERO);
    }

    #[test]
    fn test_from_words_round_trip() {
        let block = Block::from_words([0xdead, 0xbeef, 0, u64::MAX]);
        assert_eq!(block.word(0), 0xdead);
        assert_eq!(block.word(1), 0xbeef);
        assert_eq!(block.word(2), 0);
        assert_eq!(block.word(3), u64::MAX);
        assert!(!block.is_zero());
    }

    #[test]
    fn test_complement() {
        let mut block = Block::ZERO;
        block.complement();
        assert_eq!(block.words(), [u64::MAX; 4]);
        block.complement();
        assert!(block.is_zero());
    }

    #[test]
    fn test_mirror_reverses_word_order() {
        let mut block = Block::from_words([1, 2, 3, 4]);
        block.mirror();
        assert_eq!(
            block.words(),
            [
                4u64.reverse_bits(),
                3u64.reverse_bits(),
                2u64.reverse_bits(),
                1u64.reverse_bits(),
            ]
        );
    }

    #[test]
    fn test_mirror_is_involution() {
        let original = Block::from_words([0x0123_4567_89ab_cdef, 7, 0, u64::MAX]);
        let mut block = original;
        block.mirror();
        block.mirror();
        assert_eq!(block, original);
    }

    #[test]
    fn test_is_zero_checks_every_word() {
        for i in 0..WORDS_PER_BLOCK {
            let mut words = [0u64; WORDS_PER_BLOCK];
            words[i] = 1;
            assert!(!Block::from_words(words).is_zero());
        }
    }
}
