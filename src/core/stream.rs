//! The [`BitStream`] value type.
//!
//! A `BitStream` is an arbitrary-length bit vector stored as an owned
//! sequence of 256-bit [`Block`]s, least-significant block first. The block
//! count is the length of that sequence; there is no separately maintained
//! counter to fall out of sync.
//!
//! # Ownership
//!
//! Every value exclusively owns its blocks. `Clone` deep-copies, drop
//! releases, and no method hands out a reference into another value's
//! storage, so two live values never share a block.
//!
//! # Examples
//!
//! ```
//! use bitstream::BitStream;
//!
//! let value = BitStream::from_hex("deadbeef")?;
//! assert_eq!(value.block_count(), 1);
//! assert!(value.any());
//!
//! let nibble_up = &value << 4;
//! assert_eq!(nibble_up, BitStream::from_hex("deadbeef0")?);
//! # Ok::<(), bitstream::BitStreamError>(())
//! ```

use std::fmt;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

use crate::codec::hex;
use crate::core::block::{Block, BLOCK_BITS, WORDS_PER_BLOCK};
use crate::error::Result;
use crate::ops::combine::{combine, BitOp};
use crate::ops::shift;
use crate::util::bitops::{msb_mask, word_index};

/// Arbitrary-length bit vector backed by a chain of 256-bit blocks.
///
/// Construction is from a block count (zero-initialized), a hexadecimal
/// literal, or by copy. All bitwise operations produce new values; the
/// compound-assignment operators are defined as `self = self op rhs`.
///
/// # Type Properties
///
/// - `Clone`: deep copy, block for block
/// - `PartialEq`/`Eq`: value equality, including block count
/// - `Default`: four zero blocks (1024 bits)
/// - `Serde`: serialization support behind the `serde` feature flag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitStream {
    /// Owned blocks, index 0 holding the least-significant 256 bits.
    blocks: Vec<Block>,
}

impl BitStream {
    /// Block count of a default-constructed stream.
    pub const DEFAULT_BLOCKS: usize = 4;

    /// Create a zero-initialized stream of exactly `block_count` blocks.
    ///
    /// A count of zero yields the empty (zero-width) vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitstream::BitStream;
    ///
    /// let zeros = BitStream::new(2);
    /// assert_eq!(zeros.block_count(), 2);
    /// assert!(!zeros.any());
    ///
    /// assert_eq!(BitStream::new(0).block_count(), 0);
    /// ```
    #[must_use]
    pub fn new(block_count: usize) -> Self {
        Self {
            blocks: vec![Block::ZERO; block_count],
        }
    }

    /// Build a stream from a hexadecimal literal, most-significant digit
    /// first.
    ///
    /// The block count of the result is `ceil(digits / 64)`; the empty
    /// string yields the empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`BitStreamError::InvalidHexDigit`] for characters outside
    /// `[0-9a-fA-F]`.
    ///
    /// [`BitStreamError::InvalidHexDigit`]: crate::BitStreamError::InvalidHexDigit
    ///
    /// # Examples
    ///
    /// ```
    /// use bitstream::BitStream;
    ///
    /// let value = BitStream::from_hex("Cafe")?;
    /// assert_eq!(value.block_count(), 1);
    /// assert!(BitStream::from_hex("not hex").is_err());
    /// # Ok::<(), bitstream::BitStreamError>(())
    /// ```
    pub fn from_hex(literal: &str) -> Result<Self> {
        hex::decode(literal)
    }

    /// Assemble a stream from blocks in least-significant-first order.
    #[must_use]
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Copy out the blocks in least-significant-first order.
    #[must_use]
    pub fn to_blocks(&self) -> Vec<Block> {
        self.blocks.clone()
    }

    /// Current size in blocks.
    #[inline]
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Total width in bits (`block_count() * 256`).
    #[inline]
    #[must_use]
    pub fn bit_width(&self) -> u64 {
        (self.blocks.len() * BLOCK_BITS) as u64
    }

    /// Check whether this is the empty (zero-width) vector.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Deep-copy the first `min(block_count, limit)` blocks.
    ///
    /// This is the truncating primitive behind shrinking [`resize`]; with
    /// `limit >= block_count()` it is an ordinary clone.
    ///
    /// [`resize`]: Self::resize
    ///
    /// # Examples
    ///
    /// ```
    /// use bitstream::BitStream;
    ///
    /// let wide = BitStream::new(4);
    /// assert_eq!(wide.clone_prefix(2).block_count(), 2);
    /// assert_eq!(wide.clone_prefix(10).block_count(), 4);
    /// ```
    #[must_use]
    pub fn clone_prefix(&self, limit: usize) -> Self {
        let keep = self.blocks.len().min(limit);
        Self {
            blocks: self.blocks[..keep].to_vec(),
        }
    }

    /// Resize to `new_size` blocks.
    ///
    /// Growing appends zero blocks after the current most-significant
    /// block, preserving the value; shrinking truncates at the
    /// most-significant end; equal size is a no-op.
    pub fn resize(&mut self, new_size: usize) {
        self.blocks.resize(new_size, Block::ZERO);
    }

    /// Isolate a single bit.
    ///
    /// Returns a stream of the same block count with every bit zero except
    /// the bit at `bit`, which keeps its original value. A position at or
    /// beyond [`bit_width`] returns the empty vector rather than an error.
    ///
    /// [`bit_width`]: Self::bit_width
    ///
    /// # Examples
    ///
    /// ```
    /// use bitstream::BitStream;
    ///
    /// let value = BitStream::from_hex("3")?; // bits 0 and 1 set
    /// assert!(value.isolate(0).any());
    /// assert!(value.isolate(1).any());
    /// assert!(!value.isolate(2).any());
    ///
    /// // Out of range: empty vector, not an error.
    /// assert_eq!(value.isolate(256).block_count(), 0);
    /// # Ok::<(), bitstream::BitStreamError>(())
    /// ```
    #[must_use]
    pub fn isolate(&self, bit: u64) -> Self {
        if bit >= self.bit_width() {
            return Self::new(0);
        }
        let mut result = Self::new(self.block_count());
        let index = word_index(bit);
        result.set_word(index, self.word(index) & msb_mask(bit));
        result
    }

    /// Aggregate truth value: `true` iff any bit is set.
    ///
    /// Scans blocks head to tail and short-circuits at the first block
    /// containing a nonzero word.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitstream::BitStream;
    ///
    /// assert!(!BitStream::default().any());
    /// assert!(BitStream::from_hex("10000")?.any());
    /// # Ok::<(), bitstream::BitStreamError>(())
    /// ```
    #[must_use]
    pub fn any(&self) -> bool {
        self.blocks.iter().any(|block| !block.is_zero())
    }

    /// Shift toward higher significance by `count` bits.
    ///
    /// The block count is unchanged: bits shifted past the top are
    /// discarded and vacated low positions are zero-filled. A count of at
    /// least [`bit_width`] yields an all-zero vector of the same size.
    ///
    /// [`bit_width`]: Self::bit_width
    #[must_use]
    pub fn shift_left(&self, count: u64) -> Self {
        shift::shl(self, count)
    }

    /// Shift toward lower significance by `count` bits.
    ///
    /// Derived from [`shift_left`] by transposing before and after, which
    /// is why the same edge-case contract applies in mirror image.
    ///
    /// [`shift_left`]: Self::shift_left
    #[must_use]
    pub fn shift_right(&self, count: u64) -> Self {
        shift::shr(self, count)
    }

    /// Reverse the structure in place: block order, word order within each
    /// block, and bit order within each word.
    ///
    /// Transpose is an involution; applying it twice restores the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitstream::BitStream;
    ///
    /// let original = BitStream::from_hex("123456789abcdef")?;
    /// let mut flipped = original.clone();
    /// flipped.transpose();
    /// flipped.transpose();
    /// assert_eq!(flipped, original);
    /// # Ok::<(), bitstream::BitStreamError>(())
    /// ```
    pub fn transpose(&mut self) {
        shift::transpose(self);
    }

    /// Combine with another stream under the given operation.
    ///
    /// The shorter operand is implicitly zero-extended; the result has the
    /// larger block count of the two. The `&`, `|`, and `^` operators
    /// delegate here.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitstream::{BitOp, BitStream};
    ///
    /// let a = BitStream::from_hex("ff")?;
    /// let b = BitStream::from_hex("0f")?;
    /// assert_eq!(a.combine(BitOp::Xor, &b), BitStream::from_hex("f0")?);
    /// # Ok::<(), bitstream::BitStreamError>(())
    /// ```
    #[must_use]
    pub fn combine(&self, op: BitOp, rhs: &Self) -> Self {
        combine(op, self, rhs)
    }

    /// Bit-complement every word, block count unchanged.
    ///
    /// The `!` operator delegates here.
    #[must_use]
    pub fn complement(&self) -> Self {
        let mut result = self.clone();
        for block in &mut result.blocks {
            block.complement();
        }
        result
    }

    /// Render as zero-padded hex in natural reading order.
    ///
    /// Diagnostic only; see [`crate::codec::hex::dump`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bitstream::BitStream;
    ///
    /// let value = BitStream::from_hex("ff")?;
    /// assert!(value.dump().ends_with("ff"));
    /// assert_eq!(value.dump().len(), 64); // one full block
    /// # Ok::<(), bitstream::BitStreamError>(())
    /// ```
    #[must_use]
    pub fn dump(&self) -> String {
        hex::dump(self)
    }

    #[inline]
    pub(crate) fn word(&self, flat: usize) -> u64 {
        self.blocks[flat / WORDS_PER_BLOCK].word(flat % WORDS_PER_BLOCK)
    }

    #[inline]
    pub(crate) fn set_word(&mut self, flat: usize, value: u64) {
        self.blocks[flat / WORDS_PER_BLOCK].set_word(flat % WORDS_PER_BLOCK, value);
    }

    #[inline]
    pub(crate) fn blocks_mut(&mut self) -> &mut [Block] {
        &mut self.blocks
    }
}

impl Default for BitStream {
    /// Four zero blocks (1024 bits).
    fn default() -> Self {
        Self::new(Self::DEFAULT_BLOCKS)
    }
}

impl fmt::Display for BitStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

impl Shl<u64> for &BitStream {
    type Output = BitStream;

    fn shl(self, count: u64) -> BitStream {
        shift::shl(self, count)
    }
}

impl Shl<u64> for BitStream {
    type Output = BitStream;

    fn shl(self, count: u64) -> BitStream {
        shift::shl(&self, count)
    }
}

impl ShlAssign<u64> for BitStream {
    fn shl_assign(&mut self, count: u64) {
        *self = shift::shl(self, count);
    }
}

impl Shr<u64> for &BitStream {
    type Output = BitStream;

    fn shr(self, count: u64) -> BitStream {
        shift::shr(self, count)
    }
}

impl Shr<u64> for BitStream {
    type Output = BitStream;

    fn shr(self, count: u64) -> BitStream {
        shift::shr(&self, count)
    }
}

impl ShrAssign<u64> for BitStream {
    fn shr_assign(&mut self, count: u64) {
        *self = shift::shr(self, count);
    }
}

impl BitAnd for &BitStream {
    type Output = BitStream;

    fn bitand(self, rhs: Self) -> BitStream {
        combine(BitOp::And, self, rhs)
    }
}

impl BitAnd for BitStream {
    type Output = BitStream;

    fn bitand(self, rhs: Self) -> BitStream {
        combine(BitOp::And, &self, &rhs)
    }
}

impl BitAndAssign<&BitStream> for BitStream {
    fn bitand_assign(&mut self, rhs: &BitStream) {
        *self = combine(BitOp::And, self, rhs);
    }
}

impl BitOr for &BitStream {
    type Output = BitStream;

    fn bitor(self, rhs: Self) -> BitStream {
        combine(BitOp::Or, self, rhs)
    }
}

impl BitOr for BitStream {
    type Output = BitStream;

    fn bitor(self, rhs: Self) -> BitStream {
        combine(BitOp::Or, &self, &rhs)
    }
}

impl BitOrAssign<&BitStream> for BitStream {
    fn bitor_assign(&mut self, rhs: &BitStream) {
        *self = combine(BitOp::Or, self, rhs);
    }
}

impl BitXor for &BitStream {
    type Output = BitStream;

    fn bitxor(self, rhs: Self) -> BitStream {
        combine(BitOp::Xor, self, rhs)
    }
}

impl BitXor for BitStream {
    type Output = BitStream;

    fn bitxor(self, rhs: Self) -> BitStream {
        combine(BitOp::Xor, &self, &rhs)
    }
}

impl BitXorAssign<&BitStream> for BitStream {
    fn bitxor_assign(&mut self, rhs: &BitStream) {
        *self = combine(BitOp::Xor, self, rhs);
    }
}

impl Not for &BitStream {
    type Output = BitStream;

    fn not(self) -> BitStream {
        self.complement()
    }
}

impl Not for BitStream {
    type Output = BitStream;

    fn not(self) -> BitStream {
        self.complement()
    }
}
