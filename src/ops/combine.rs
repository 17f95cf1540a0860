//! Generic bitwise combinator for AND, OR, and XOR.
//!
//! One code path serves all three operations, parameterized by a [`BitOp`]
//! tag applied word by word. Operands of different block counts are
//! handled by implicit zero-extension of the shorter one.

use crate::core::block::WORDS_PER_BLOCK;
use crate::core::stream::BitStream;

/// Tag selecting the per-word binary operation of a combinator pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitOp {
    /// Bitwise conjunction.
    And,
    /// Bitwise disjunction.
    Or,
    /// Bitwise exclusive disjunction.
    Xor,
}

impl BitOp {
    /// Apply the operation to a pair of words.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitstream::BitOp;
    ///
    /// assert_eq!(BitOp::And.apply(0b1100, 0b1010), 0b1000);
    /// assert_eq!(BitOp::Or.apply(0b1100, 0b1010), 0b1110);
    /// assert_eq!(BitOp::Xor.apply(0b1100, 0b1010), 0b0110);
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn apply(self, lhs: u64, rhs: u64) -> u64 {
        match self {
            Self::And => lhs & rhs,
            Self::Or => lhs | rhs,
            Self::Xor => lhs ^ rhs,
        }
    }
}

/// Combine two streams word by word under `op`.
///
/// The shorter operand is implicitly zero-extended, so the result always
/// has the block count of the longer one. The base clone must already hold
/// the correct high-order blocks of the result, since only the overlapping
/// prefix is overwritten: for OR and XOR that is the longer operand
/// (`x | 0 == x ^ 0 == x`), for AND the shorter one, because growing the
/// result afterward appends zero blocks (`x & 0 == 0`).
pub(crate) fn combine(op: BitOp, a: &BitStream, b: &BitStream) -> BitStream {
    let base_is_b = match op {
        BitOp::And => b.block_count() < a.block_count(),
        BitOp::Or | BitOp::Xor => b.block_count() > a.block_count(),
    };
    let mut result = if base_is_b { b.clone() } else { a.clone() };

    let paired_words = a.block_count().min(b.block_count()) * WORDS_PER_BLOCK;
    for w in 0..paired_words {
        result.set_word(w, op.apply(a.word(w), b.word(w)));
    }

    result.resize(a.block_count().max(b.block_count()));
    result
}
