//! Bit manipulation utilities for the mirrored word layout.
//!
//! This module provides the low-level bit operations shared by the hex
//! decoder, the shift engine, and single-bit isolation. They all revolve
//! around the crate's internal storage order, in which every 64-bit word
//! holds its logical bits mirrored (logical bit 0 of a word lives at the
//! word's most significant position).
//!
//! # Performance Notes
//!
//! - `reverse_bits` compiles to a handful of instructions (or a single one
//!   on architectures with a bit-reverse instruction)
//! - Index/offset helpers are branch-free shifts and masks

#![allow(clippy::pedantic)]

/// Number of bits in a hexadecimal digit.
pub const NIBBLE_BITS: usize = 4;

/// Hex digits that fit in one 64-bit word.
pub const DIGITS_PER_WORD: usize = 16;

/// Reverse the bit order of a 4-bit value.
///
/// The input must be a nibble (`0..=0xf`); higher bits are discarded.
/// This is the per-digit transform the hex decoder applies before packing
/// digits into words.
///
/// # Examples
///
/// ```
/// use bitstream::util::bitops::reverse_nibble;
///
/// assert_eq!(reverse_nibble(0b0001), 0b1000);
/// assert_eq!(reverse_nibble(0b1010), 0b0101);
/// assert_eq!(reverse_nibble(0b1111), 0b1111);
/// assert_eq!(reverse_nibble(0b0110), 0b0110);
/// ```
#[inline(always)]
#[must_use]
pub const fn reverse_nibble(nibble: u8) -> u8 {
    (nibble & 0x0f).reverse_bits() >> 4
}

/// Reverse the bits in a u64 value.
///
/// # Examples
///
/// ```
/// use bitstream::util::bitops::reverse_bits;
///
/// assert_eq!(reverse_bits(0b1), 1u64 << 63);
/// assert_eq!(reverse_bits(u64::MAX), u64::MAX);
/// assert_eq!(reverse_bits(reverse_bits(0xdead_beef)), 0xdead_beef);
/// ```
#[inline(always)]
#[must_use]
pub const fn reverse_bits(value: u64) -> u64 {
    value.reverse_bits()
}

/// Get the index of the word containing the given logical bit.
///
/// # Examples
///
/// ```
/// use bitstream::util::bitops::word_index;
///
/// assert_eq!(word_index(0), 0);
/// assert_eq!(word_index(63), 0);
/// assert_eq!(word_index(64), 1);
/// assert_eq!(word_index(256), 4);
/// ```
#[inline(always)]
#[must_use]
pub const fn word_index(bit: u64) -> usize {
    (bit >> 6) as usize
}

/// Create a single-bit mask for a logical bit offset within a word.
///
/// Because words are stored mirrored, logical offset 0 maps to the word's
/// most significant bit and offset 63 to its least significant bit.
///
/// # Examples
///
/// ```
/// use bitstream::util::bitops::msb_mask;
///
/// assert_eq!(msb_mask(0), 1u64 << 63);
/// assert_eq!(msb_mask(1), 1u64 << 62);
/// assert_eq!(msb_mask(63), 1);
/// ```
#[inline(always)]
#[must_use]
pub const fn msb_mask(offset: u64) -> u64 {
    (1u64 << 63) >> (offset & 63)
}

/// Calculate the number of 256-bit blocks needed to hold `digits` hex digits.
///
/// # Examples
///
/// ```
/// use bitstream::util::bitops::blocks_for_digits;
///
/// assert_eq!(blocks_for_digits(0), 0);
/// assert_eq!(blocks_for_digits(1), 1);
/// assert_eq!(blocks_for_digits(64), 1);
/// assert_eq!(blocks_for_digits(65), 2);
/// assert_eq!(blocks_for_digits(128), 2);
/// ```
#[inline]
#[must_use]
pub const fn blocks_for_digits(digits: usize) -> usize {
    (digits + 63) / 64
}
