//! Hexadecimal construction and diagnostic dumping.
//!
//! [`decode`] turns a hex literal, written the way a human writes one
//! (most-significant digit first), into the crate's mirrored block layout.
//! The string is scanned from its last character to its first; each digit
//! is converted to a 4-bit value, its bit order reversed, and packed into
//! an accumulator word 16 digits at a time. Every four completed words
//! append one block at the significant end of the chain, and a trailing
//! partial group still produces a final zero-padded block.
//!
//! [`dump`] is the inverse-direction diagnostic: it transposes a clone of
//! the stream back into natural reading order and prints each word as
//! zero-padded hex. The two are not required to round-trip exactly (decode
//! never strips padding that dump prints).

use crate::core::block::{Block, WORDS_PER_BLOCK};
use crate::core::stream::BitStream;
use crate::error::{BitStreamError, Result};
use crate::util::bitops::{blocks_for_digits, reverse_nibble, DIGITS_PER_WORD, NIBBLE_BITS};

/// Decode a hexadecimal string into a bitstream.
///
/// Digits are case-insensitive. The empty string decodes to the empty
/// (zero-block) vector; otherwise the block count of the result is
/// `ceil(digits / 64)`.
///
/// # Errors
///
/// Returns [`BitStreamError::InvalidHexDigit`] on the first character
/// outside `[0-9a-fA-F]`, reporting its byte offset in the input.
pub fn decode(input: &str) -> Result<BitStream> {
    let bytes = input.as_bytes();
    let mut blocks = Vec::with_capacity(blocks_for_digits(bytes.len()));

    let mut words = [0u64; WORDS_PER_BLOCK];
    let mut word_idx = 0;
    let mut acc = 0u64;

    // Least-significant digit first; `consumed` counts digits already
    // packed, `position` is the byte offset used for error reporting.
    for (consumed, position) in (0..bytes.len()).rev().enumerate() {
        let digit = match bytes[position] {
            c @ b'0'..=b'9' => c - b'0',
            c @ b'a'..=b'f' => 10 + c - b'a',
            c @ b'A'..=b'F' => 10 + c - b'A',
            other => {
                return Err(BitStreamError::invalid_hex_digit(other as char, position));
            }
        };

        let slot = consumed % DIGITS_PER_WORD;
        acc |= u64::from(reverse_nibble(digit)) << (60 - NIBBLE_BITS * slot);

        if slot == DIGITS_PER_WORD - 1 {
            words[word_idx] = acc;
            acc = 0;
            word_idx += 1;
            if word_idx == WORDS_PER_BLOCK {
                blocks.push(Block::from_words(words));
                words = [0; WORDS_PER_BLOCK];
                word_idx = 0;
            }
        }
    }

    // A trailing partial group (length not a multiple of one block) still
    // yields a final zero-padded block.
    if bytes.len() % (WORDS_PER_BLOCK * DIGITS_PER_WORD) != 0 {
        if bytes.len() % DIGITS_PER_WORD != 0 {
            words[word_idx] = acc;
        }
        blocks.push(Block::from_words(words));
    }

    Ok(BitStream::from_blocks(blocks))
}

/// Render the stream as zero-padded hex in natural reading order.
///
/// Transposes a clone back out of the mirrored layout and formats each
/// block's four words as 16 lower-hex digits, most-significant block
/// first. Diagnostic only; the empty vector dumps to an empty string.
#[must_use]
pub fn dump(stream: &BitStream) -> String {
    let mut natural = stream.clone();
    natural.transpose();

    let mut out = String::with_capacity(natural.block_count() * 64);
    for block in natural.to_blocks() {
        for word in block.words() {
            out.push_str(&format!("{word:016x}"));
        }
    }
    out
}
