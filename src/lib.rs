//! bitstream: arbitrary-length bit vectors with block-chained storage.
//!
//! This crate provides [`BitStream`], a bit vector of any width built from
//! 256-bit blocks, for code that needs fixed- or variable-width bit
//! manipulation beyond native machine-word sizes: wide masks, crypto
//! scratch values, simulation state.
//!
//! # Quick Start
//!
//! ```
//! use bitstream::BitStream;
//!
//! // Build values from hex literals or from a zero-initialized width.
//! let mask = BitStream::from_hex("ff00ff00ff00ff00ff00ff00ff00ff00ff00")?;
//! let zeros = BitStream::new(2); // 512 bits
//!
//! // Shift, combine, and test.
//! let nudged = &mask << 13;
//! let folded = &nudged ^ &mask;
//! assert!(folded.any());
//! assert_eq!(folded.block_count(), 1);
//!
//! // Single-bit extraction and a diagnostic hex dump.
//! let bit = mask.isolate(9);
//! assert!(bit.any());
//! println!("{}", folded.dump());
//! # let _ = zeros;
//! # Ok::<(), bitstream::BitStreamError>(())
//! ```
//!
//! # Storage Model
//!
//! A value owns a chain of [`Block`]s (four 64-bit words each); block 0
//! holds the least-significant 256 bits. Words are stored in a mirrored
//! bit order established by the hex decoder: this lets a single left-shift
//! primitive serve both shift directions, with the right shift derived by
//! transposing, shifting, and transposing back (see [`ops::shift`]).
//!
//! # Edge-Case Contract
//!
//! The API avoids errors for in-domain inputs:
//!
//! - shift counts at or beyond the total width produce an all-zero value
//!   of unchanged block count
//! - isolating a bit position beyond the width produces the empty vector
//! - bitwise combination of different widths zero-extends the shorter
//!   operand
//!
//! The one recoverable error is a malformed hex literal, rejected with
//! [`BitStreamError::InvalidHexDigit`].
//!
//! # Concurrency
//!
//! Values are plain owned data: `Send + Sync` like any `Vec`-backed
//! struct, with no interior mutability and no sharing between live values.
//! The crate performs no locking because none is needed under exclusive
//! ownership.
//!
//! # Features
//!
//! - `serde` - serialization support for [`Block`] and [`BitStream`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::len_zero)]

/// Textual interfaces: hex decoding and diagnostic dumping
pub mod codec;

/// Core data structures: blocks and the bitstream value type
pub mod core;

/// Error types and result alias
pub mod error;

/// Shift and combinator algorithms
pub mod ops;

/// Internal bit-manipulation helpers
pub mod util;

// Re-export commonly used types at crate root
pub use crate::core::block::{Block, BLOCK_BITS, WORDS_PER_BLOCK, WORD_BITS};
pub use crate::core::stream::BitStream;
pub use crate::error::{BitStreamError, Result};
pub use crate::ops::combine::BitOp;

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use bitstream::prelude::*;
///
/// let value = BitStream::from_hex("8080").unwrap();
/// assert!(value.any());
/// ```
pub mod prelude {
    pub use crate::core::block::{Block, BLOCK_BITS, WORDS_PER_BLOCK, WORD_BITS};
    pub use crate::core::stream::BitStream;
    pub use crate::error::{BitStreamError, Result};
    pub use crate::ops::combine::BitOp;
}
