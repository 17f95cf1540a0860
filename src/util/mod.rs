//! Internal utility functions and helpers.
//!
//! This module provides low-level utilities used throughout the bitstream
//! crate. These are implementation details of the storage layout rather than
//! part of the value-level API.
//!
//! # Modules
//!
//! - [`bitops`] - Bit manipulation utilities for the mirrored word layout

#![allow(clippy::pedantic)]

pub mod bitops;

// Re-export commonly used items
pub use bitops::{msb_mask, reverse_bits, reverse_nibble, word_index};
