//! Algorithms over block-chained bit vectors.
//!
//! # Modules
//!
//! - [`shift`] - left shift primitive, transpose, and the derived right shift
//! - [`combine`] - generic AND/OR/XOR combinator with zero-extension
//!
//! The functions here are crate-internal; callers reach them through the
//! methods and operator impls on [`BitStream`](crate::BitStream).

pub mod combine;
pub mod shift;

pub use combine::BitOp;
