//! Core types of the bitstream crate.
//!
//! # Module Organization
//!
//! ```text
//! core/
//! ├── block.rs  - Word/Block storage primitives
//! ├── stream.rs - BitStream value type and public operations
//! └── mod.rs    - This file (public API)
//! ```
//!
//! # Design Principles
//!
//! 1. **Exclusive ownership**: every [`BitStream`] owns its blocks;
//!    copies are deep and no API hands out references into another
//!    value's storage
//! 2. **Structural invariants over bookkeeping**: the block count is the
//!    length of the owned sequence, never a separately maintained field
//! 3. **Defined edge cases**: out-of-range shifts and bit positions have
//!    specified results instead of being errors

pub mod block;
pub mod stream;

pub use block::{Block, BLOCK_BITS, WORDS_PER_BLOCK, WORD_BITS};
pub use stream::BitStream;
