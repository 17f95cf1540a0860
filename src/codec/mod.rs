//! Textual interfaces: the hex-string constructor and the debug dump.
//!
//! These are the only text surfaces of the crate: [`hex::decode`] builds a
//! value from a literal, [`hex::dump`] renders one for diagnostics. There
//! is no file format, wire protocol, or CLI here.

pub mod hex;
