//! Core type definitions for memory-access
//!
//! This module contains the fundamental types shared by every accessor:
//! the address wrapper, scalar encoding, offset/count windows and error types.

mod address;
mod error;
mod scalar;
mod span;

// Re-export all public types
pub use address::Address;
pub use error::{MemoryError, MemoryResult};
pub use scalar::{reverse_bytes, Scalar};
pub use span::{ByteOrder, Span};
