//! Core module containing fundamental types and traits for memory-access
//!
//! This module provides the foundational building blocks used throughout
//! the crate: addresses, scalar byte-order encoding, range checking and errors.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{Address, ByteOrder, MemoryError, MemoryResult, Scalar, Span};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
