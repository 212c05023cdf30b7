//! Custom error types for memory-access

use thiserror::Error;

/// Main error type for memory operations
#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("Out of range: offset {offset} + count {count} exceeds length {length}")]
    OutOfRange {
        offset: usize,
        count: usize,
        length: usize,
    },

    #[error("Address range overflows the address space: {address} + {size} bytes")]
    AddressOverflow { address: String, size: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid memory address: {0}")]
    InvalidAddress(String),

    #[error("Null address rejected")]
    NullAddress,

    #[error("Transfer too large: {requested} bytes exceeds limit of {limit} bytes")]
    TransferTooLarge { requested: usize, limit: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for memory operations
pub type MemoryResult<T> = Result<T, MemoryError>;

impl MemoryError {
    /// Creates an out-of-range error for an offset/count window over `length` items
    pub fn out_of_range(offset: usize, count: usize, length: usize) -> Self {
        MemoryError::OutOfRange {
            offset,
            count,
            length,
        }
    }

    /// Creates an address overflow error
    pub fn address_overflow(address: impl std::fmt::Display, size: usize) -> Self {
        MemoryError::AddressOverflow {
            address: address.to_string(),
            size,
        }
    }

    /// Creates an invalid argument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        MemoryError::InvalidArgument(reason.into())
    }

    /// Returns true for the range-style failures (out of range, negative arguments,
    /// address wraparound). These are all reported before any byte is touched.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            MemoryError::OutOfRange { .. }
                | MemoryError::InvalidArgument(_)
                | MemoryError::AddressOverflow { .. }
        )
    }
}
