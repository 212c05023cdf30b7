//! Offset/count windows over caller-owned sequences

use super::error::{MemoryError, MemoryResult};
use std::ops::Range;

/// An `offset`/`count` window selecting part of a sequence.
///
/// A `Span` is only meaningful against a particular length; [`Span::within`]
/// performs that check and yields the index range to operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub offset: usize,
    pub count: usize,
}

impl Span {
    /// Creates a new span
    pub const fn new(offset: usize, count: usize) -> Self {
        Span { offset, count }
    }

    /// Builds a span from signed values, failing closed on negatives.
    pub fn from_signed(offset: i64, count: i64) -> MemoryResult<Self> {
        if offset < 0 {
            return Err(MemoryError::invalid_argument(format!(
                "negative offset {}",
                offset
            )));
        }
        if count < 0 {
            return Err(MemoryError::invalid_argument(format!(
                "negative count {}",
                count
            )));
        }

        let offset = usize::try_from(offset)
            .map_err(|_| MemoryError::invalid_argument(format!("offset {} too large", offset)))?;
        let count = usize::try_from(count)
            .map_err(|_| MemoryError::invalid_argument(format!("count {} too large", count)))?;
        Ok(Span { offset, count })
    }

    /// Whether the span selects nothing
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Validates the span against a sequence of `length` items.
    pub fn within(&self, length: usize) -> MemoryResult<Range<usize>> {
        match self.offset.checked_add(self.count) {
            Some(end) if end <= length => Ok(self.offset..end),
            _ => {
                tracing::debug!(
                    offset = self.offset,
                    count = self.count,
                    length,
                    "span rejected"
                );
                Err(MemoryError::out_of_range(self.offset, self.count, length))
            }
        }
    }
}

/// Byte order selector for the slice-based accessors.
///
/// `LittleEndian` is the native (unswapped) convention; `BigEndian` is the
/// swapped one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    #[default]
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    /// The unswapped convention
    pub const NATIVE: ByteOrder = ByteOrder::LittleEndian;

    /// Whether values in this order are stored byte-reversed
    pub const fn needs_swap(self) -> bool {
        matches!(self, ByteOrder::BigEndian)
    }
}
