//! Overlap-safe byte range copy
//!
//! After a move, the destination holds what the source held *before* the
//! call, even when both ranges share bytes. When the destination starts
//! inside the source range the copy runs from the highest index down;
//! otherwise it runs upward.

use super::AddressOf;
use crate::core::types::{Address, MemoryResult, Span};
use tracing::trace;

/// Order in which a move visits bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDirection {
    /// Lowest index first
    Ascending,
    /// Highest index first
    Descending,
}

/// Picks the copy order for moving `count` bytes from `src` to `dest`.
///
/// Descending is only needed when `dest` lies strictly inside
/// `src .. src + count`; a forward copy would overwrite source bytes
/// before reading them.
pub fn copy_direction(dest: Address, src: Address, count: usize) -> CopyDirection {
    let src_end = src.as_usize().saturating_add(count);
    if dest > src && dest.as_usize() < src_end {
        CopyDirection::Descending
    } else {
        CopyDirection::Ascending
    }
}

/// Moves `count` bytes from `src` to `dest`, tolerating any overlap.
///
/// Fails without touching memory if either extent wraps the address space.
///
/// # Safety
///
/// `src .. src + count` must be readable and `dest .. dest + count` writable
/// for the duration of the call.
pub unsafe fn memmove_raw(dest: Address, src: Address, count: usize) -> MemoryResult<()> {
    dest.checked_end(count)?;
    src.checked_end(count)?;
    if count == 0 || dest == src {
        return Ok(());
    }

    let direction = copy_direction(dest, src, count);
    trace!(%dest, %src, count, ?direction, "memmove");

    let d = dest.as_mut_ptr::<u8>();
    let s = src.as_ptr::<u8>();
    // SAFETY: every index is below `count`, inside both caller-provided extents.
    unsafe {
        match direction {
            CopyDirection::Ascending => {
                for i in 0..count {
                    d.add(i).write(s.add(i).read());
                }
            }
            CopyDirection::Descending => {
                for i in (0..count).rev() {
                    d.add(i).write(s.add(i).read());
                }
            }
        }
    }
    Ok(())
}

/// Copies `src[src_offset..src_offset + count]` into
/// `dest[dest_offset..dest_offset + count]`.
///
/// Both windows are checked before any byte moves.
pub fn memmove(
    dest: &mut [u8],
    dest_offset: usize,
    src: &[u8],
    src_offset: usize,
    count: usize,
) -> MemoryResult<()> {
    Span::new(dest_offset, count).within(dest.len())?;
    Span::new(src_offset, count).within(src.len())?;

    let dest_addr = dest.address_of_mut().add(dest_offset);
    let src_addr = src.address_of().add(src_offset);
    // SAFETY: both windows were validated against their slices above.
    unsafe { memmove_raw(dest_addr, src_addr, count) }
}

/// Copies `count` bytes inside one buffer, from `src_offset` to `dest_offset`.
///
/// The ranges may overlap in either direction.
pub fn memmove_within(
    buf: &mut [u8],
    dest_offset: usize,
    src_offset: usize,
    count: usize,
) -> MemoryResult<()> {
    Span::new(dest_offset, count).within(buf.len())?;
    Span::new(src_offset, count).within(buf.len())?;

    let base = buf.address_of_mut();
    // SAFETY: both windows were validated against `buf` above.
    unsafe { memmove_raw(base.add(dest_offset), base.add(src_offset), count) }
}
