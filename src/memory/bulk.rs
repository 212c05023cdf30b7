//! Array transfers between an address (or byte slice) and typed slices
//!
//! Every transfer validates the whole window up front and only then starts
//! moving data, so a rejected call never leaves a partial write behind.
//! Byte-order swapping is applied to each element on its own; the array as a
//! whole is never reversed.

use super::scalar::{peek, poke};
use crate::core::types::{Address, MemoryError, MemoryResult, Scalar, Span};
use tracing::trace;

/// Total byte length of `count` elements of `T`.
fn byte_len<T: Scalar>(count: usize) -> MemoryResult<usize> {
    count.checked_mul(T::WIDTH).ok_or_else(|| {
        MemoryError::invalid_argument(format!(
            "count {} of {}-byte elements overflows",
            count,
            T::WIDTH
        ))
    })
}

/// Checks that `count` elements of `T` starting at `address` do not wrap the
/// address space. Liveness of that memory is not (and cannot be) checked.
fn address_extent<T: Scalar>(address: Address, count: usize) -> MemoryResult<usize> {
    let size = byte_len::<T>(count)?;
    address.checked_end(size)?;
    Ok(size)
}

/// Writes `source[source_offset..source_offset + count]` into consecutive
/// `T::WIDTH`-byte slots starting at `address`.
///
/// Slot `i` receives `source[source_offset + i]`, byte-swapped if `swap` is set.
///
/// # Safety
///
/// `address .. address + count * T::WIDTH` must be valid for writes and must
/// not overlap `source`.
pub unsafe fn poke_array<T: Scalar>(
    address: Address,
    source: &[T],
    source_offset: usize,
    count: usize,
    swap: bool,
) -> MemoryResult<()> {
    let range = Span::new(source_offset, count).within(source.len())?;
    let size = address_extent::<T>(address, count)?;
    trace!(%address, count, size, swap, "poke array");

    for (i, value) in source[range].iter().enumerate() {
        // SAFETY: i * WIDTH + WIDTH <= size, inside the caller's writable extent.
        unsafe { poke(address.add(i * T::WIDTH), *value, swap) };
    }
    Ok(())
}

/// Reads `count` consecutive `T::WIDTH`-byte slots starting at `address` into
/// `dest[dest_offset..dest_offset + count]`.
///
/// # Safety
///
/// `address .. address + count * T::WIDTH` must be valid for reads and must
/// not overlap `dest`.
pub unsafe fn peek_array<T: Scalar>(
    address: Address,
    dest: &mut [T],
    dest_offset: usize,
    count: usize,
    swap: bool,
) -> MemoryResult<()> {
    let range = Span::new(dest_offset, count).within(dest.len())?;
    let size = address_extent::<T>(address, count)?;
    trace!(%address, count, size, swap, "peek array");

    for (i, slot) in dest[range].iter_mut().enumerate() {
        // SAFETY: i * WIDTH + WIDTH <= size, inside the caller's readable extent.
        *slot = unsafe { peek(address.add(i * T::WIDTH), swap) };
    }
    Ok(())
}

/// Decodes `count` elements from `src[src_offset..]` into
/// `dst[dst_offset..dst_offset + count]`.
pub fn bulk_get<T: Scalar>(
    dst: &mut [T],
    dst_offset: usize,
    src: &[u8],
    src_offset: usize,
    count: usize,
    swap: bool,
) -> MemoryResult<()> {
    let dst_range = Span::new(dst_offset, count).within(dst.len())?;
    let src_range = Span::new(src_offset, byte_len::<T>(count)?).within(src.len())?;
    trace!(count, src_offset, dst_offset, swap, "bulk get");

    for (slot, chunk) in dst[dst_range]
        .iter_mut()
        .zip(src[src_range].chunks_exact(T::WIDTH))
    {
        let mut bytes = T::Bytes::default();
        bytes.as_mut().copy_from_slice(chunk);
        *slot = T::from_bytes(bytes, swap);
    }
    Ok(())
}

/// Encodes `src[src_offset..src_offset + count]` into `dst` starting at byte
/// `dst_offset`.
pub fn bulk_put<T: Scalar>(
    dst: &mut [u8],
    dst_offset: usize,
    src: &[T],
    src_offset: usize,
    count: usize,
    swap: bool,
) -> MemoryResult<()> {
    let src_range = Span::new(src_offset, count).within(src.len())?;
    let dst_range = Span::new(dst_offset, byte_len::<T>(count)?).within(dst.len())?;
    trace!(count, src_offset, dst_offset, swap, "bulk put");

    for (chunk, value) in dst[dst_range]
        .chunks_exact_mut(T::WIDTH)
        .zip(&src[src_range])
    {
        chunk.copy_from_slice(value.to_bytes(swap).as_ref());
    }
    Ok(())
}

macro_rules! typed_array_ops {
    ($($ty:ty => $peek:ident, $poke:ident);* $(;)?) => {
        $(
            #[doc = concat!("[`peek_array`] for `", stringify!($ty), "` elements.")]
            ///
            /// # Safety
            ///
            /// Same contract as [`peek_array`].
            pub unsafe fn $peek(
                address: Address,
                dest: &mut [$ty],
                dest_offset: usize,
                count: usize,
                swap: bool,
            ) -> MemoryResult<()> {
                unsafe { peek_array(address, dest, dest_offset, count, swap) }
            }

            #[doc = concat!("[`poke_array`] for `", stringify!($ty), "` elements.")]
            ///
            /// # Safety
            ///
            /// Same contract as [`poke_array`].
            pub unsafe fn $poke(
                address: Address,
                source: &[$ty],
                source_offset: usize,
                count: usize,
                swap: bool,
            ) -> MemoryResult<()> {
                unsafe { poke_array(address, source, source_offset, count, swap) }
            }
        )*
    };
}

typed_array_ops! {
    i16 => peek_short_array, poke_short_array;
    i32 => peek_int_array, poke_int_array;
    i64 => peek_long_array, poke_long_array;
    u16 => peek_char_array, poke_char_array;
    f32 => peek_float_array, poke_float_array;
    f64 => peek_double_array, poke_double_array;
}

/// Copies `count` raw bytes from `address` into `dest[dest_offset..]`.
///
/// # Safety
///
/// `address .. address + count` must be readable and must not overlap `dest`.
pub unsafe fn peek_byte_array(
    address: Address,
    dest: &mut [u8],
    dest_offset: usize,
    count: usize,
) -> MemoryResult<()> {
    unsafe { peek_array(address, dest, dest_offset, count, false) }
}

/// Copies `source[source_offset..source_offset + count]` to `address`.
///
/// # Safety
///
/// `address .. address + count` must be writable and must not overlap `source`.
pub unsafe fn poke_byte_array(
    address: Address,
    source: &[u8],
    source_offset: usize,
    count: usize,
) -> MemoryResult<()> {
    unsafe { poke_array(address, source, source_offset, count, false) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::AddressOf;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_poke_short_array_layout() {
        let mut buf = [0u8; 9];
        let base = buf.address_of_mut();
        unsafe {
            poke_short_array(base.add(1), &[0x0001, 0x0300], 0, 2, false).unwrap();
        }
        assert_eq!(buf, [0, 0x01, 0x00, 0x00, 0x03, 0, 0, 0, 0]);

        let base = buf.address_of_mut();
        unsafe {
            poke_short_array(base.add(1), &[0x0001, 0x0300], 0, 2, true).unwrap();
        }
        assert_eq!(buf, [0, 0x00, 0x01, 0x03, 0x00, 0, 0, 0, 0]);
    }

    #[test]
    fn test_peek_array_into_offset() {
        let mut buf = [0u8; 8];
        let base = buf.address_of_mut();
        let mut dest = [0i32; 4];
        unsafe {
            poke_int_array(base, &[7, -7], 0, 2, true).unwrap();
            peek_int_array(base, &mut dest, 1, 2, true).unwrap();
        }
        assert_eq!(dest, [0, 7, -7, 0]);
    }

    #[test]
    fn test_rejected_window_writes_nothing() {
        let mut buf = [0xEEu8; 16];
        let base = buf.address_of_mut();
        let result = unsafe { poke_long_array(base, &[1, 2], 1, 2, false) };
        assert!(matches!(
            result,
            Err(MemoryError::OutOfRange {
                offset: 1,
                count: 2,
                length: 2
            })
        ));
        assert_eq!(buf, [0xEE; 16]);
    }

    #[test]
    fn test_wrapping_address_rejected() {
        let top = Address::new(usize::MAX - 2);
        let result = unsafe { poke_int_array(top, &[1], 0, 1, false) };
        assert!(matches!(result, Err(MemoryError::AddressOverflow { .. })));
    }

    #[test]
    fn test_zero_count_touches_nothing() {
        // Zero-length transfers never dereference the address.
        let mut dest = [5i64; 2];
        unsafe {
            poke_long_array(Address::new(8), &[1, 2], 2, 0, true).unwrap();
            peek_long_array(Address::new(8), &mut dest, 2, 0, true).unwrap();
        }
        assert_eq!(dest, [5, 5]);
    }

    #[test]
    fn test_float_and_char_arrays() {
        let mut buf = [0u8; 24];
        let base = buf.address_of_mut();
        let mut doubles = [0f64; 2];
        let mut chars = [0u16; 2];
        unsafe {
            poke_double_array(base, &[1.25, -0.5], 0, 2, true).unwrap();
            peek_double_array(base, &mut doubles, 0, 2, true).unwrap();
            poke_char_array(base.add(16), &[0x0041, 0x263A], 0, 2, false).unwrap();
            peek_char_array(base.add(16), &mut chars, 0, 2, false).unwrap();
        }
        assert_eq!(doubles, [1.25, -0.5]);
        assert_eq!(chars, [0x0041, 0x263A]);
        assert_eq!(&buf[16..20], &[0x41, 0x00, 0x3A, 0x26]);
    }

    #[test]
    fn test_byte_arrays() {
        let mut buf = [0u8; 6];
        let base = buf.address_of_mut();
        let mut out = [0u8; 4];
        unsafe {
            poke_byte_array(base.add(1), &[9, 8, 7, 6], 1, 3).unwrap();
            peek_byte_array(base, &mut out, 0, 4).unwrap();
        }
        assert_eq!(out, [0, 8, 7, 6]);
    }

    #[test]
    fn test_bulk_get_and_put() {
        let mut bytes = [0u8; 10];
        bulk_put(&mut bytes, 2, &[0x1122i16, 0x3344, 0x5566], 1, 2, true).unwrap();
        assert_eq!(bytes, [0, 0, 0x33, 0x44, 0x55, 0x66, 0, 0, 0, 0]);

        let mut values = [0i16; 3];
        bulk_get(&mut values, 0, &bytes, 2, 2, true).unwrap();
        assert_eq!(values, [0x3344, 0x5566, 0]);

        bulk_get(&mut values, 0, &bytes, 2, 1, false).unwrap();
        assert_eq!(values[0], 0x4433);
    }

    #[test]
    fn test_bulk_bounds() {
        let mut bytes = [0u8; 7];
        assert!(bulk_put(&mut bytes, 0, &[1i32, 2], 0, 2, false).is_err());
        assert_eq!(bytes, [0; 7]);

        let mut values = [0i32; 1];
        assert!(bulk_get(&mut values, 0, &bytes, 0, 2, false).is_err());
        assert!(bulk_get(&mut values, 0, &bytes, 4, 1, false).is_err());
        assert!(bulk_get(&mut values, 0, &bytes, 3, 1, false).is_ok());
    }
}
