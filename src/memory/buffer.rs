//! Bounds-checked scalar access into byte slices
//!
//! Same byte conventions as the address-based accessors, but the target is a
//! plain `&[u8]`, so no `unsafe` is involved and every offset is validated.

use crate::core::types::{ByteOrder, MemoryResult, Scalar, Span};

/// Reads a `T` from `buf[offset..offset + T::WIDTH]`.
pub fn peek_at<T: Scalar>(buf: &[u8], offset: usize, order: ByteOrder) -> MemoryResult<T> {
    let range = Span::new(offset, T::WIDTH).within(buf.len())?;
    let mut bytes = T::Bytes::default();
    bytes.as_mut().copy_from_slice(&buf[range]);
    Ok(T::from_bytes(bytes, order.needs_swap()))
}

/// Writes `value` into `buf[offset..offset + T::WIDTH]`.
pub fn poke_at<T: Scalar>(
    buf: &mut [u8],
    offset: usize,
    value: T,
    order: ByteOrder,
) -> MemoryResult<()> {
    let range = Span::new(offset, T::WIDTH).within(buf.len())?;
    buf[range].copy_from_slice(value.to_bytes(order.needs_swap()).as_ref());
    Ok(())
}

pub fn peek_short_at(buf: &[u8], offset: usize, order: ByteOrder) -> MemoryResult<i16> {
    peek_at(buf, offset, order)
}

pub fn peek_int_at(buf: &[u8], offset: usize, order: ByteOrder) -> MemoryResult<i32> {
    peek_at(buf, offset, order)
}

pub fn peek_long_at(buf: &[u8], offset: usize, order: ByteOrder) -> MemoryResult<i64> {
    peek_at(buf, offset, order)
}

pub fn poke_short_at(
    buf: &mut [u8],
    offset: usize,
    value: i16,
    order: ByteOrder,
) -> MemoryResult<()> {
    poke_at(buf, offset, value, order)
}

pub fn poke_int_at(
    buf: &mut [u8],
    offset: usize,
    value: i32,
    order: ByteOrder,
) -> MemoryResult<()> {
    poke_at(buf, offset, value, order)
}

pub fn poke_long_at(
    buf: &mut [u8],
    offset: usize,
    value: i64,
    order: ByteOrder,
) -> MemoryResult<()> {
    poke_at(buf, offset, value, order)
}
