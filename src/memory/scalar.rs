//! Single-value peek/poke at arbitrary, possibly unaligned, addresses
//!
//! Every access goes through a byte-at-a-time loop into a `[u8; W]` buffer,
//! so no wide load or store is ever issued against the target address and
//! alignment never matters.

use crate::core::types::{Address, Scalar};

/// Reads one `T` starting at `address`.
///
/// # Safety
///
/// `address .. address + T::WIDTH` must be valid for reads for the duration
/// of the call and must not be concurrently written.
pub unsafe fn peek<T: Scalar>(address: Address, swap: bool) -> T {
    let src = address.as_ptr::<u8>();
    let mut bytes = T::Bytes::default();
    for (i, byte) in bytes.as_mut().iter_mut().enumerate() {
        // SAFETY: i < T::WIDTH, covered by the caller's contract.
        *byte = unsafe { src.add(i).read() };
    }
    T::from_bytes(bytes, swap)
}

/// Writes `value` into the `T::WIDTH` bytes starting at `address`.
///
/// # Safety
///
/// `address .. address + T::WIDTH` must be valid for writes for the duration
/// of the call and must not be concurrently accessed.
pub unsafe fn poke<T: Scalar>(address: Address, value: T, swap: bool) {
    let dst = address.as_mut_ptr::<u8>();
    for (i, byte) in value.to_bytes(swap).as_ref().iter().enumerate() {
        // SAFETY: i < T::WIDTH, covered by the caller's contract.
        unsafe { dst.add(i).write(*byte) };
    }
}

/// Reads a single byte.
///
/// # Safety
///
/// `address` must be valid for a one byte read.
pub unsafe fn peek_byte(address: Address) -> u8 {
    unsafe { peek::<u8>(address, false) }
}

/// Writes a single byte.
///
/// # Safety
///
/// `address` must be valid for a one byte write.
pub unsafe fn poke_byte(address: Address, value: u8) {
    unsafe { poke::<u8>(address, value, false) }
}

/// Reads a 16-bit value. See [`peek`].
///
/// # Safety
///
/// Two bytes at `address` must be readable.
pub unsafe fn peek_short(address: Address, swap: bool) -> i16 {
    unsafe { peek(address, swap) }
}

/// Reads a 32-bit value. See [`peek`].
///
/// # Safety
///
/// Four bytes at `address` must be readable.
pub unsafe fn peek_int(address: Address, swap: bool) -> i32 {
    unsafe { peek(address, swap) }
}

/// Reads a 64-bit value. See [`peek`].
///
/// # Safety
///
/// Eight bytes at `address` must be readable.
pub unsafe fn peek_long(address: Address, swap: bool) -> i64 {
    unsafe { peek(address, swap) }
}

/// Writes a 16-bit value. See [`poke`].
///
/// # Safety
///
/// Two bytes at `address` must be writable.
pub unsafe fn poke_short(address: Address, value: i16, swap: bool) {
    unsafe { poke(address, value, swap) }
}

/// Writes a 32-bit value. See [`poke`].
///
/// # Safety
///
/// Four bytes at `address` must be writable.
pub unsafe fn poke_int(address: Address, value: i32, swap: bool) {
    unsafe { poke(address, value, swap) }
}

/// Writes a 64-bit value. See [`poke`].
///
/// # Safety
///
/// Eight bytes at `address` must be writable.
pub unsafe fn poke_long(address: Address, value: i64, swap: bool) {
    unsafe { poke(address, value, swap) }
}
