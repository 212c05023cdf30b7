//! Raw memory access: unaligned, byte-order aware peek/poke and overlap-safe memmove
//!
//! The unswapped byte order is always address-ascending, least-significant
//! byte first, independent of the host. Passing `swap = true` reverses the
//! bytes of each individual value.

pub mod config;
pub mod core;
pub mod memory;

// Re-export main types from core module
pub use crate::core::types::{Address, ByteOrder, MemoryError, MemoryResult, Scalar, Span};

// Re-export the accessor surface
pub use memory::{
    bulk_get, bulk_put, copy_direction, memmove, memmove_raw, memmove_within, peek, peek_array,
    peek_at, peek_byte, peek_byte_array, peek_char_array, peek_double_array, peek_float_array,
    peek_int, peek_int_array, peek_int_at, peek_long, peek_long_array, peek_long_at, peek_short,
    peek_short_array, peek_short_at, poke, poke_array, poke_at, poke_byte, poke_byte_array,
    poke_char_array, poke_double_array, poke_float_array, poke_int, poke_int_array, poke_int_at,
    poke_long, poke_long_array, poke_long_at, poke_short, poke_short_array, poke_short_at,
    AddressOf, CopyDirection, SafeMemoryAccess,
};
