//! Raw memory access: scalar peek/poke, array transfers and memmove
//!
//! This module provides the accessors themselves:
//! - Scalar peek/poke at unaligned addresses with optional byte swapping
//! - Array transfers between addresses, byte slices and typed slices
//! - Overlap-safe byte moves
//! - Bounds-checked slice accessors and a configurable checked accessor
//!
//! All operations are stateless and synchronous. Two calls may run
//! concurrently only if the byte ranges they touch do not overlap.

pub mod address_of;
pub mod buffer;
pub mod bulk;
pub mod memmove;
pub mod safe;
pub mod scalar;

pub use address_of::AddressOf;
pub use buffer::{
    peek_at, peek_int_at, peek_long_at, peek_short_at, poke_at, poke_int_at, poke_long_at,
    poke_short_at,
};
pub use bulk::{
    bulk_get, bulk_put, peek_array, peek_byte_array, peek_char_array, peek_double_array,
    peek_float_array, peek_int_array, peek_long_array, peek_short_array, poke_array,
    poke_byte_array, poke_char_array, poke_double_array, poke_float_array, poke_int_array,
    poke_long_array, poke_short_array,
};
pub use memmove::{copy_direction, memmove, memmove_raw, memmove_within, CopyDirection};
pub use safe::SafeMemoryAccess;
pub use scalar::{
    peek, peek_byte, peek_int, peek_long, peek_short, poke, poke_byte, poke_int, poke_long,
    poke_short,
};
