//! Fixed-width scalar encoding shared by every accessor
//!
//! A [`Scalar`] knows how to turn itself into a byte array in *address order*
//! and back. The unswapped ("native") order is always little-endian: the byte at
//! the lowest address is the least-significant one. This is fixed here and never
//! taken from the host, so the observable layout is identical on every platform.
//! Swapping is a plain reversal of that byte array, applied the same way on the
//! read and write paths.

/// A fixed-width value that can be stored in a byte-addressable region.
pub trait Scalar: Copy + Sized {
    /// Encoded width in bytes
    const WIDTH: usize;

    /// Byte array holding one encoded value (`[u8; WIDTH]`)
    type Bytes: Copy + Default + AsRef<[u8]> + AsMut<[u8]>;

    /// Compose a value from bytes in native (address-ascending, LSB first) order
    fn from_native_bytes(bytes: Self::Bytes) -> Self;

    /// Decompose a value into bytes in native order
    fn to_native_bytes(self) -> Self::Bytes;

    /// Compose a value, reversing the byte order first when `swap` is set
    fn from_bytes(bytes: Self::Bytes, swap: bool) -> Self {
        Self::from_native_bytes(apply_swap(bytes, swap))
    }

    /// Decompose a value, reversing the resulting bytes when `swap` is set
    fn to_bytes(self, swap: bool) -> Self::Bytes {
        apply_swap(self.to_native_bytes(), swap)
    }
}

/// Reverses a fixed-size byte sequence in place and hands it back.
pub fn reverse_bytes<B: AsMut<[u8]>>(mut bytes: B) -> B {
    bytes.as_mut().reverse();
    bytes
}

fn apply_swap<B: AsMut<[u8]>>(bytes: B, swap: bool) -> B {
    if swap {
        reverse_bytes(bytes)
    } else {
        bytes
    }
}

macro_rules! impl_scalar {
    ($($ty:ty => $width:expr),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const WIDTH: usize = $width;
                type Bytes = [u8; $width];

                fn from_native_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }

                fn to_native_bytes(self) -> Self::Bytes {
                    <$ty>::to_le_bytes(self)
                }
            }
        )*
    };
}

impl_scalar! {
    u8 => 1,
    i16 => 2,
    u16 => 2,
    i32 => 4,
    i64 => 8,
    f32 => 4,
    f64 => 8,
}
