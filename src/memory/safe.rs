//! Checked access with configurable address-extent validation
//!
//! [`SafeMemoryAccess`] wraps the stateless accessors and, before delegating,
//! rejects null addresses, extents that wrap the address space and transfers
//! larger than the configured limit. It cannot tell whether memory is live;
//! that stays with the caller.

use super::{bulk, memmove, scalar};
use crate::config::{AccessConfig, Config};
use crate::core::types::{Address, MemoryError, MemoryResult, Scalar};
use tracing::warn;

/// Memory accessor that validates address extents before touching them
#[derive(Debug, Clone, Copy, Default)]
pub struct SafeMemoryAccess {
    config: AccessConfig,
}

impl SafeMemoryAccess {
    /// Create a checked accessor with the given settings
    pub fn new(config: AccessConfig) -> Self {
        SafeMemoryAccess { config }
    }

    /// Create a checked accessor from a loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.access)
    }

    /// Settings in effect
    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    /// Validates an extent of `size` bytes starting at `address`.
    pub fn check_extent(&self, address: Address, size: usize) -> MemoryResult<()> {
        if size > self.config.max_transfer_bytes {
            warn!(
                %address,
                size,
                limit = self.config.max_transfer_bytes,
                "transfer too large"
            );
            return Err(MemoryError::TransferTooLarge {
                requested: size,
                limit: self.config.max_transfer_bytes,
            });
        }

        if self.config.reject_null && address.is_null() {
            warn!(size, "null address rejected");
            return Err(MemoryError::NullAddress);
        }

        if self.config.reject_wraparound {
            if let Err(err) = address.checked_end(size) {
                warn!(%address, size, "address range wraps");
                return Err(err);
            }
        }

        Ok(())
    }

    fn check_elements<T: Scalar>(&self, address: Address, count: usize) -> MemoryResult<()> {
        let size = count
            .checked_mul(T::WIDTH)
            .ok_or_else(|| MemoryError::address_overflow(address, usize::MAX))?;
        self.check_extent(address, size)
    }

    /// Checked [`scalar::peek`].
    ///
    /// # Safety
    ///
    /// Same contract as [`scalar::peek`].
    pub unsafe fn peek<T: Scalar>(&self, address: Address, swap: bool) -> MemoryResult<T> {
        self.check_extent(address, T::WIDTH)?;
        Ok(unsafe { scalar::peek(address, swap) })
    }

    /// Checked [`scalar::poke`].
    ///
    /// # Safety
    ///
    /// Same contract as [`scalar::poke`].
    pub unsafe fn poke<T: Scalar>(
        &self,
        address: Address,
        value: T,
        swap: bool,
    ) -> MemoryResult<()> {
        self.check_extent(address, T::WIDTH)?;
        unsafe { scalar::poke(address, value, swap) };
        Ok(())
    }

    /// Checked [`bulk::peek_array`].
    ///
    /// # Safety
    ///
    /// Same contract as [`bulk::peek_array`].
    pub unsafe fn peek_array<T: Scalar>(
        &self,
        address: Address,
        dest: &mut [T],
        dest_offset: usize,
        count: usize,
        swap: bool,
    ) -> MemoryResult<()> {
        self.check_elements::<T>(address, count)?;
        unsafe { bulk::peek_array(address, dest, dest_offset, count, swap) }
    }

    /// Checked [`bulk::poke_array`].
    ///
    /// # Safety
    ///
    /// Same contract as [`bulk::poke_array`].
    pub unsafe fn poke_array<T: Scalar>(
        &self,
        address: Address,
        source: &[T],
        source_offset: usize,
        count: usize,
        swap: bool,
    ) -> MemoryResult<()> {
        self.check_elements::<T>(address, count)?;
        unsafe { bulk::poke_array(address, source, source_offset, count, swap) }
    }

    /// Checked [`memmove::memmove_raw`].
    ///
    /// # Safety
    ///
    /// Same contract as [`memmove::memmove_raw`].
    pub unsafe fn memmove(&self, dest: Address, src: Address, count: usize) -> MemoryResult<()> {
        self.check_extent(dest, count)?;
        self.check_extent(src, count)?;
        unsafe { memmove::memmove_raw(dest, src, count) }
    }
}
