//! Boundary to whatever hands out raw addresses for caller-owned storage

use crate::core::types::Address;

/// Produces a stable [`Address`] for the first element of some storage.
///
/// The address stays meaningful only while the storage is neither moved
/// nor reallocated; keeping it that way is the caller's job.
pub trait AddressOf {
    /// Address of element 0, for reading
    fn address_of(&self) -> Address;

    /// Address of element 0, for writing
    fn address_of_mut(&mut self) -> Address;
}

impl<T> AddressOf for [T] {
    fn address_of(&self) -> Address {
        Address::from(self.as_ptr())
    }

    fn address_of_mut(&mut self) -> Address {
        Address::from(self.as_mut_ptr())
    }
}
