//! Owned slot storage with an explicit, fallible capacity.
//!
//! A [`SlotBuffer`] is a `Vec<Item>` whose length *is* the logical
//! capacity: every slot exists and is zero-initialised, and the
//! container tracks how many of them are live. Resizing goes through
//! `try_reserve_exact` so an allocation failure surfaces as
//! [`VectorError::OutOfMemory`] instead of aborting.

use crate::error::VectorError;
use crate::Item;

/// Contiguous slot storage exclusively owned by one container.
#[derive(Clone, Debug)]
pub struct SlotBuffer {
    /// Backing storage. `data.len()` is the capacity.
    data: Vec<Item>,
}

impl SlotBuffer {
    /// Allocate `capacity` zeroed slots.
    pub fn try_new(capacity: u32) -> Result<Self, VectorError> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity as usize)
            .map_err(|_| VectorError::OutOfMemory {
                requested: capacity,
            })?;
        data.resize(capacity as usize, 0);
        Ok(Self { data })
    }

    /// Number of slots.
    pub fn capacity(&self) -> u32 {
        self.data.len() as u32
    }

    /// Grow to `new_capacity` slots, keeping existing contents.
    ///
    /// On failure the buffer is left untouched.
    pub fn try_grow(&mut self, new_capacity: u32) -> Result<(), VectorError> {
        let additional = (new_capacity as usize).saturating_sub(self.data.len());
        if additional == 0 {
            return Ok(());
        }
        self.data
            .try_reserve_exact(additional)
            .map_err(|_| VectorError::OutOfMemory {
                requested: new_capacity,
            })?;
        self.data.resize(new_capacity as usize, 0);
        Ok(())
    }

    /// Shrink to `new_capacity` slots, discarding the tail and returning
    /// the freed memory to the allocator.
    ///
    /// No-op if `new_capacity` is not smaller than the current capacity.
    pub fn shrink(&mut self, new_capacity: u32) {
        if new_capacity as usize >= self.data.len() {
            return;
        }
        self.data.truncate(new_capacity as usize);
        self.data.shrink_to_fit();
    }

    /// All slots, live or not.
    pub fn slots(&self) -> &[Item] {
        &self.data
    }

    /// All slots, mutably.
    pub fn slots_mut(&mut self) -> &mut [Item] {
        &mut self.data
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.capacity() * std::mem::size_of::<Item>()
    }
}
