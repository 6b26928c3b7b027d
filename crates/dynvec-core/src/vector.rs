//! The resizable vector.
//!
//! [`DynamicArray`] pairs a [`SlotBuffer`] with a live-element count and
//! applies the [`policy`] thresholds around every append and removal.
//! Every operation either completes or leaves the container exactly as
//! it was; there is no state in which an element is half-inserted.

use tracing::{debug, warn};

use crate::buffer::SlotBuffer;
use crate::config::VectorConfig;
use crate::error::VectorError;
use crate::policy::{self, Growth};
use crate::Item;

/// How a successful [`DynamicArray::push_back`] went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushOutcome {
    /// The element was stored; any growth that was due succeeded.
    Stored,
    /// The element was stored in a spare slot, but the growth that the
    /// policy asked for could not be performed.
    StoredGrowthFailed {
        /// Capacity the failed growth step asked for.
        requested: u32,
    },
}

/// A contiguous, resizable vector of [`Item`]s.
///
/// Invariants, holding after every call including failed ones:
/// - `1 <= capacity()`
/// - `len() <= capacity()`
/// - live elements occupy slots `[0, len())` with no gaps
#[derive(Clone, Debug)]
pub struct DynamicArray {
    buffer: SlotBuffer,
    len: u32,
    config: VectorConfig,
}

impl DynamicArray {
    /// Create an empty vector with `initial_capacity` slots.
    ///
    /// # Errors
    ///
    /// [`VectorError::InvalidConfig`] if `initial_capacity` is zero or
    /// `grow_factor` is negative or not finite;
    /// [`VectorError::OutOfMemory`] if the buffer cannot be allocated.
    pub fn new(initial_capacity: u32, grow_factor: f32) -> Result<Self, VectorError> {
        Self::with_config(VectorConfig::new(initial_capacity, grow_factor))
    }

    /// Create an empty vector from a full [`VectorConfig`].
    pub fn with_config(config: VectorConfig) -> Result<Self, VectorError> {
        config.validate()?;
        let buffer = SlotBuffer::try_new(config.initial_capacity)?;
        debug!(
            capacity = config.initial_capacity,
            grow_factor = config.grow_factor,
            max_capacity = config.max_capacity,
            "dynvec created"
        );
        Ok(Self {
            buffer,
            len: 0,
            config,
        })
    }

    /// Whether the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of live elements.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> u32 {
        self.buffer.capacity()
    }

    /// The grow factor fixed at construction.
    pub fn grow_factor(&self) -> f32 {
        self.config.grow_factor
    }

    /// The configuration this vector was built from.
    pub fn config(&self) -> &VectorConfig {
        &self.config
    }

    /// Memory held by the backing buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.buffer.memory_bytes()
    }

    /// Live elements as a slice.
    pub fn as_slice(&self) -> &[Item] {
        &self.buffer.slots()[..self.len as usize]
    }

    /// Live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [Item] {
        let len = self.len as usize;
        &mut self.buffer.slots_mut()[..len]
    }

    /// Iterate over live elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.as_slice().iter()
    }

    /// Element at `index`.
    pub fn get(&self, index: u32) -> Result<Item, VectorError> {
        self.check_index(index)?;
        Ok(self.buffer.slots()[index as usize])
    }

    /// Overwrite the element at `index`. Never grows the vector.
    pub fn set(&mut self, index: u32, value: Item) -> Result<(), VectorError> {
        self.check_index(index)?;
        self.buffer.slots_mut()[index as usize] = value;
        Ok(())
    }

    /// First element; same as `get(0)`.
    ///
    /// On an empty vector this reports [`VectorError::IndexOutOfBounds`],
    /// unlike [`back`](Self::back).
    pub fn front(&self) -> Result<Item, VectorError> {
        self.get(0)
    }

    /// Last element, or [`VectorError::IsEmpty`].
    pub fn back(&self) -> Result<Item, VectorError> {
        match self.len {
            0 => Err(VectorError::IsEmpty),
            n => Ok(self.buffer.slots()[n as usize - 1]),
        }
    }

    /// Append `value`, growing first if the policy says so.
    ///
    /// # Errors
    ///
    /// - [`VectorError::Overflow`] when the vector is fixed-capacity and full.
    /// - [`VectorError::OutOfMemory`] when growth was needed to make room and
    ///   failed. Nothing is stored.
    ///
    /// If growth fails but a spare slot still exists, the value is stored
    /// and [`PushOutcome::StoredGrowthFailed`] is returned.
    pub fn push_back(&mut self, value: Item) -> Result<PushOutcome, VectorError> {
        let capacity = self.buffer.capacity();
        let failed_growth = self.grow_if_required(capacity);

        if self.len >= self.buffer.capacity() {
            return Err(match failed_growth {
                Some(requested) => VectorError::OutOfMemory { requested },
                None => VectorError::Overflow { capacity },
            });
        }

        self.buffer.slots_mut()[self.len as usize] = value;
        self.len += 1;
        Ok(match failed_growth {
            Some(requested) => PushOutcome::StoredGrowthFailed { requested },
            None => PushOutcome::Stored,
        })
    }

    /// Remove and return the last element, shrinking first if the policy
    /// says so.
    pub fn pop_back(&mut self) -> Result<Item, VectorError> {
        if self.len == 0 {
            return Err(VectorError::IsEmpty);
        }
        self.shrink_if_required();
        self.len -= 1;
        Ok(self.buffer.slots()[self.len as usize])
    }

    /// Drop all elements. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Call `action` on every live element in ascending index order.
    ///
    /// The element range is fixed on entry; the borrow on `self` keeps
    /// `action` from changing the length while iterating.
    pub fn for_each<F>(&mut self, mut action: F)
    where
        F: FnMut(&mut Item),
    {
        for item in self.as_mut_slice() {
            action(item);
        }
    }

    fn check_index(&self, index: u32) -> Result<(), VectorError> {
        if index >= self.len {
            return Err(VectorError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Apply the growth policy. Returns the requested capacity if growth
    /// was due and could not be done.
    fn grow_if_required(&mut self, capacity: u32) -> Option<u32> {
        let growth = policy::grow_target(
            capacity,
            self.len,
            self.config.grow_factor,
            self.config.max_capacity,
        );
        match growth {
            Growth::NotNeeded => None,
            Growth::To(new_capacity) => match self.buffer.try_grow(new_capacity) {
                Ok(()) => {
                    debug!(from = capacity, to = new_capacity, len = self.len, "dynvec grew");
                    None
                }
                Err(e) => {
                    warn!(from = capacity, to = new_capacity, error = %e, "dynvec growth failed");
                    Some(new_capacity)
                }
            },
            Growth::Blocked { requested } => {
                warn!(
                    capacity,
                    requested,
                    max_capacity = self.config.max_capacity,
                    "dynvec growth blocked by capacity ceiling"
                );
                Some(requested)
            }
        }
    }

    fn shrink_if_required(&mut self) {
        let capacity = self.buffer.capacity();
        if let Some(target) = policy::shrink_target(capacity, self.len, self.config.grow_factor) {
            self.buffer.shrink(target);
            debug!(from = capacity, to = target, len = self.len, "dynvec shrank");
        }
    }
}

impl<'a> IntoIterator for &'a DynamicArray {
    type Item = &'a crate::Item;
    type IntoIter = std::slice::Iter<'a, crate::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
