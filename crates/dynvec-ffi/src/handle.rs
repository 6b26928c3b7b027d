//! Slot+generation handle table for containers owned across the C boundary.
//!
//! Handles pack a slot index and a generation counter into a `u64`.
//! Generations start at 1, so `0` never names a live value and serves as
//! the null handle. Removing a value bumps the slot's generation, which
//! turns every outstanding copy of the old handle stale.

/// The null handle. Never returned for a live container.
pub const DYNVEC_NULL_HANDLE: u64 = 0;

const FIRST_GENERATION: u32 = 1;

/// Upper 32 bits = slot index, lower 32 bits = generation.
fn encode(slot: u32, generation: u32) -> u64 {
    ((slot as u64) << 32) | (generation as u64)
}

fn decode(handle: u64) -> (u32, u32) {
    ((handle >> 32) as u32, handle as u32)
}

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Maps non-zero `u64` handles to owned values, reusing freed slots.
pub struct HandleTable<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
}

impl<T> HandleTable<T> {
    /// An empty table. `const` so it can back a `static`.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Store `value` and return a fresh handle for it.
    pub fn insert(&mut self, value: T) -> u64 {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(value);
            return encode(index, slot.generation);
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: FIRST_GENERATION,
            value: Some(value),
        });
        encode(index, FIRST_GENERATION)
    }

    fn slot(&self, handle: u64) -> Option<&Slot<T>> {
        let (index, generation) = decode(handle);
        let slot = self.slots.get(index as usize)?;
        (generation != 0 && slot.generation == generation).then_some(slot)
    }

    /// Value behind `handle`, or `None` if it is null, stale, or unknown.
    pub fn get(&self, handle: u64) -> Option<&T> {
        self.slot(handle)?.value.as_ref()
    }

    /// Take the value out and invalidate `handle`.
    ///
    /// Removing the same handle twice returns `None` the second time.
    /// A slot whose generation wraps back to 0 is retired for good, so a
    /// handle from its first life can never resolve again.
    pub fn remove(&mut self, handle: u64) -> Option<T> {
        self.slot(handle)?;
        let (index, _) = decode(handle);
        let slot = &mut self.slots[index as usize];
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        if slot.generation != 0 {
            self.free.push(index);
        }
        Some(value)
    }

    /// Number of live values.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.value.is_some()).count()
    }
}

impl<T> Default for HandleTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
