//! Growth and shrink threshold arithmetic.
//!
//! Pure functions over `(capacity, len, grow_factor)`. The container
//! consults [`grow_target`] before each append and [`shrink_target`]
//! before each removal; neither touches memory.

/// Result of evaluating the growth policy before an append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Growth {
    /// Enough free space remains; keep the current capacity.
    NotNeeded,
    /// Reallocate to the given capacity.
    To(u32),
    /// Growth is due but the capacity ceiling leaves no room.
    Blocked {
        /// Capacity the policy asked for before clamping.
        requested: u32,
    },
}

/// Fraction of slots that are free: `(capacity - len) / capacity`.
///
/// `capacity` is always at least 1 for a live container.
pub fn free_fraction(capacity: u32, len: u32) -> f64 {
    debug_assert!(capacity >= 1 && len <= capacity);
    f64::from(capacity - len) / f64::from(capacity)
}

/// Evaluate the growth policy.
///
/// Growth is due when `grow_factor > 0` and the free fraction is below
/// `grow_factor`. The target is `floor(capacity * (1 + grow_factor))`,
/// raised to at least `capacity + 1` and clamped to `max_capacity`.
pub fn grow_target(capacity: u32, len: u32, grow_factor: f32, max_capacity: u32) -> Growth {
    let factor = f64::from(grow_factor);
    if factor <= 0.0 || free_fraction(capacity, len) >= factor {
        return Growth::NotNeeded;
    }

    let scaled = (f64::from(capacity) * (1.0 + factor))
        .floor()
        .max(f64::from(capacity) + 1.0);
    // `as` saturates for floats beyond u32::MAX.
    let requested = scaled as u32;
    let clamped = requested.min(max_capacity);
    if clamped <= capacity {
        Growth::Blocked { requested }
    } else {
        Growth::To(clamped)
    }
}

/// Evaluate the shrink policy.
///
/// Only applies when `grow_factor != 0`. Shrinking is due when the free
/// fraction exceeds `2 * grow_factor`; the target is
/// `floor(capacity * (1 - grow_factor))`, never below `len` and never
/// below 1. Returns `None` when no shrink should happen.
pub fn shrink_target(capacity: u32, len: u32, grow_factor: f32) -> Option<u32> {
    let factor = f64::from(grow_factor);
    if factor <= 0.0 || free_fraction(capacity, len) <= 2.0 * factor {
        return None;
    }

    let scaled = (f64::from(capacity) * (1.0 - factor)).floor().max(1.0) as u32;
    let target = scaled.max(len).max(1);
    (target < capacity).then_some(target)
}
