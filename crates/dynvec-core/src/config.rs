//! Vector construction parameters.

use crate::error::ConfigError;

/// Configuration for a [`DynamicArray`](crate::DynamicArray).
///
/// Validated at construction; all values are immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorConfig {
    /// Number of slots allocated up front. Must be at least 1.
    pub initial_capacity: u32,

    /// Fraction controlling both the growth and the shrink threshold.
    ///
    /// `0.0` pins the capacity: appends past it fail with
    /// [`VectorError::Overflow`](crate::VectorError::Overflow) and
    /// removals never shrink. Must be finite and non-negative.
    pub grow_factor: f32,

    /// Upper bound on the number of slots the buffer may ever hold.
    ///
    /// A growth step that would need more slots than this is treated as
    /// a failed reallocation. Default: `u32::MAX`.
    pub max_capacity: u32,
}

impl VectorConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: u32 = 16;

    /// Default grow factor: grow by half once less than half is free.
    pub const DEFAULT_GROW_FACTOR: f32 = 0.5;

    /// Default capacity ceiling.
    pub const DEFAULT_MAX_CAPACITY: u32 = u32::MAX;

    /// Create a config with the given capacity and grow factor.
    pub fn new(initial_capacity: u32, grow_factor: f32) -> Self {
        Self {
            initial_capacity,
            grow_factor,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }

    /// A fixed-capacity config (`grow_factor == 0`).
    pub fn fixed(capacity: u32) -> Self {
        Self::new(capacity, 0.0)
    }

    /// Set the capacity ceiling.
    pub fn max_capacity(mut self, max_capacity: u32) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Whether automatic growth and shrink are enabled.
    pub fn is_growable(&self) -> bool {
        self.grow_factor != 0.0
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !self.grow_factor.is_finite() || self.grow_factor < 0.0 {
            return Err(ConfigError::InvalidGrowFactor {
                value: self.grow_factor,
            });
        }
        if self.initial_capacity > self.max_capacity {
            return Err(ConfigError::CapacityAboveMax {
                initial: self.initial_capacity,
                max: self.max_capacity,
            });
        }
        Ok(())
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY, Self::DEFAULT_GROW_FACTOR)
    }
}
