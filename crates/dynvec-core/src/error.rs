//! Error types for vector construction, access, and mutation.

use std::error::Error;
use std::fmt;

/// Errors from [`DynamicArray`](crate::DynamicArray) operations.
#[derive(Clone, Debug, PartialEq)]
pub enum VectorError {
    /// Requested index is at or past the logical length.
    IndexOutOfBounds {
        /// The rejected index.
        index: u32,
        /// Logical length at the time of the request.
        len: u32,
    },
    /// Append against a fixed-capacity container that is already full.
    Overflow {
        /// The fixed capacity.
        capacity: u32,
    },
    /// Removal or back access on an empty container.
    IsEmpty,
    /// The backing buffer could not be (re)allocated.
    OutOfMemory {
        /// Number of slots that were requested.
        requested: u32,
    },
    /// Construction parameters failed validation.
    InvalidConfig(ConfigError),
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::Overflow { capacity } => {
                write!(f, "fixed-capacity vector is full ({capacity} slots)")
            }
            Self::IsEmpty => write!(f, "vector is empty"),
            Self::OutOfMemory { requested } => {
                write!(f, "failed to allocate {requested} slots")
            }
            Self::InvalidConfig(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl Error for VectorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for VectorError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}

/// Errors detected by [`VectorConfig::validate()`](crate::VectorConfig::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `initial_capacity` is zero.
    ZeroCapacity,
    /// `grow_factor` is negative, NaN, or infinite.
    InvalidGrowFactor {
        /// The rejected value.
        value: f32,
    },
    /// `initial_capacity` exceeds `max_capacity`.
    CapacityAboveMax {
        /// Requested initial capacity.
        initial: u32,
        /// Configured ceiling.
        max: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "initial capacity must be at least 1"),
            Self::InvalidGrowFactor { value } => {
                write!(f, "grow factor must be finite and >= 0, got {value}")
            }
            Self::CapacityAboveMax { initial, max } => {
                write!(f, "initial capacity {initial} exceeds max capacity {max}")
            }
        }
    }
}

impl Error for ConfigError {}
