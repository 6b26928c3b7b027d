//! Resizable `i32` vector with explicit, configurable growth and shrink
//! thresholds.
//!
//! This is the leaf crate of the workspace. It owns all container
//! semantics; `dynvec-ffi` only translates them across the C boundary.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray
//! ├── VectorConfig (initial capacity, grow factor, capacity ceiling)
//! ├── SlotBuffer   (owned Vec<i32> with an explicit logical capacity)
//! └── policy       (pure free-fraction arithmetic for grow / shrink)
//! ```
//!
//! # Growth and shrink
//!
//! Before every append the container checks the free fraction
//! `(capacity - len) / capacity`. When it drops below `grow_factor`, the
//! buffer grows to `floor(capacity * (1 + grow_factor))`. Before every
//! removal the buffer shrinks to `floor(capacity * (1 - grow_factor))`
//! once the free fraction exceeds `2 * grow_factor`. A `grow_factor` of
//! zero pins the capacity.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod order;
pub mod policy;
pub mod vector;

/// Element type stored by [`DynamicArray`].
pub type Item = i32;

pub use config::VectorConfig;
pub use error::{ConfigError, VectorError};
pub use vector::{DynamicArray, PushOutcome};
