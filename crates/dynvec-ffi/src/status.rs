//! C-compatible status codes.
//!
//! [`VectorStatus`] is a `repr(i32)` enum whose discriminants match the
//! historical C header, so existing callers keep working. Conversions
//! from the Rust-side [`VectorError`] and [`PushOutcome`] live here.

use dynvec_core::{PushOutcome, VectorError};

/// Status returned by every fallible FFI function.
///
/// `Success` = 0; all other values are failures or warnings. Values are
/// ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorStatus {
    /// The operation completed.
    Success = 0,
    /// The handle is null, stale, or was already destroyed.
    InvalidVectorPointer = 1,
    /// A required input or output pointer is null, or construction
    /// parameters are invalid.
    InvalidInputArgs = 2,
    /// Index is at or past the logical length.
    IndexOutOfBounds = 3,
    /// Append to a full fixed-capacity vector.
    Overflow = 4,
    /// Reserved. Empty removal reports [`VectorStatus::IsEmpty`].
    Underflow = 5,
    /// Allocation failed; nothing was changed.
    OutOfMemory = 6,
    /// The element was stored, but the growth the policy asked for failed.
    InsertSucceededButFailedToGrow = 7,
    /// A required callback is null.
    InvalidActionFunction = 8,
    /// `back` or `pop_back` on an empty vector.
    IsEmpty = 9,
}

impl From<&VectorError> for VectorStatus {
    fn from(e: &VectorError) -> Self {
        match e {
            VectorError::IndexOutOfBounds { .. } => VectorStatus::IndexOutOfBounds,
            VectorError::Overflow { .. } => VectorStatus::Overflow,
            VectorError::IsEmpty => VectorStatus::IsEmpty,
            VectorError::OutOfMemory { .. } => VectorStatus::OutOfMemory,
            VectorError::InvalidConfig(_) => VectorStatus::InvalidInputArgs,
        }
    }
}

impl From<PushOutcome> for VectorStatus {
    fn from(outcome: PushOutcome) -> Self {
        match outcome {
            PushOutcome::Stored => VectorStatus::Success,
            PushOutcome::StoredGrowthFailed { .. } => {
                VectorStatus::InsertSucceededButFailedToGrow
            }
        }
    }
}

impl From<Result<PushOutcome, VectorError>> for VectorStatus {
    fn from(result: Result<PushOutcome, VectorError>) -> Self {
        match result {
            Ok(outcome) => outcome.into(),
            Err(e) => VectorStatus::from(&e),
        }
    }
}
