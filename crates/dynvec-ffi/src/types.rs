//! C callback signatures.

use std::ffi::c_void;

/// Per-element callback for `dynvec_for_each`: `(element, context)`.
///
/// The element pointer is valid only for the duration of the call. The
/// callback must not call back into the same vector.
pub type DynvecAction = Option<unsafe extern "C" fn(*mut i32, *mut c_void)>;

/// Ordering predicate for `dynvec_sort`: non-zero means the first
/// argument belongs ahead of the second.
pub type DynvecPredicate = Option<unsafe extern "C" fn(i32, i32) -> u8>;
