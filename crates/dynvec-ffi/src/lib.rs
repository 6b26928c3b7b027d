//! C ABI for the dynvec resizable vector.
//!
//! Containers live behind opaque `u64` handles in a generational table;
//! `0` is the null handle. Every entry point is wrapped in a panic guard
//! and reports failures through [`VectorStatus`](status::VectorStatus).
//! This is the only crate in the workspace that contains `unsafe` code,
//! confined to dereferencing caller-supplied pointers and invoking
//! caller-supplied callbacks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run `$body` with panics caught at the boundary.
///
/// The single-block form is for status-returning functions and maps a
/// panic to `OutOfMemory` (capacity overflow is the only panic safe code
/// can reach). The two-argument form supplies the fallback explicitly.
macro_rules! ffi_guard {
    ({ $($body:tt)* }) => {
        ffi_guard!(
            $crate::status::VectorStatus::OutOfMemory as i32,
            { $($body)* }
        )
    };
    ($fallback:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(_) => {
                ::tracing::error!("dynvec: panic caught at FFI boundary");
                $fallback
            }
        }
    };
}

/// Lock a mutex, returning early from the enclosing closure if it is
/// poisoned.
macro_rules! ffi_lock {
    ($mutex:expr) => {
        ffi_lock!(
            $mutex,
            $crate::status::VectorStatus::InvalidVectorPointer as i32
        )
    };
    ($mutex:expr, $fallback:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => return $fallback,
        }
    };
}

pub mod handle;
pub mod status;
pub mod types;
pub mod vector;

pub use handle::DYNVEC_NULL_HANDLE;
pub use status::VectorStatus;
