//! Vector lifecycle and operations over the C ABI.
//!
//! Each container sits in its own `Arc<Mutex<DynamicArray>>`, so the
//! global `VECTORS` table lock is only held for handle lookup. A
//! `for_each` callback may therefore operate on *other* vectors while
//! one is being iterated; re-entering the same vector is forbidden.

use std::ffi::c_void;
use std::sync::{Arc, Mutex};

use dynvec_core::{DynamicArray, VectorConfig};

use crate::handle::{HandleTable, DYNVEC_NULL_HANDLE};
use crate::status::VectorStatus;
use crate::types::{DynvecAction, DynvecPredicate};

type VectorArc = Arc<Mutex<DynamicArray>>;

static VECTORS: Mutex<HandleTable<VectorArc>> = Mutex::new(HandleTable::new());

/// Clone the Arc for a handle, briefly locking the global table.
///
/// Returns `None` if the handle is null, stale, or the table is poisoned.
fn get_vector(handle: u64) -> Option<VectorArc> {
    VECTORS.lock().ok()?.get(handle).cloned()
}

fn register(config: VectorConfig) -> u64 {
    let vector = match DynamicArray::with_config(config) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "dynvec_create rejected");
            return DYNVEC_NULL_HANDLE;
        }
    };
    match VECTORS.lock() {
        Ok(mut table) => table.insert(Arc::new(Mutex::new(vector))),
        Err(_) => DYNVEC_NULL_HANDLE,
    }
}

/// Create a vector with `capacity` slots and the given grow factor.
///
/// Returns the null handle (0) if `capacity` is zero, `grow_factor` is
/// negative or not finite, or allocation fails.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynvec_create(capacity: u32, grow_factor: f32) -> u64 {
    ffi_guard!(DYNVEC_NULL_HANDLE, {
        register(VectorConfig::new(capacity, grow_factor))
    })
}

/// Like [`dynvec_create`], with a ceiling on how far the vector may grow.
///
/// Growth beyond `max_capacity` is reported the same way as a failed
/// reallocation.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynvec_create_bounded(capacity: u32, grow_factor: f32, max_capacity: u32) -> u64 {
    ffi_guard!(DYNVEC_NULL_HANDLE, {
        register(VectorConfig::new(capacity, grow_factor).max_capacity(max_capacity))
    })
}

/// Destroy the vector behind `*handle` and set `*handle` to 0.
///
/// No-op if `handle` is null or `*handle` is already 0, so a second
/// destroy through the same slot is harmless.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynvec_destroy(handle: *mut u64) {
    ffi_guard!((), {
        if handle.is_null() {
            return;
        }
        // SAFETY: handle is non-null and points to a valid u64 per caller contract.
        let raw = unsafe { *handle };
        if raw == DYNVEC_NULL_HANDLE {
            return;
        }
        if let Ok(mut table) = VECTORS.lock() {
            table.remove(raw);
        }
        // SAFETY: as above.
        unsafe { *handle = DYNVEC_NULL_HANDLE };
    })
}

/// 1 if the vector holds no elements or the handle is invalid, else 0.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynvec_is_empty(handle: u64) -> u8 {
    ffi_guard!(1, {
        let Some(vector) = get_vector(handle) else {
            return 1;
        };
        let vector = ffi_lock!(vector, 1);
        u8::from(vector.is_empty())
    })
}

/// Number of elements, or 0 for an invalid handle.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynvec_size(handle: u64) -> u32 {
    ffi_guard!(0, {
        let Some(vector) = get_vector(handle) else {
            return 0;
        };
        let vector = ffi_lock!(vector, 0);
        vector.len()
    })
}

/// Number of allocated slots, or 0 for an invalid handle.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynvec_capacity(handle: u64) -> u32 {
    ffi_guard!(0, {
        let Some(vector) = get_vector(handle) else {
            return 0;
        };
        let vector = ffi_lock!(vector, 0);
        vector.capacity()
    })
}

/// Write `out` if non-null, or report `InvalidInputArgs`.
#[allow(unsafe_code)]
fn write_out(out: *mut i32, value: i32) -> i32 {
    if out.is_null() {
        return VectorStatus::InvalidInputArgs as i32;
    }
    // SAFETY: out is non-null and valid for writes per caller contract.
    unsafe { *out = value };
    VectorStatus::Success as i32
}

/// Read the element at `index` into `*out`.
///
/// Checks, in order: handle, bounds, `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynvec_get(handle: u64, index: u32, out: *mut i32) -> i32 {
    ffi_guard!({
        let Some(vector) = get_vector(handle) else {
            return VectorStatus::InvalidVectorPointer as i32;
        };
        let vector = ffi_lock!(vector);
        match vector.get(index) {
            Ok(value) => write_out(out, value),
            Err(e) => VectorStatus::from(&e) as i32,
        }
    })
}

/// Overwrite the element at `index`. Never grows the vector.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynvec_set(handle: u64, index: u32, value: i32) -> i32 {
    ffi_guard!({
        let Some(vector) = get_vector(handle) else {
            return VectorStatus::InvalidVectorPointer as i32;
        };
        let mut vector = ffi_lock!(vector);
        match vector.set(index, value) {
            Ok(()) => VectorStatus::Success as i32,
            Err(e) => VectorStatus::from(&e) as i32,
        }
    })
}

/// Same as `dynvec_get(handle, 0, out)`: `IndexOutOfBounds` when empty.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynvec_front(handle: u64, out: *mut i32) -> i32 {
    dynvec_get(handle, 0, out)
}

/// Read the last element into `*out`. `IsEmpty` when empty.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynvec_back(handle: u64, out: *mut i32) -> i32 {
    ffi_guard!({
        let Some(vector) = get_vector(handle) else {
            return VectorStatus::InvalidVectorPointer as i32;
        };
        let vector = ffi_lock!(vector);
        match vector.back() {
            Ok(value) => write_out(out, value),
            Err(e) => VectorStatus::from(&e) as i32,
        }
    })
}

/// Append `value`.
///
/// Returns `Success`, `InsertSucceededButFailedToGrow` (stored, growth
/// failed), `Overflow` (fixed capacity, full) or `OutOfMemory` (growth
/// failed with no spare slot, nothing stored).
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynvec_push_back(handle: u64, value: i32) -> i32 {
    ffi_guard!({
        let Some(vector) = get_vector(handle) else {
            return VectorStatus::InvalidVectorPointer as i32;
        };
        let mut vector = ffi_lock!(vector);
        VectorStatus::from(vector.push_back(value)) as i32
    })
}

/// Remove the last element into `*out`.
///
/// A null `out` is rejected with `InvalidVectorPointer` before anything
/// is removed. `IsEmpty` when empty.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynvec_pop_back(handle: u64, out: *mut i32) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return VectorStatus::InvalidVectorPointer as i32;
        }
        let Some(vector) = get_vector(handle) else {
            return VectorStatus::InvalidVectorPointer as i32;
        };
        let mut vector = ffi_lock!(vector);
        match vector.pop_back() {
            Ok(value) => {
                // SAFETY: out checked non-null above; valid per caller contract.
                unsafe { *out = value };
                VectorStatus::Success as i32
            }
            Err(e) => VectorStatus::from(&e) as i32,
        }
    })
}

/// Call `action(element, context)` on every element in index order.
///
/// The element range is fixed on entry. `action` must not call back into
/// this vector. Null handle and null action are no-ops that report
/// `InvalidVectorPointer` and `InvalidActionFunction` respectively.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynvec_for_each(handle: u64, action: DynvecAction, context: *mut c_void) -> i32 {
    ffi_guard!({
        let Some(vector) = get_vector(handle) else {
            return VectorStatus::InvalidVectorPointer as i32;
        };
        let Some(action) = action else {
            return VectorStatus::InvalidActionFunction as i32;
        };
        let mut vector = ffi_lock!(vector);
        vector.for_each(|item| {
            // SAFETY: item is a live slot borrowed for this call only;
            // context is passed through untouched.
            unsafe { action(item as *mut i32, context) };
        });
        VectorStatus::Success as i32
    })
}

/// Stable sort where `before(a, b) != 0` means `a` belongs ahead of `b`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynvec_sort(handle: u64, before: DynvecPredicate) -> i32 {
    ffi_guard!({
        let Some(vector) = get_vector(handle) else {
            return VectorStatus::InvalidVectorPointer as i32;
        };
        let Some(before) = before else {
            return VectorStatus::InvalidActionFunction as i32;
        };
        let mut vector = ffi_lock!(vector);
        // SAFETY: before is a non-null function pointer supplied by the caller.
        vector.sort_by_predicate(|a, b| unsafe { before(a, b) } != 0);
        VectorStatus::Success as i32
    })
}

/// Uniformly shuffle the elements with the process-wide generator.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynvec_shuffle(handle: u64) -> i32 {
    ffi_guard!({
        let Some(vector) = get_vector(handle) else {
            return VectorStatus::InvalidVectorPointer as i32;
        };
        let mut vector = ffi_lock!(vector);
        vector.shuffle();
        VectorStatus::Success as i32
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_zero_capacity() {
        assert_eq!(dynvec_create(0, 0.5), DYNVEC_NULL_HANDLE);
    }

    #[test]
    fn create_rejects_negative_grow_factor() {
        assert_eq!(dynvec_create(4, -1.0), DYNVEC_NULL_HANDLE);
        assert_eq!(dynvec_create(4, f32::NAN), DYNVEC_NULL_HANDLE);
    }

    #[test]
    fn create_bounded_rejects_initial_above_max() {
        assert_eq!(dynvec_create_bounded(8, 0.5, 4), DYNVEC_NULL_HANDLE);
    }

    #[test]
    fn destroy_removes_from_table() {
        let mut h = dynvec_create(4, 0.5);
        assert!(get_vector(h).is_some());
        let stale = h;
        dynvec_destroy(&mut h);
        assert_eq!(h, DYNVEC_NULL_HANDLE);
        assert!(get_vector(stale).is_none());
    }

    #[test]
    fn destroy_null_pointer_is_noop() {
        dynvec_destroy(std::ptr::null_mut());
    }

    #[test]
    fn destroy_stale_handle_clears_slot() {
        let mut h = dynvec_create(4, 0.5);
        let mut copy = h;
        dynvec_destroy(&mut h);
        dynvec_destroy(&mut copy);
        assert_eq!(copy, DYNVEC_NULL_HANDLE);
    }

    #[test]
    fn get_checks_handle_then_bounds_then_out() {
        let mut h = dynvec_create(4, 0.0);
        assert_eq!(
            dynvec_get(DYNVEC_NULL_HANDLE, 0, std::ptr::null_mut()),
            VectorStatus::InvalidVectorPointer as i32
        );
        assert_eq!(
            dynvec_get(h, 0, std::ptr::null_mut()),
            VectorStatus::IndexOutOfBounds as i32
        );
        dynvec_push_back(h, 7);
        assert_eq!(
            dynvec_get(h, 0, std::ptr::null_mut()),
            VectorStatus::InvalidInputArgs as i32
        );
        let mut out = 0;
        assert_eq!(dynvec_get(h, 0, &mut out), VectorStatus::Success as i32);
        assert_eq!(out, 7);
        dynvec_destroy(&mut h);
    }

    #[test]
    fn pop_back_null_out_leaves_vector_untouched() {
        let mut h = dynvec_create(4, 0.0);
        dynvec_push_back(h, 3);
        assert_eq!(
            dynvec_pop_back(h, std::ptr::null_mut()),
            VectorStatus::InvalidVectorPointer as i32
        );
        assert_eq!(dynvec_size(h), 1);
        dynvec_destroy(&mut h);
    }

    #[test]
    fn queries_on_invalid_handle_use_safe_defaults() {
        assert_eq!(dynvec_is_empty(DYNVEC_NULL_HANDLE), 1);
        assert_eq!(dynvec_size(DYNVEC_NULL_HANDLE), 0);
        assert_eq!(dynvec_capacity(DYNVEC_NULL_HANDLE), 0);
    }

    #[test]
    fn sort_and_for_each_reject_null_callbacks() {
        let mut h = dynvec_create(2, 0.5);
        assert_eq!(
            dynvec_sort(h, None),
            VectorStatus::InvalidActionFunction as i32
        );
        assert_eq!(
            dynvec_for_each(h, None, std::ptr::null_mut()),
            VectorStatus::InvalidActionFunction as i32
        );
        assert_eq!(
            dynvec_for_each(DYNVEC_NULL_HANDLE, None, std::ptr::null_mut()),
            VectorStatus::InvalidVectorPointer as i32
        );
        dynvec_destroy(&mut h);
    }
}
