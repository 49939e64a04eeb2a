//! C ABI for loading the kernel as a shared library (`libshapekernel.so`).
//!
//! Exposes `int generate_shape(int shape_id, const char* output_filepath)`.

#![allow(unsafe_code)]

use crate::io::STATUS_FAILED;
use log::error;

use std::ffi::{CStr, c_char, c_int};

/// Write the shape selected by `shape_id` to `output_filepath`.
///
/// Returns `0` on success and `-1` on any failure, including a null or
/// non UTF-8 path.
///
/// # Safety
///
/// `output_filepath` must be null or point to a NUL-terminated string that
/// stays valid for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn generate_shape(shape_id: c_int, output_filepath: *const c_char) -> c_int {
    if output_filepath.is_null() {
        error!("Could not open file: <null>");
        return STATUS_FAILED;
    }

    // SAFETY: non-null and NUL-terminated per the caller contract above.
    let path = unsafe { CStr::from_ptr(output_filepath) };
    match path.to_str() {
        Ok(path) => crate::io::generate_shape(shape_id, path),
        Err(err) => {
            error!("Could not open file: {} ({err})", path.to_string_lossy());
            STATUS_FAILED
        },
    }
}
