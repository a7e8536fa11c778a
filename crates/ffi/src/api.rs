//! C FFI API functions.

use crate::types::*;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::time::Instant;

use palletload_engine::wire::PackRequest;

/// Error codes.
pub const PALLETLOAD_OK: i32 = 0;
pub const PALLETLOAD_ERR_NULL_PTR: i32 = -1;
pub const PALLETLOAD_ERR_INVALID_JSON: i32 = -2;
pub const PALLETLOAD_ERR_PACK_FAILED: i32 = -3;
pub const PALLETLOAD_ERR_UNKNOWN: i32 = -99;

/// Packs a loading request given as JSON.
///
/// On [`PALLETLOAD_OK`] and [`PALLETLOAD_ERR_PACK_FAILED`] a response
/// envelope is written to `result_ptr`; in the failed case it carries the
/// error message.
///
/// # Safety
/// - `request_json` must be a valid null-terminated UTF-8 string
/// - `result_ptr` must be a valid pointer to a `*mut c_char`
/// - The caller must free the result string using `palletload_free_string`
#[no_mangle]
pub unsafe extern "C" fn palletload_pack(
    request_json: *const c_char,
    result_ptr: *mut *mut c_char,
) -> i32 {
    if request_json.is_null() || result_ptr.is_null() {
        return PALLETLOAD_ERR_NULL_PTR;
    }

    let json_str = match CStr::from_ptr(request_json).to_str() {
        Ok(s) => s,
        Err(_) => return PALLETLOAD_ERR_INVALID_JSON,
    };

    let response = pack_internal(json_str);
    let response_json = match serde_json::to_string(&response) {
        Ok(s) => s,
        Err(_) => return PALLETLOAD_ERR_UNKNOWN,
    };

    match CString::new(response_json) {
        Ok(cstr) => {
            *result_ptr = cstr.into_raw();
            if response.success {
                PALLETLOAD_OK
            } else {
                PALLETLOAD_ERR_PACK_FAILED
            }
        }
        Err(_) => PALLETLOAD_ERR_UNKNOWN,
    }
}

/// Frees a string allocated by palletload.
///
/// # Safety
/// - `ptr` must have been allocated by a palletload function
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn palletload_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Returns the API version from Cargo.toml.
///
/// The returned string is statically allocated and must not be freed.
#[no_mangle]
pub extern "C" fn palletload_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

fn pack_internal(json_str: &str) -> PackResponse {
    let request = match PackRequest::from_json(json_str) {
        Ok(r) => r,
        Err(e) => return PackResponse::failed(format!("Invalid JSON: {}", e)),
    };

    let start = Instant::now();
    match request.solve() {
        Ok((_, report)) => {
            let elapsed = start.elapsed().as_millis() as u64;
            log::debug!(
                "FFI pack: {} of {} pallets in {} ms",
                report.packed_count,
                report.total_pallets_to_pack,
                elapsed
            );
            PackResponse::ok(report, elapsed)
        }
        Err(e) => PackResponse::failed(e.to_string()),
    }
}
