//! Ownership wrappers for strings crossing the boundary.
//!
//! # Invariants
//! - A `CxString` is read at most once and disposed exactly once, including
//!   when the caller unwinds before reading it.
//! - A `BorrowedCxString` is never disposed; its buffer belongs to Rust and
//!   outlives the native call it is passed to.

use super::{CXString, NativeApi, CXS_UNMANAGED};
use crate::error::{CxError, CxResult};
use std::ffi::{c_void, CStr, CString};
use std::marker::PhantomData;

/// Native-owned string handle returned by a libclang call.
pub(crate) struct CxString<'api> {
    raw: CXString,
    api: &'api NativeApi,
}

impl<'api> CxString<'api> {
    /// Takes ownership of `raw`; it will be disposed through `api`.
    pub(crate) fn new(raw: CXString, api: &'api NativeApi) -> Self {
        Self { raw, api }
    }

    /// Copies the native text into an owned `String` and releases the handle.
    ///
    /// A null data pointer reads as the empty string. Invalid UTF-8 is
    /// replaced lossily.
    pub(crate) fn into_string(self) -> String {
        // SAFETY: `raw` came from the same library as `api` and has not been
        // disposed yet; the pointer is only read before `self` drops.
        unsafe {
            let ptr = (self.api.get_c_string)(self.raw);
            if ptr.is_null() {
                String::new()
            } else {
                CStr::from_ptr(ptr).to_string_lossy().into_owned()
            }
        }
    }
}

impl Drop for CxString<'_> {
    fn drop(&mut self) {
        // SAFETY: each guard owns exactly one handle and drops exactly once.
        unsafe { (self.api.dispose_string)(self.raw) }
    }
}

/// Rust-owned text lent to libclang as an unmanaged `CXString`.
pub(crate) struct BorrowedCxString<'a> {
    raw: CXString,
    _text: PhantomData<&'a CStr>,
}

impl<'a> BorrowedCxString<'a> {
    pub(crate) fn new(text: &'a CStr) -> Self {
        Self {
            raw: CXString {
                data: text.as_ptr().cast::<c_void>(),
                private_flags: CXS_UNMANAGED,
            },
            _text: PhantomData,
        }
    }

    pub(crate) fn as_raw(&self) -> CXString {
        self.raw
    }
}

/// Converts host text to a NUL-terminated buffer for one native call.
///
/// # Errors
/// - Returns `CxError::InteriorNul` when `value` contains a NUL byte.
pub(crate) fn to_c_string(argument: &'static str, value: &str) -> CxResult<CString> {
    CString::new(value).map_err(|_| CxError::InteriorNul { argument })
}
