//! Raw libclang ABI surface.
//!
//! # Responsibility
//! - Mirror the C layout of every type that crosses the boundary.
//! - Resolve the entry points used by the binding into one function table.
//!
//! # Invariants
//! - Pointers in `NativeApi` are valid only while the library they were
//!   resolved from stays loaded; `Libclang` owns both together.
//! - Every symbol is resolved eagerly; a partially resolved table never exists.

use crate::error::LoadError;
use libloading::{Library, Symbol};
use std::ffi::{c_char, c_uint, c_ulonglong, c_void};
use std::path::Path;

#[cfg(test)]
pub(crate) mod fake;
mod string;

pub(crate) use string::{to_c_string, BorrowedCxString, CxString};

/// C layout of libclang's `CXString`.
///
/// `data` is opaque; only `clang_getCString` may interpret it.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CXString {
    pub data: *const c_void,
    pub private_flags: c_uint,
}

/// `private_flags` value marking a string libclang does not own.
pub(crate) const CXS_UNMANAGED: c_uint = 0;

/// Resolved libclang entry points.
#[derive(Clone, Copy)]
pub(crate) struct NativeApi {
    pub get_c_string: unsafe extern "C" fn(CXString) -> *const c_char,
    pub dispose_string: unsafe extern "C" fn(CXString),
    pub get_build_session_timestamp: unsafe extern "C" fn() -> c_ulonglong,
    pub install_aborting_fatal_error_handler: unsafe extern "C" fn(),
    pub uninstall_fatal_error_handler: unsafe extern "C" fn(),
    pub default_diagnostic_display_options: unsafe extern "C" fn() -> c_uint,
    pub get_diagnostic_category_name: unsafe extern "C" fn(c_uint) -> CXString,
    pub default_editing_translation_unit_options: unsafe extern "C" fn() -> c_uint,
    pub construct_usr_objc_class: unsafe extern "C" fn(*const c_char) -> CXString,
    pub construct_usr_objc_category:
        unsafe extern "C" fn(*const c_char, *const c_char) -> CXString,
    pub construct_usr_objc_protocol: unsafe extern "C" fn(*const c_char) -> CXString,
    pub construct_usr_objc_ivar: unsafe extern "C" fn(*const c_char, CXString) -> CXString,
    pub construct_usr_objc_method:
        unsafe extern "C" fn(*const c_char, c_uint, CXString) -> CXString,
    pub construct_usr_objc_property: unsafe extern "C" fn(*const c_char, CXString) -> CXString,
    pub enable_stack_traces: unsafe extern "C" fn(),
    pub default_code_complete_options: unsafe extern "C" fn() -> c_uint,
    pub get_clang_version: unsafe extern "C" fn() -> CXString,
    pub toggle_crash_recovery: unsafe extern "C" fn(c_uint),
}

/// Symbol names required for a library to be usable.
pub const REQUIRED_SYMBOLS: &[&str] = &[
    "clang_getCString",
    "clang_disposeString",
    "clang_getBuildSessionTimestamp",
    "clang_install_aborting_llvm_fatal_error_handler",
    "clang_uninstall_llvm_fatal_error_handler",
    "clang_defaultDiagnosticDisplayOptions",
    "clang_getDiagnosticCategoryName",
    "clang_defaultEditingTranslationUnitOptions",
    "clang_constructUSR_ObjCClass",
    "clang_constructUSR_ObjCCategory",
    "clang_constructUSR_ObjCProtocol",
    "clang_constructUSR_ObjCIvar",
    "clang_constructUSR_ObjCMethod",
    "clang_constructUSR_ObjCProperty",
    "clang_enableStackTraces",
    "clang_defaultCodeCompleteOptions",
    "clang_getClangVersion",
    "clang_toggleCrashRecovery",
];

impl NativeApi {
    /// Resolves every entry point from an opened library.
    ///
    /// # Safety
    /// `library` must be a libclang build whose exported symbols match the
    /// signatures declared on `NativeApi`.
    pub(crate) unsafe fn resolve(library: &Library, path: &Path) -> Result<Self, LoadError> {
        Ok(Self {
            get_c_string: symbol(library, path, "clang_getCString")?,
            dispose_string: symbol(library, path, "clang_disposeString")?,
            get_build_session_timestamp: symbol(library, path, "clang_getBuildSessionTimestamp")?,
            install_aborting_fatal_error_handler: symbol(
                library,
                path,
                "clang_install_aborting_llvm_fatal_error_handler",
            )?,
            uninstall_fatal_error_handler: symbol(
                library,
                path,
                "clang_uninstall_llvm_fatal_error_handler",
            )?,
            default_diagnostic_display_options: symbol(
                library,
                path,
                "clang_defaultDiagnosticDisplayOptions",
            )?,
            get_diagnostic_category_name: symbol(
                library,
                path,
                "clang_getDiagnosticCategoryName",
            )?,
            default_editing_translation_unit_options: symbol(
                library,
                path,
                "clang_defaultEditingTranslationUnitOptions",
            )?,
            construct_usr_objc_class: symbol(library, path, "clang_constructUSR_ObjCClass")?,
            construct_usr_objc_category: symbol(
                library,
                path,
                "clang_constructUSR_ObjCCategory",
            )?,
            construct_usr_objc_protocol: symbol(
                library,
                path,
                "clang_constructUSR_ObjCProtocol",
            )?,
            construct_usr_objc_ivar: symbol(library, path, "clang_constructUSR_ObjCIvar")?,
            construct_usr_objc_method: symbol(library, path, "clang_constructUSR_ObjCMethod")?,
            construct_usr_objc_property: symbol(
                library,
                path,
                "clang_constructUSR_ObjCProperty",
            )?,
            enable_stack_traces: symbol(library, path, "clang_enableStackTraces")?,
            default_code_complete_options: symbol(
                library,
                path,
                "clang_defaultCodeCompleteOptions",
            )?,
            get_clang_version: symbol(library, path, "clang_getClangVersion")?,
            toggle_crash_recovery: symbol(library, path, "clang_toggleCrashRecovery")?,
        })
    }
}

unsafe fn symbol<T: Copy>(
    library: &Library,
    path: &Path,
    name: &'static str,
) -> Result<T, LoadError> {
    let resolved: Symbol<'_, T> =
        library
            .get(name.as_bytes())
            .map_err(|source| LoadError::MissingSymbol {
                path: path.to_path_buf(),
                symbol: name,
                source,
            })?;
    Ok(*resolved)
}
