//! FFI API for Dart-facing libclang calls.
//!
//! # Responsibility
//! - Expose one function per libclang entry point to Dart via FRB.
//! - Own the process-wide library handle the host calls go through.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Values crossing to Dart are host primitives: `u64`, `u32`, UTF-8 `String`.
//! - Native string handles never escape; each is released inside the call.
//! - The library is loaded at most once per process.

use cxbridge_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, CxResult, Libclang,
    LibclangConfig, Usr,
};
use log::info;
use once_cell::sync::OnceCell;

static LIBCLANG: OnceCell<Libclang> = OnceCell::new();

/// Expose binding crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust-side logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Loads libclang for the rest of the process.
///
/// `path` names a library file; `None` searches `LIBCLANG_PATH` and the
/// platform defaults.
///
/// # FFI contract
/// - Sync call; performs file-system lookups and a dynamic load.
/// - Idempotent after the first success; later paths are ignored.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn load_libclang(path: Option<String>) -> String {
    match load_with(path) {
        Ok(lib) => {
            info!(
                "event=ffi_load module=ffi status=ok path={}",
                lib.path().display()
            );
            String::new()
        }
        Err(err) => err,
    }
}

/// Path of the loaded library, or `None` before a successful load.
#[flutter_rust_bridge::frb(sync)]
pub fn loaded_libclang_path() -> Option<String> {
    LIBCLANG
        .get()
        .map(|lib| lib.path().to_string_lossy().into_owned())
}

/// Timestamp for clang's `-fbuild-session-timestamp=` option.
#[flutter_rust_bridge::frb(sync)]
pub fn get_build_session_timestamp() -> Result<u64, String> {
    Ok(libclang()?.build_session_timestamp())
}

/// Installs an error handler that prints to stderr and aborts.
///
/// # FFI contract
/// - Process-wide; replaces any installed handler.
#[flutter_rust_bridge::frb(sync)]
pub fn install_aborting_fatal_error_handler() -> Result<(), String> {
    libclang()?.install_aborting_fatal_error_handler();
    Ok(())
}

/// Removes the installed error handler; libclang then prints and exits.
///
/// # FFI contract
/// - Process-wide.
#[flutter_rust_bridge::frb(sync)]
pub fn uninstall_fatal_error_handler() -> Result<(), String> {
    libclang()?.uninstall_fatal_error_handler();
    Ok(())
}

/// Display options closest to the clang driver's behaviour, as a bitmask.
#[flutter_rust_bridge::frb(sync)]
pub fn default_diagnostic_display_options() -> Result<u32, String> {
    Ok(libclang()?.default_diagnostic_display_options().bits())
}

/// Name of a diagnostic category number.
#[flutter_rust_bridge::frb(sync)]
pub fn get_diagnostic_category_name(category: u32) -> Result<String, String> {
    Ok(libclang()?.diagnostic_category_name(category))
}

/// Parse flags for a translation unit that will be reparsed often.
#[flutter_rust_bridge::frb(sync)]
pub fn default_editing_translation_unit_options() -> Result<u32, String> {
    Ok(libclang()?.default_editing_translation_unit_options().bits())
}

/// USR for an Objective-C class.
#[flutter_rust_bridge::frb(sync)]
pub fn construct_usr_objc_class(class_name: String) -> Result<String, String> {
    usr_response(libclang()?.construct_usr_objc_class(&class_name))
}

/// USR for an Objective-C category.
#[flutter_rust_bridge::frb(sync)]
pub fn construct_usr_objc_category(
    class_name: String,
    category_name: String,
) -> Result<String, String> {
    usr_response(libclang()?.construct_usr_objc_category(&class_name, &category_name))
}

/// USR for an Objective-C protocol.
#[flutter_rust_bridge::frb(sync)]
pub fn construct_usr_objc_protocol(protocol_name: String) -> Result<String, String> {
    usr_response(libclang()?.construct_usr_objc_protocol(&protocol_name))
}

/// USR for an instance variable of the class identified by `class_usr`.
#[flutter_rust_bridge::frb(sync)]
pub fn construct_usr_objc_ivar(name: String, class_usr: String) -> Result<String, String> {
    usr_response(libclang()?.construct_usr_objc_ivar(&name, &Usr::new(class_usr)))
}

/// USR for a method of the class identified by `class_usr`.
///
/// Input semantics:
/// - `is_instance_method`: non-zero for instance methods, `0` for class methods.
#[flutter_rust_bridge::frb(sync)]
pub fn construct_usr_objc_method(
    name: String,
    is_instance_method: u32,
    class_usr: String,
) -> Result<String, String> {
    usr_response(libclang()?.construct_usr_objc_method(
        &name,
        native_flag(is_instance_method),
        &Usr::new(class_usr),
    ))
}

/// USR for a property of the class identified by `class_usr`.
#[flutter_rust_bridge::frb(sync)]
pub fn construct_usr_objc_property(property: String, class_usr: String) -> Result<String, String> {
    usr_response(libclang()?.construct_usr_objc_property(&property, &Usr::new(class_usr)))
}

/// Registers stack-trace printing signal handlers.
///
/// # FFI contract
/// - Process-wide.
#[flutter_rust_bridge::frb(sync)]
pub fn enable_stack_traces() -> Result<(), String> {
    libclang()?.enable_stack_traces();
    Ok(())
}

/// Default flags for code completion, as a bitmask.
#[flutter_rust_bridge::frb(sync)]
pub fn default_code_complete_options() -> Result<u32, String> {
    Ok(libclang()?.default_code_complete_options().bits())
}

/// Display-only libclang version string; do not parse it.
#[flutter_rust_bridge::frb(sync)]
pub fn get_clang_version() -> Result<String, String> {
    Ok(libclang()?.clang_version())
}

/// Enables (non-zero) or disables (`0`) crash recovery.
///
/// # FFI contract
/// - Process-wide.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_crash_recovery(is_enabled: u32) -> Result<(), String> {
    libclang()?.toggle_crash_recovery(native_flag(is_enabled));
    Ok(())
}

/// Host integer flags follow C: any non-zero value is true.
fn native_flag(value: u32) -> bool {
    value != 0
}

fn usr_response(result: CxResult<Usr>) -> Result<String, String> {
    result.map(Usr::into_string).map_err(|err| err.to_string())
}

fn libclang() -> Result<&'static Libclang, String> {
    load_with(None)
}

fn load_with(path: Option<String>) -> Result<&'static Libclang, String> {
    LIBCLANG
        .get_or_try_init(|| {
            let config = match path.as_deref().map(str::trim) {
                Some(explicit) if !explicit.is_empty() => LibclangConfig::for_path(explicit),
                _ => LibclangConfig::from_env(),
            };
            Libclang::load_with(&config)
        })
        .map_err(|err| format!("libclang unavailable: {err}"))
}
