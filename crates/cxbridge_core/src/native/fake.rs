//! In-process stand-in for libclang used by unit tests.
//!
//! Each entry point records what it saw in thread-local state, so tests
//! running in parallel never observe each other.

use super::{CXString, NativeApi, CXS_UNMANAGED};
use std::cell::{Cell, RefCell};
use std::ffi::{c_char, c_uint, c_ulonglong, c_void, CStr, CString};

const OWNED_FLAG: c_uint = 1;

pub(crate) const FAKE_TIMESTAMP: u64 = 1_700_000_000;
pub(crate) const FAKE_DIAGNOSTIC_OPTIONS: u32 = 0x01 | 0x02 | 0x08;
pub(crate) const FAKE_EDITING_OPTIONS: u32 = 0x04 | 0x08 | 0x10000;
pub(crate) const FAKE_CODE_COMPLETE_OPTIONS: u32 = 0x01;
pub(crate) const FAKE_VERSION: &str = "clang version 18.1.8 (fake)";

thread_local! {
    static DISPOSED: Cell<usize> = const { Cell::new(0) };
    static UNMANAGED_DISPOSED: Cell<usize> = const { Cell::new(0) };
    static NULL_VERSION: Cell<bool> = const { Cell::new(false) };
    static CRASH_RECOVERY: Cell<Option<c_uint>> = const { Cell::new(None) };
    static CALLS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

pub(crate) fn fake_api() -> NativeApi {
    NativeApi {
        get_c_string,
        dispose_string,
        get_build_session_timestamp,
        install_aborting_fatal_error_handler,
        uninstall_fatal_error_handler,
        default_diagnostic_display_options,
        get_diagnostic_category_name,
        default_editing_translation_unit_options,
        construct_usr_objc_class,
        construct_usr_objc_category,
        construct_usr_objc_protocol,
        construct_usr_objc_ivar,
        construct_usr_objc_method,
        construct_usr_objc_property,
        enable_stack_traces,
        default_code_complete_options,
        get_clang_version,
        toggle_crash_recovery,
    }
}

pub(crate) fn reset() {
    DISPOSED.with(|count| count.set(0));
    UNMANAGED_DISPOSED.with(|count| count.set(0));
    NULL_VERSION.with(|flag| flag.set(false));
    CRASH_RECOVERY.with(|state| state.set(None));
    CALLS.with(|calls| calls.borrow_mut().clear());
}

pub(crate) fn disposed_count() -> usize {
    DISPOSED.with(Cell::get)
}

pub(crate) fn unmanaged_disposed_count() -> usize {
    UNMANAGED_DISPOSED.with(Cell::get)
}

pub(crate) fn return_null_version(enabled: bool) {
    NULL_VERSION.with(|flag| flag.set(enabled));
}

pub(crate) fn crash_recovery_state() -> Option<c_uint> {
    CRASH_RECOVERY.with(Cell::get)
}

pub(crate) fn calls() -> Vec<String> {
    CALLS.with(|calls| calls.borrow().clone())
}

/// Allocates a string the fake `dispose_string` knows how to free.
pub(crate) fn owned_string(text: &str) -> CXString {
    let buffer = CString::new(text).expect("fake strings never contain nul");
    CXString {
        data: buffer.into_raw().cast::<c_void>().cast_const(),
        private_flags: OWNED_FLAG,
    }
}

fn record(call: impl Into<String>) {
    CALLS.with(|calls| calls.borrow_mut().push(call.into()));
}

unsafe fn read(ptr: *const c_char) -> String {
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

unsafe fn read_cx(value: CXString) -> String {
    read(value.data.cast::<c_char>())
}

fn usr_suffix(class_usr: &str) -> &str {
    class_usr.strip_prefix("c:").unwrap_or(class_usr)
}

unsafe extern "C" fn get_c_string(value: CXString) -> *const c_char {
    value.data.cast::<c_char>()
}

unsafe extern "C" fn dispose_string(value: CXString) {
    if value.private_flags == CXS_UNMANAGED && !value.data.is_null() {
        UNMANAGED_DISPOSED.with(|count| count.set(count.get() + 1));
    }
    if value.private_flags == OWNED_FLAG && !value.data.is_null() {
        drop(CString::from_raw(value.data.cast_mut().cast::<c_char>()));
    }
    DISPOSED.with(|count| count.set(count.get() + 1));
}

unsafe extern "C" fn get_build_session_timestamp() -> c_ulonglong {
    FAKE_TIMESTAMP
}

unsafe extern "C" fn install_aborting_fatal_error_handler() {
    record("install_aborting_fatal_error_handler");
}

unsafe extern "C" fn uninstall_fatal_error_handler() {
    record("uninstall_fatal_error_handler");
}

unsafe extern "C" fn default_diagnostic_display_options() -> c_uint {
    FAKE_DIAGNOSTIC_OPTIONS
}

unsafe extern "C" fn get_diagnostic_category_name(category: c_uint) -> CXString {
    record(format!("get_diagnostic_category_name({category})"));
    owned_string(&format!("Category {category}"))
}

unsafe extern "C" fn default_editing_translation_unit_options() -> c_uint {
    FAKE_EDITING_OPTIONS
}

unsafe extern "C" fn construct_usr_objc_class(class_name: *const c_char) -> CXString {
    let class_name = read(class_name);
    record(format!("construct_usr_objc_class({class_name})"));
    owned_string(&format!("c:objc(cs){class_name}"))
}

unsafe extern "C" fn construct_usr_objc_category(
    class_name: *const c_char,
    category_name: *const c_char,
) -> CXString {
    owned_string(&format!(
        "c:objc(cy){}@{}",
        read(class_name),
        read(category_name)
    ))
}

unsafe extern "C" fn construct_usr_objc_protocol(protocol_name: *const c_char) -> CXString {
    owned_string(&format!("c:objc(pl){}", read(protocol_name)))
}

unsafe extern "C" fn construct_usr_objc_ivar(name: *const c_char, class_usr: CXString) -> CXString {
    let class_usr = read_cx(class_usr);
    owned_string(&format!("c:{}@{}", usr_suffix(&class_usr), read(name)))
}

unsafe extern "C" fn construct_usr_objc_method(
    name: *const c_char,
    is_instance_method: c_uint,
    class_usr: CXString,
) -> CXString {
    record(format!("construct_usr_objc_method(is_instance_method={is_instance_method})"));
    let class_usr = read_cx(class_usr);
    let kind = if is_instance_method != 0 { "im" } else { "cm" };
    owned_string(&format!(
        "c:{}({kind}){}",
        usr_suffix(&class_usr),
        read(name)
    ))
}

unsafe extern "C" fn construct_usr_objc_property(
    property: *const c_char,
    class_usr: CXString,
) -> CXString {
    let class_usr = read_cx(class_usr);
    owned_string(&format!(
        "c:{}(py){}",
        usr_suffix(&class_usr),
        read(property)
    ))
}

unsafe extern "C" fn enable_stack_traces() {
    record("enable_stack_traces");
}

unsafe extern "C" fn default_code_complete_options() -> c_uint {
    FAKE_CODE_COMPLETE_OPTIONS
}

unsafe extern "C" fn get_clang_version() -> CXString {
    if NULL_VERSION.with(Cell::get) {
        return CXString {
            data: std::ptr::null(),
            private_flags: CXS_UNMANAGED,
        };
    }
    owned_string(FAKE_VERSION)
}

unsafe extern "C" fn toggle_crash_recovery(is_enabled: c_uint) {
    CRASH_RECOVERY.with(|state| state.set(Some(is_enabled)));
}
