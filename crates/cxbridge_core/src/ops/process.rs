//! Process-global native state.
//!
//! # Invariants
//! - libclang is the only source of truth for this state; nothing here is
//!   cached on the Rust side.
//! - Every mutation is visible to all `Libclang` handles in the process.

use crate::library::Libclang;
use log::debug;
use std::ffi::c_uint;

impl Libclang {
    /// Timestamp suitable for clang's `-fbuild-session-timestamp=` option.
    pub fn build_session_timestamp(&self) -> u64 {
        // SAFETY: no arguments; returns a plain integer.
        unsafe { (self.api.get_build_session_timestamp)() }
    }

    /// Installs a fatal error handler that prints to stderr and aborts.
    ///
    /// Replaces any handler installed before, process-wide.
    pub fn install_aborting_fatal_error_handler(&self) {
        debug!("event=fatal_error_handler module=process status=ok action=install");
        // SAFETY: no arguments; mutates libclang-owned global state only.
        unsafe { (self.api.install_aborting_fatal_error_handler)() }
    }

    /// Removes the installed fatal error handler, if any.
    ///
    /// Without a handler libclang prints the error to stderr and calls
    /// `exit(1)`.
    pub fn uninstall_fatal_error_handler(&self) {
        debug!("event=fatal_error_handler module=process status=ok action=uninstall");
        // SAFETY: no arguments; mutates libclang-owned global state only.
        unsafe { (self.api.uninstall_fatal_error_handler)() }
    }

    /// Registers LLVM's stack-trace printing signal handlers.
    pub fn enable_stack_traces(&self) {
        debug!("event=stack_traces module=process status=ok action=enable");
        // SAFETY: no arguments; mutates libclang-owned global state only.
        unsafe { (self.api.enable_stack_traces)() }
    }

    /// Enables or disables crash recovery for the whole process.
    pub fn toggle_crash_recovery(&self, is_enabled: bool) {
        debug!(
            "event=crash_recovery module=process status=ok enabled={}",
            is_enabled
        );
        // SAFETY: plain integer flag; non-zero enables.
        unsafe { (self.api.toggle_crash_recovery)(c_uint::from(is_enabled)) }
    }
}
