//! Safe Rust binding over libclang's C interface.
//! This crate owns every crossing of the native boundary: loading the
//! library, marshaling arguments, and releasing native strings.

pub mod error;
mod library;
pub mod loader;
pub mod logging;
pub mod model;
mod native;
mod ops;

pub use error::{CxError, CxResult, LoadError};
pub use library::Libclang;
pub use loader::{LibclangConfig, LIBCLANG_PATH_ENV};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::options::{
    describe_flags, CodeCompleteFlags, DiagnosticDisplayOptions, TranslationUnitFlags,
};
pub use model::usr::Usr;
pub use native::REQUIRED_SYMBOLS;

/// Returns the binding crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
