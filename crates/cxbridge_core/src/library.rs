//! The loaded-library handle.
//!
//! # Responsibility
//! - Own the shared object and the entry points resolved from it.
//! - Serve as the explicit capability for every native operation.
//!
//! # Invariants
//! - The function table is dropped before the library is unloaded.
//! - Native state mutated through this handle (fatal error handler, stack
//!   traces, crash recovery) is process-global. Two `Libclang` values opened
//!   from the same file share it, and nothing is tracked on the Rust side.

use crate::error::LoadError;
use crate::loader::{self, LibclangConfig};
use crate::native::NativeApi;
use libloading::Library;
use std::fmt::{Debug, Formatter};
use std::path::{Path, PathBuf};

/// Handle to a loaded libclang.
pub struct Libclang {
    pub(crate) api: NativeApi,
    path: PathBuf,
    _library: Option<Library>,
}

impl Libclang {
    /// Loads libclang using `LIBCLANG_PATH` and the platform search paths.
    ///
    /// # Errors
    /// - `LoadError::NotFound` when no candidate file exists.
    /// - `LoadError::Unloadable` when every candidate failed to open.
    pub fn load() -> Result<Self, LoadError> {
        Self::load_with(&LibclangConfig::from_env())
    }

    /// Loads the first usable candidate described by `config`.
    pub fn load_with(config: &LibclangConfig) -> Result<Self, LoadError> {
        loader::load(config).map(Self::from_opened)
    }

    /// Opens exactly one library file.
    ///
    /// # Errors
    /// - `LoadError::Open` when the dynamic loader rejects the file.
    /// - `LoadError::MissingSymbol` when a required entry point is absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        loader::open(path.as_ref()).map(Self::from_opened)
    }

    /// File the library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn from_opened(opened: loader::Opened) -> Self {
        Self {
            api: opened.api,
            path: opened.path,
            _library: Some(opened.library),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_api(api: NativeApi) -> Self {
        Self {
            api,
            path: PathBuf::from("<in-process>"),
            _library: None,
        }
    }
}

impl Debug for Libclang {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Libclang")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::Libclang;
    use crate::native::fake::fake_api;

    #[test]
    fn debug_output_shows_path_only() {
        let lib = Libclang::from_api(fake_api());
        let rendered = format!("{lib:?}");
        assert!(rendered.contains("<in-process>"));
        assert!(rendered.contains(".."));
    }

    #[test]
    fn handle_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Libclang>();
    }
}
