//! Locating and opening the libclang shared library.
//!
//! # Responsibility
//! - Turn a `LibclangConfig` into an ordered list of candidate files.
//! - Open candidates until one resolves every required entry point.
//!
//! # Invariants
//! - A library is returned only with a fully resolved function table.
//! - Loading never panics; every failure is a `LoadError`.

mod config;
mod discovery;

pub use config::{LibclangConfig, LIBCLANG_PATH_ENV};
pub use discovery::{discover, is_library_name, library_version, Discovery};

use crate::error::LoadError;
use crate::native::{NativeApi, REQUIRED_SYMBOLS};
use libloading::Library;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// An opened library together with its resolved entry points.
pub(crate) struct Opened {
    pub path: PathBuf,
    pub library: Library,
    pub api: NativeApi,
}

/// Opens one file and resolves the function table from it.
pub(crate) fn open(path: &Path) -> Result<Opened, LoadError> {
    // SAFETY: loading runs the library's initializers; libclang's are
    // side-effect free apart from registering its own globals.
    let library = unsafe { Library::new(path) }.map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    // SAFETY: the declared signatures match the libclang C headers.
    let api = unsafe { NativeApi::resolve(&library, path) }?;
    Ok(Opened {
        path: path.to_path_buf(),
        library,
        api,
    })
}

/// Tries every candidate of `config` in order and keeps the first usable one.
///
/// # Side effects
/// - Emits `libclang_load` logging events with duration and status.
pub(crate) fn load(config: &LibclangConfig) -> Result<Opened, LoadError> {
    let started_at = Instant::now();
    info!("event=libclang_load module=loader status=start");

    let Discovery {
        candidates,
        searched,
    } = discover(config);
    if candidates.is_empty() {
        error!(
            "event=libclang_load module=loader status=error duration_ms={} error_code=not_found searched={}",
            started_at.elapsed().as_millis(),
            searched.len()
        );
        return Err(LoadError::NotFound { searched });
    }

    let mut attempts = Vec::new();
    for candidate in candidates {
        match open(&candidate) {
            Ok(opened) => {
                info!(
                    "event=libclang_load module=loader status=ok duration_ms={} path={} symbols={}",
                    started_at.elapsed().as_millis(),
                    opened.path.display(),
                    REQUIRED_SYMBOLS.len()
                );
                return Ok(opened);
            }
            Err(err) => {
                warn!(
                    "event=libclang_load module=loader status=skip path={} error={}",
                    candidate.display(),
                    err
                );
                attempts.push(err);
            }
        }
    }

    error!(
        "event=libclang_load module=loader status=error duration_ms={} error_code=unloadable attempts={}",
        started_at.elapsed().as_millis(),
        attempts.len()
    );
    Err(LoadError::Unloadable { attempts })
}
