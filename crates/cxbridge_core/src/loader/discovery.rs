//! Candidate file discovery.
//!
//! # Invariants
//! - Only file names matching the platform pattern are candidates.
//! - Within one directory, higher embedded versions come first and
//!   unversioned names come last; directory order is preserved.
//! - The same path is never listed twice.

use super::config::LibclangConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

#[cfg(target_os = "macos")]
const LIBRARY_NAME_PATTERN: &str = r"^libclang(?:\.(?P<version>[0-9]+(?:\.[0-9]+)*))?\.dylib$";
#[cfg(target_os = "windows")]
const LIBRARY_NAME_PATTERN: &str = r"^(?:lib)?clang(?:-(?P<version>[0-9]+(?:\.[0-9]+)*))?\.dll$";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const LIBRARY_NAME_PATTERN: &str =
    r"^libclang(?:-(?P<version>[0-9]+(?:\.[0-9]+)*))?\.so(?:\.(?P<soversion>[0-9]+(?:\.[0-9]+)*))?$";

static LIBRARY_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(LIBRARY_NAME_PATTERN).expect("library name pattern is a valid regex")
});

/// Result of scanning a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Files to try, in order.
    pub candidates: Vec<PathBuf>,
    /// Directories that were scanned.
    pub searched: Vec<PathBuf>,
}

/// Returns whether `file_name` looks like a libclang shared object.
pub fn is_library_name(file_name: &str) -> bool {
    LIBRARY_NAME.is_match(file_name)
}

/// Version embedded in a library file name; empty when unversioned.
pub fn library_version(file_name: &str) -> Vec<u32> {
    let Some(captures) = LIBRARY_NAME.captures(file_name) else {
        return Vec::new();
    };
    let version = captures
        .name("version")
        .or_else(|| captures.name("soversion"));
    version
        .map(|value| parse_version(value.as_str()))
        .unwrap_or_default()
}

/// Parses a dotted version, ignoring components that are not numbers.
pub(crate) fn parse_version(value: &str) -> Vec<u32> {
    value
        .split('.')
        .filter_map(|part| part.parse::<u32>().ok())
        .collect()
}

/// Lists candidate files for `config` without loading any of them.
pub fn discover(config: &LibclangConfig) -> Discovery {
    let mut discovery = Discovery::default();

    if let Some(path) = &config.explicit_path {
        discovery.candidates.push(path.clone());
    }

    for dir in &config.search_dirs {
        if discovery.searched.contains(dir) {
            continue;
        }
        discovery.searched.push(dir.clone());
        for candidate in scan_dir(dir) {
            if !discovery.candidates.contains(&candidate) {
                discovery.candidates.push(candidate);
            }
        }
    }

    discovery
}

fn scan_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut found = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            if !is_library_name(&name) {
                return None;
            }
            let path = entry.path();
            path.is_file().then(|| (library_version(&name), path))
        })
        .collect::<Vec<_>>();
    // Highest version first; ties broken by path for a stable order.
    found.sort_by(|left, right| right.0.cmp(&left.0).then_with(|| left.1.cmp(&right.1)));
    found.into_iter().map(|(_, path)| path).collect()
}
