//! Where to look for libclang.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a libclang file or a directory holding one.
pub const LIBCLANG_PATH_ENV: &str = "LIBCLANG_PATH";

/// Search configuration for `Libclang::load_with`.
///
/// # Invariants
/// - `explicit_path`, when set, is tried before any directory.
/// - `search_dirs` are scanned in order; earlier directories win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibclangConfig {
    /// A single library file to try first.
    #[serde(default)]
    pub explicit_path: Option<PathBuf>,
    /// Directories scanned for versioned library names.
    #[serde(default)]
    pub search_dirs: Vec<PathBuf>,
}

impl LibclangConfig {
    /// Builds the configuration from `LIBCLANG_PATH` plus platform defaults.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(LIBCLANG_PATH_ENV).ok().as_deref())
    }

    /// Same as `from_env`, with the variable's value supplied by the caller.
    ///
    /// A directory value is searched before the platform defaults; a file
    /// value becomes `explicit_path`. Blank values are ignored.
    pub fn from_env_value(value: Option<&str>) -> Self {
        let mut config = Self::with_default_dirs();
        let Some(raw) = value else {
            return config;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return config;
        }

        let path = PathBuf::from(trimmed);
        if path.is_dir() {
            config.search_dirs.retain(|dir| dir != &path);
            config.search_dirs.insert(0, path);
        } else {
            config.explicit_path = Some(path);
        }
        config
    }

    /// Platform default directories only.
    pub fn with_default_dirs() -> Self {
        Self {
            explicit_path: None,
            search_dirs: default_search_dirs(),
        }
    }

    /// Configuration that tries exactly one file.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            explicit_path: Some(path.into()),
            search_dirs: Vec::new(),
        }
    }
}

fn default_search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if cfg!(target_os = "macos") {
        dirs.push(PathBuf::from(
            "/Applications/Xcode.app/Contents/Developer/Toolchains/XcodeDefault.xctoolchain/usr/lib",
        ));
        dirs.push(PathBuf::from("/Library/Developer/CommandLineTools/usr/lib"));
        dirs.push(PathBuf::from("/opt/homebrew/opt/llvm/lib"));
        dirs.push(PathBuf::from("/usr/local/opt/llvm/lib"));
    } else if cfg!(target_os = "windows") {
        dirs.push(PathBuf::from(r"C:\Program Files\LLVM\bin"));
        dirs.push(PathBuf::from(r"C:\Program Files (x86)\LLVM\bin"));
    } else {
        dirs.extend(llvm_install_dirs(Path::new("/usr/lib"), "llvm-"));
        dirs.extend(llvm_install_dirs(Path::new("/usr/lib64"), "llvm"));
        for dir in [
            "/usr/lib",
            "/usr/lib64",
            "/usr/local/lib",
            "/usr/lib/x86_64-linux-gnu",
            "/usr/lib/aarch64-linux-gnu",
        ] {
            dirs.push(PathBuf::from(dir));
        }
    }

    dirs
}

/// Lists `<root>/<prefix>*/lib` directories, newest version first.
fn llvm_install_dirs(root: &Path, prefix: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(root) else {
        return Vec::new();
    };

    let mut found = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            let version = name.strip_prefix(prefix)?;
            let lib = entry.path().join("lib");
            lib.is_dir().then(|| (super::discovery::parse_version(version), lib))
        })
        .collect::<Vec<_>>();
    found.sort_by(|left, right| right.0.cmp(&left.0));
    found.into_iter().map(|(_, lib)| lib).collect()
}
