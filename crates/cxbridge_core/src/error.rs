//! Error types for loading libclang and marshaling call arguments.
//!
//! Native calls themselves surface no failure; the only errors here come from
//! finding the library and from host text that a C string cannot carry.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type CxResult<T> = Result<T, CxError>;

/// Argument marshaling errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CxError {
    /// Host text contained a NUL byte and cannot become a C string.
    InteriorNul { argument: &'static str },
}

impl Display for CxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InteriorNul { argument } => {
                write!(f, "argument `{argument}` contains an interior NUL byte")
            }
        }
    }
}

impl Error for CxError {}

/// Library discovery and symbol resolution errors.
#[derive(Debug)]
pub enum LoadError {
    /// No candidate library file exists in any searched location.
    NotFound { searched: Vec<PathBuf> },
    /// The dynamic loader rejected the file.
    Open {
        path: PathBuf,
        source: libloading::Error,
    },
    /// The file loaded but does not export a required entry point.
    MissingSymbol {
        path: PathBuf,
        symbol: &'static str,
        source: libloading::Error,
    },
    /// Candidates exist but every one failed with `Open` or `MissingSymbol`.
    Unloadable { attempts: Vec<LoadError> },
}

impl LoadError {
    /// Path of the file this error refers to, when there is exactly one.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Open { path, .. } | Self::MissingSymbol { path, .. } => Some(path),
            Self::NotFound { .. } | Self::Unloadable { .. } => None,
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { searched } => {
                write!(f, "libclang not found; searched ")?;
                if searched.is_empty() {
                    return write!(f, "no locations (set LIBCLANG_PATH)");
                }
                for (index, dir) in searched.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "`{}`", dir.display())?;
                }
                Ok(())
            }
            Self::Open { path, source } => {
                write!(f, "failed to open `{}`: {source}", path.display())
            }
            Self::MissingSymbol { path, symbol, .. } => {
                write!(f, "`{}` does not export `{symbol}`", path.display())
            }
            Self::Unloadable { attempts } => {
                write!(
                    f,
                    "no loadable libclang among {} candidate(s)",
                    attempts.len()
                )?;
                for attempt in attempts {
                    write!(f, "; {attempt}")?;
                }
                Ok(())
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::MissingSymbol { source, .. } => Some(source),
            Self::NotFound { .. } | Self::Unloadable { .. } => None,
        }
    }
}
