//! Error types for bundled library extraction and loading

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for bundle operations
pub type Result<T> = std::result::Result<T, BundleError>;

/// Errors that can occur while extracting or loading a bundled library
///
/// Every failure is terminal for the call that produced it; nothing is
/// retried, and partial side effects (a half-written destination file, a
/// freshly created extraction directory) are left in place.
#[derive(Debug, Error)]
pub enum BundleError {
    /// No bundle resource matched the requested library name
    #[error("library '{name}' not found under bundle directory '{bundle_dir}'")]
    NotFound { name: String, bundle_dir: String },

    /// The extraction directory was missing and could not be created
    #[error("failed to create extraction directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The extraction path exists but is not a directory
    #[error("extraction path '{}' exists but is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// The extraction directory exists but is not writable
    #[error("extraction directory '{}' is not writable", path.display())]
    UnwritableDir { path: PathBuf },

    /// An open, read, or write failed while copying a resource out of the bundle
    #[error("failed to extract '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The host loader rejected the extracted library
    #[error("failed to load native library: {0}")]
    Load(#[from] libloading::Error),
}
