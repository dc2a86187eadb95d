//! Where to find native libraries in the bundle and where to extract them

use std::env;
use std::path::PathBuf;

/// Environment override for the bundle directory holding native libraries.
pub const BUNDLE_DIR_ENV: &str = "NATIVE_BUNDLE_DIR";

/// Environment override for the filesystem directory libraries are
/// extracted to.
pub const EXTRACTION_DIR_ENV: &str = "NATIVE_EXTRACTION_DIR";

/// Default bundle directory for native libraries.
pub const DEFAULT_BUNDLE_DIR: &str = "lib/";

/// Configuration for resolution and extraction.
///
/// Unset fields fall back to their defaults at call time: `"lib/"` for the
/// bundle directory, the platform temp directory for extraction. The struct
/// is a plain snapshot; the environment is only consulted by [`from_env`],
/// never from inside a resolve or extract call.
///
/// [`from_env`]: BundleConfig::from_env
#[derive(Clone, Debug, Default)]
pub struct BundleConfig {
    /// Bundle-relative directory holding the native libraries.
    pub bundle_dir: Option<String>,

    /// Filesystem directory libraries are extracted to before loading.
    pub extraction_dir: Option<PathBuf>,
}

impl BundleConfig {
    /// Configuration with both fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the two overrides from the environment, once.
    pub fn from_env() -> Self {
        Self {
            bundle_dir: env::var(BUNDLE_DIR_ENV).ok(),
            extraction_dir: env::var_os(EXTRACTION_DIR_ENV).map(PathBuf::from),
        }
    }

    /// The configured bundle directory, or [`DEFAULT_BUNDLE_DIR`].
    pub fn bundle_dir_or_default(&self) -> &str {
        self.bundle_dir.as_deref().unwrap_or(DEFAULT_BUNDLE_DIR)
    }

    /// The configured extraction directory, or the platform temp directory.
    pub fn extraction_dir_or_default(&self) -> PathBuf {
        self.extraction_dir.clone().unwrap_or_else(env::temp_dir)
    }
}
