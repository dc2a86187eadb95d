//! The host dynamic-loader seam

use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// Loads a native library from a filesystem path into the current process.
///
/// Whether loading the same path twice is a no-op or an error is owned by
/// the platform loader, not by implementations of this trait.
pub trait HostLoader {
    /// Load the library at `path`.
    fn load(&self, path: &Path) -> Result<()>;
}

/// The platform's own dynamic loader (`dlopen` / `LoadLibraryW`).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLoader;

impl HostLoader for SystemLoader {
    fn load(&self, path: &Path) -> Result<()> {
        // SAFETY: loading a shared library runs its initializers; the caller
        // vouches for the binaries it bundled.
        let library = unsafe { libloading::Library::new(path)? };

        // The mapping must survive for the process lifetime. Leak the handle
        // so the library is never unloaded behind the caller's back.
        std::mem::forget(library);

        debug!(path = %path.display(), "loaded native library");
        Ok(())
    }
}
