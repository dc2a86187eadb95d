//! High-level resolve / extract / load API
//!
//! [`BundleLoader`] wires a resource bundle, a host loader, and a
//! configuration snapshot into the single-pass pipeline: resolve the name,
//! prepare the extraction directory, copy the resource out, hand the file to
//! the host loader. Calls are independent; the loader keeps no record of
//! what it has loaded.

use crate::bundle::ResourceBundle;
use crate::config::BundleConfig;
use crate::error::{BundleError, Result};
use crate::extract;
use crate::host::{HostLoader, SystemLoader};
use crate::name::{self, NamingConvention};
use std::path::{Path, PathBuf};

/// Resolves, extracts, and loads native libraries from a resource bundle.
pub struct BundleLoader<B, L = SystemLoader> {
    bundle: B,
    loader: L,
    config: BundleConfig,
    convention: NamingConvention,
}

impl<B: ResourceBundle> BundleLoader<B> {
    /// Loader over `bundle` with the default configuration and the
    /// platform's own dynamic loader.
    pub fn new(bundle: B) -> Self {
        Self::with_loader(bundle, SystemLoader)
    }
}

impl<B: ResourceBundle, L: HostLoader> BundleLoader<B, L> {
    /// Loader over `bundle` that hands extracted files to `loader`.
    pub fn with_loader(bundle: B, loader: L) -> Self {
        Self {
            bundle,
            loader,
            config: BundleConfig::default(),
            convention: NamingConvention::host(),
        }
    }

    /// Replace the configuration snapshot.
    pub fn with_config(mut self, config: BundleConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolve names under a convention other than the host's.
    pub fn with_convention(mut self, convention: NamingConvention) -> Self {
        self.convention = convention;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    /// Resolve `name` against the configured bundle directory.
    ///
    /// See [`resolve_in`](Self::resolve_in).
    pub fn resolve(&self, name: &str) -> Option<String> {
        self.resolve_in(self.config.bundle_dir_or_default(), name)
    }

    /// Resolve a full or logical library `name` against `bundle_dir`,
    /// returning the physical filename of an existing resource, or `None`.
    pub fn resolve_in(&self, bundle_dir: &str, name: &str) -> Option<String> {
        name::resolve(&self.bundle, self.convention, bundle_dir, name)
    }

    /// Extract and load `name` using the configured directories.
    ///
    /// See [`extract_and_load_in`](Self::extract_and_load_in).
    pub fn extract_and_load(&self, name: &str) -> Result<PathBuf> {
        self.extract_and_load_in(
            self.config.bundle_dir_or_default(),
            &self.config.extraction_dir_or_default(),
            name,
        )
    }

    /// Extract the library `name` from `bundle_dir` into `fs_dir` and load
    /// it with the host loader, returning the extracted file's path.
    ///
    /// Fails with [`BundleError::NotFound`] when resolution finds nothing;
    /// once a native library is missing, nothing downstream of it can work,
    /// so there is no probing variant of this call. Use
    /// [`resolve_in`](Self::resolve_in) to probe.
    pub fn extract_and_load_in(
        &self,
        bundle_dir: &str,
        fs_dir: &Path,
        name: &str,
    ) -> Result<PathBuf> {
        let physical = self
            .resolve_in(bundle_dir, name)
            .ok_or_else(|| BundleError::NotFound {
                name: name.to_string(),
                bundle_dir: bundle_dir.to_string(),
            })?;

        let destination = extract::extract(&self.bundle, bundle_dir, fs_dir, &physical)?;

        // Host loaders expect an absolute path; keep symlinks intact.
        let destination = std::path::absolute(&destination).map_err(|e| BundleError::Io {
            path: destination.clone(),
            source: e,
        })?;

        self.loader.load(&destination)?;
        Ok(destination)
    }
}
