//! Read-only access to the resources packaged with an application
//!
//! A bundle is addressed with slash-separated, bundle-relative paths such as
//! `"lib/libnative.so"`, regardless of how it is stored on the host.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// The packaged resources a native library is looked up in.
///
/// Implementations only need existence checks and byte access; resolution
/// never reads resource contents, and extraction reads each resource once,
/// front to back.
pub trait ResourceBundle {
    /// Whether a resource exists at `path`.
    fn contains(&self, path: &str) -> bool;

    /// Open the resource at `path` for reading.
    ///
    /// Fails if the resource is absent or unreadable; `contains` passing
    /// earlier is no guarantee, the bundle may have changed underneath.
    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>>;
}

/// A bundle unpacked onto the filesystem, rooted at a directory.
///
/// Resource paths are resolved relative to the root, so
/// `DirBundle::new("/opt/app/resources")` serves `"lib/libnative.so"` from
/// `/opt/app/resources/lib/libnative.so`.
pub struct DirBundle {
    root: PathBuf,
}

impl DirBundle {
    /// Bundle rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The bundle's root directory.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn resource_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl ResourceBundle for DirBundle {
    fn contains(&self, path: &str) -> bool {
        self.resource_path(path).is_file()
    }

    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        let file = File::open(self.resource_path(path))?;
        Ok(Box::new(file))
    }
}

/// A bundle held in memory.
///
/// The natural fit for resources embedded with `include_bytes!`, and for
/// tests that need a bundle without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryBundle {
    resources: HashMap<String, Vec<u8>>,
}

impl MemoryBundle {
    /// An empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource at `path`, replacing any previous bytes there.
    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> &mut Self {
        self.resources.insert(path.into(), bytes.into());
        self
    }
}

impl ResourceBundle for MemoryBundle {
    fn contains(&self, path: &str) -> bool {
        self.resources.contains_key(path)
    }

    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        match self.resources.get(path) {
            Some(bytes) => Ok(Box::new(bytes.as_slice())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no bundled resource at '{path}'"),
            )),
        }
    }
}
