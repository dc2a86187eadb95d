//! NativeBundle - extract and load bundled native shared libraries
//!
//! Applications that ship native shared libraries inside their bundled
//! resources cannot hand those binaries to the platform loader directly; the
//! loader wants a real filesystem path. This crate resolves a
//! platform-independent logical name (`"native"`) or an exact physical
//! filename (`"libnative.so"`) against the bundle, copies the matching
//! resource into a writable directory, and loads it into the process.
//!
//! # Pipeline
//!
//! - **Resolve**: exact filename match first, then the host platform's
//!   naming convention (`lib` prefix + extension, with the macOS
//!   `.jnilib` → `.dylib` correction).
//! - **Extract**: prepare the destination directory, stream the resource
//!   to a file.
//! - **Load**: hand the absolute path to the host dynamic loader.
//!
//! # Example
//!
//! ```no_run
//! use native_bundle::{BundleConfig, BundleLoader, DirBundle};
//!
//! # fn main() -> native_bundle::Result<()> {
//! let loader = BundleLoader::new(DirBundle::new("/opt/app/resources"))
//!     .with_config(BundleConfig::from_env());
//!
//! // Resolves "native" to e.g. "libnative.so", extracts it into the
//! // platform temp directory, and loads it into the process.
//! let path = loader.extract_and_load("native")?;
//! println!("loaded {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod bundle;
pub mod config;
pub mod error;
pub mod extract;
pub mod host;
pub mod load;
pub mod name;

pub use bundle::{DirBundle, MemoryBundle, ResourceBundle};
pub use config::BundleConfig;
pub use error::{BundleError, Result};
pub use extract::copy_stream;
pub use host::{HostLoader, SystemLoader};
pub use load::BundleLoader;
pub use name::NamingConvention;
