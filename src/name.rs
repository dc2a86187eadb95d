//! Logical-to-physical native library name resolution

use crate::bundle::ResourceBundle;
use tracing::debug;

/// A platform's shared-library naming convention.
///
/// `physical_name` derives the filename a platform's tooling produces for a
/// logical library name. On macOS the historical JNI-style derivation yields
/// `.jnilib`, while shared libraries actually ship as `.dylib`, so that
/// convention carries an alternate extension to fall back to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NamingConvention {
    prefix: &'static str,
    extension: &'static str,
    alternate_extension: Option<&'static str>,
}

impl NamingConvention {
    /// Linux and other ELF platforms: `foo` → `libfoo.so`.
    pub const LINUX: Self = Self {
        prefix: "lib",
        extension: ".so",
        alternate_extension: None,
    };

    /// Windows: `foo` → `foo.dll`, no prefix.
    pub const WINDOWS: Self = Self {
        prefix: "",
        extension: ".dll",
        alternate_extension: None,
    };

    /// macOS: `foo` → `libfoo.jnilib`, falling back to `libfoo.dylib`.
    pub const MACOS: Self = Self {
        prefix: "lib",
        extension: ".jnilib",
        alternate_extension: Some(".dylib"),
    };

    /// The convention of the platform this process runs on.
    pub const fn host() -> Self {
        if cfg!(target_os = "windows") {
            Self::WINDOWS
        } else if cfg!(target_os = "macos") {
            Self::MACOS
        } else {
            Self::LINUX
        }
    }

    /// Map a logical name to this platform's physical filename.
    pub fn physical_name(&self, logical: &str) -> String {
        format!("{}{}{}", self.prefix, logical, self.extension)
    }

    /// Swap `physical`'s extension for the alternate one, if this convention
    /// has one and `physical` carries the primary extension.
    fn alternate_name(&self, physical: &str) -> Option<String> {
        let alternate = self.alternate_extension?;
        let stem = physical.strip_suffix(self.extension)?;
        Some(format!("{stem}{alternate}"))
    }
}

/// Ensure a bundle directory path ends with a separator.
///
/// Empty stays empty, meaning the bundle root.
pub(crate) fn normalize_dir(dir: &str) -> String {
    if dir.is_empty() || dir.ends_with('/') {
        dir.to_string()
    } else {
        format!("{dir}/")
    }
}

/// Resolve a full or logical library name against a bundle directory.
///
/// If `bundle_dir + name` names an existing resource, `name` is returned
/// unchanged; a caller that already knows the physical filename bypasses
/// derivation entirely. Otherwise `name` is treated as a logical name and
/// mapped through `convention`, with the macOS `.jnilib` → `.dylib`
/// correction applied when the primary derivation does not exist.
///
/// Returns `None` when no matching resource exists. Absence is a normal
/// outcome for probing, never an error. Only existence checks are made;
/// resource contents are not read.
///
/// # Panics
///
/// Panics if `name` is empty. A missing name is a caller bug, caught before
/// any I/O, and is deliberately distinct from the not-found outcome.
pub fn resolve<B: ResourceBundle + ?Sized>(
    bundle: &B,
    convention: NamingConvention,
    bundle_dir: &str,
    name: &str,
) -> Option<String> {
    assert!(!name.is_empty(), "library name must not be empty");

    let dir = normalize_dir(bundle_dir);

    // An exact physical filename that exists wins outright.
    if bundle.contains(&format!("{dir}{name}")) {
        return Some(name.to_string());
    }

    let mut physical = convention.physical_name(name);
    if !bundle.contains(&format!("{dir}{physical}")) {
        if let Some(alternate) = convention.alternate_name(&physical) {
            physical = alternate;
        }
    }

    if bundle.contains(&format!("{dir}{physical}")) {
        debug!(name, physical = %physical, "resolved bundled library");
        Some(physical)
    } else {
        None
    }
}
