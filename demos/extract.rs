//! Extract and load a native library from a directory bundle.
//!
//! Usage: extract <bundle-root> <library-name>
//!
//! The library name may be logical ("native") or physical ("libnative.so").
//! NATIVE_BUNDLE_DIR and NATIVE_EXTRACTION_DIR override the defaults.

use native_bundle::{BundleConfig, BundleLoader, DirBundle};

fn main() {
    let mut args = std::env::args().skip(1);
    let (root, name) = match (args.next(), args.next()) {
        (Some(root), Some(name)) => (root, name),
        _ => {
            eprintln!("usage: extract <bundle-root> <library-name>");
            std::process::exit(2);
        }
    };

    let loader = BundleLoader::new(DirBundle::new(root)).with_config(BundleConfig::from_env());

    match loader.extract_and_load(&name) {
        Ok(path) => println!("loaded {}", path.display()),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
