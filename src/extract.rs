//! Materializing bundle resources onto the local filesystem
//!
//! Host loaders want a real filesystem path, so a bundled binary has to be
//! copied out before it can be loaded. Extraction is a single pass: prepare
//! the destination directory, stream the resource into a file, hand the path
//! back. Nothing is cached between calls and nothing is rolled back on
//! failure.

use crate::bundle::ResourceBundle;
use crate::error::{BundleError, Result};
use crate::name::normalize_dir;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Size of the intermediate copy buffer.
const COPY_BUF_SIZE: usize = 1024;

/// Copy `reader` into `writer` through a fixed-size buffer until end of
/// stream, returning the number of bytes copied.
///
/// A read of `Ok(0)` is end of stream; interrupted reads are retried.
pub fn copy_stream<R, W>(reader: &mut R, writer: &mut W) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = [0u8; COPY_BUF_SIZE];
    let mut copied = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => return Ok(copied),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buf[..n])?;
        copied += n as u64;
    }
}

/// Ensure the extraction directory exists, is a directory, and is writable.
pub(crate) fn prepare_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| BundleError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
    } else if !dir.is_dir() {
        return Err(BundleError::NotADirectory {
            path: dir.to_path_buf(),
        });
    } else if !dir_is_writable(dir) {
        return Err(BundleError::UnwritableDir {
            path: dir.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(unix)]
fn dir_is_writable(dir: &Path) -> bool {
    rustix::fs::access(dir, rustix::fs::Access::WRITE_OK).is_ok()
}

#[cfg(not(unix))]
fn dir_is_writable(dir: &Path) -> bool {
    fs::metadata(dir)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}

/// Copy the resource at `bundle_dir + physical_name` into `fs_dir`.
///
/// `physical_name` must already be resolved; this step does no name
/// derivation. Returns the destination path. Both the resource reader and
/// the destination file are owned values, so they are released on every
/// exit path.
pub(crate) fn extract<B: ResourceBundle + ?Sized>(
    bundle: &B,
    bundle_dir: &str,
    fs_dir: &Path,
    physical_name: &str,
) -> Result<PathBuf> {
    prepare_dir(fs_dir)?;

    let resource_path = format!("{}{}", normalize_dir(bundle_dir), physical_name);
    let destination = fs_dir.join(physical_name);

    // The existence check during resolution holds no lock; the open can
    // still fail and is reported with its cause.
    let mut reader = bundle.open(&resource_path).map_err(|e| BundleError::Io {
        path: PathBuf::from(&resource_path),
        source: e,
    })?;

    let mut file = File::create(&destination).map_err(|e| BundleError::Io {
        path: destination.clone(),
        source: e,
    })?;

    let bytes = copy_stream(reader.as_mut(), &mut file).map_err(|e| BundleError::Io {
        path: destination.clone(),
        source: e,
    })?;

    debug!(
        resource = %resource_path,
        destination = %destination.display(),
        bytes,
        "extracted bundled library"
    );

    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::MemoryBundle;
    use std::io::Cursor;

    #[test]
    fn copy_stream_handles_buffer_boundaries() {
        // Zero bytes, one under, exactly one buffer, one over, several
        // buffers plus change.
        for len in [0, COPY_BUF_SIZE - 1, COPY_BUF_SIZE, COPY_BUF_SIZE + 1, 3 * COPY_BUF_SIZE + 7] {
            let source: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
            let mut out = Vec::new();
            let copied = copy_stream(&mut Cursor::new(&source), &mut out).unwrap();
            assert_eq!(copied, len as u64);
            assert_eq!(out, source);
        }
    }

    #[test]
    fn copy_stream_propagates_read_errors() {
        struct BrokenReader;
        impl Read for BrokenReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "broken"))
            }
        }

        let mut out = Vec::new();
        let err = copy_stream(&mut BrokenReader, &mut out).unwrap_err();
        assert_eq!(err.to_string(), "broken");
    }

    #[test]
    fn prepare_dir_creates_missing_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b/c");
        prepare_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn prepare_dir_accepts_existing_writable_directory() {
        let tmp = tempfile::tempdir().unwrap();
        prepare_dir(tmp.path()).unwrap();
    }

    #[test]
    fn prepare_dir_rejects_uncreatable_path() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("occupied");
        fs::write(&file, b"").unwrap();

        // A path below a regular file cannot be created.
        let err = prepare_dir(&file.join("sub")).unwrap_err();
        assert!(matches!(err, BundleError::CreateDir { .. }), "got {err:?}");
    }

    #[test]
    fn prepare_dir_rejects_non_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("plain");
        fs::write(&file, b"").unwrap();

        let err = prepare_dir(&file).unwrap_err();
        assert!(matches!(err, BundleError::NotADirectory { .. }), "got {err:?}");
    }

    #[cfg(unix)]
    #[test]
    fn prepare_dir_rejects_read_only_directory() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("sealed");
        fs::create_dir(&dir).unwrap();
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();

        // Permission bits do not bind root; nothing to assert in that case.
        if File::create(dir.join("probe")).is_ok() {
            return;
        }

        let err = prepare_dir(&dir).unwrap_err();
        assert!(matches!(err, BundleError::UnwritableDir { .. }), "got {err:?}");

        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn extract_writes_identical_bytes() {
        let payload: Vec<u8> = (0..4096 + 123).map(|i| (i % 256) as u8).collect();
        let mut bundle = MemoryBundle::new();
        bundle.insert("lib/libfoo.so", payload.clone());

        let tmp = tempfile::tempdir().unwrap();
        let destination = extract(&bundle, "lib/", tmp.path(), "libfoo.so").unwrap();

        assert_eq!(destination, tmp.path().join("libfoo.so"));
        assert_eq!(fs::read(&destination).unwrap(), payload);
    }

    #[test]
    fn extract_overwrites_previous_file() {
        let mut bundle = MemoryBundle::new();
        bundle.insert("lib/libfoo.so", b"new".to_vec());

        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("libfoo.so"), b"an older, longer payload").unwrap();

        let destination = extract(&bundle, "lib/", tmp.path(), "libfoo.so").unwrap();
        assert_eq!(fs::read(&destination).unwrap(), b"new");
    }

    #[test]
    fn extract_missing_resource_is_io_error() {
        let bundle = MemoryBundle::new();
        let tmp = tempfile::tempdir().unwrap();

        let err = extract(&bundle, "lib/", tmp.path(), "libfoo.so").unwrap_err();
        assert!(matches!(err, BundleError::Io { .. }), "got {err:?}");
    }
}
