//! Filesystem helpers for key files.
//!
//! Key files are staged in a temp file under the keys root and moved into
//! place without clobbering, so a key file is either complete or absent.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::warn;

/// Atomically create `path` with `contents`, failing if it already exists.
///
/// `staging` must be on the same filesystem as `path`. Returns an error of
/// kind `AlreadyExists` when `path` is taken.
pub(super) fn write_new(staging: &Path, path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
    let mut tmp = NamedTempFile::new_in(staging)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(tmp.path(), fs::Permissions::from_mode(mode))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    tmp.persist_noclobber(path).map_err(|e| e.error)?;
    Ok(())
}

/// Whether anything, including a dangling symlink, occupies `path`.
pub(super) fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Warn about a private key file readable by others (Unix only).
#[cfg(unix)]
pub(super) fn check_private_permissions(path: &Path, expected_mode: u32) {
    if crate::core::validation::validate_file_permissions(path, expected_mode).is_err() {
        let mode = fs::metadata(path)
            .map(|m| {
                use std::os::unix::fs::PermissionsExt;
                format!("{:o}", m.permissions().mode() & 0o777)
            })
            .unwrap_or_else(|_| "unknown".to_string());

        warn!(
            path = %path.display(),
            mode = %mode,
            "insecure key file permissions"
        );
    }
}

#[cfg(not(unix))]
pub(super) fn check_private_permissions(_path: &Path, _expected_mode: u32) {}
