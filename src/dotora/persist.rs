//! Writing edited documents back to disk

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use tempfile::NamedTempFile;
use tracing::info;

use crate::dotora::ast::Result;

/// Replace the file at `path` with `contents` atomically
///
/// The new contents go to a temporary file in the same directory, which is then renamed over
/// the target. With `backup_suffix`, an existing file is first copied to
/// `<path>.<suffix>`, where the suffix is a chrono format string rendered with the current
/// local time. Returns the backup path, if one was made.
pub fn write_atomic(
    path: &Path,
    contents: &str,
    backup_suffix: Option<&str>,
) -> Result<Option<PathBuf>> {
    let backup = match backup_suffix {
        Some(suffix) if path.exists() => {
            let target = backup_path(path, suffix);
            fs::copy(path, &target)?;
            info!(backup = %target.display(), "backed up original");
            Some(target)
        }
        _ => None,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(contents.as_bytes())?;
    temp.as_file().sync_all()?;
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp.path(), metadata.permissions())?;
    }
    temp.persist(path).map_err(|err| err.error)?;

    info!(path = %path.display(), bytes = contents.len(), "wrote document");
    Ok(backup)
}

fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let stamp = Local::now().format(suffix).to_string();
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(stamp);
    PathBuf::from(name)
}
