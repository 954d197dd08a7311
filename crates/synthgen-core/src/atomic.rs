use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// Writes `data` to a sibling temp file, syncs it, then renames it over `path`.
pub fn write_bytes_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path(path)?;
    let staged = write_temp(&tmp_path, data).and_then(|()| std::fs::rename(&tmp_path, path));
    if let Err(err) = staged {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(err.into());
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            sync_dir(parent)?;
        }
    }

    Ok(())
}

fn write_temp(tmp_path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(tmp_path)?;
    file.write_all(data)?;
    file.sync_all()
}

fn temp_path(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| CoreError::InvalidPath(path.display().to_string()))?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

#[cfg(unix)]
fn sync_dir(path: &Path) -> io::Result<()> {
    let dir = OpenOptions::new().read(true).open(path)?;
    dir.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_needs_a_file_name() {
        assert!(temp_path(Path::new("/")).is_err());
        assert_eq!(
            temp_path(Path::new("out/data.json")).expect("temp path"),
            PathBuf::from("out/data.json.tmp")
        );
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let dir = std::env::temp_dir().join(format!("synthgen-atomic-{}", uuid::Uuid::new_v4()));
        let target = dir.join("data.json");
        create_dir_all(target.join("occupied")).expect("create blocking dir");

        assert!(write_bytes_atomic(&target, b"[]").is_err());
        assert!(!dir.join("data.json.tmp").exists());
        assert!(target.is_dir());

        std::fs::remove_dir_all(&dir).expect("cleanup");
    }
}
