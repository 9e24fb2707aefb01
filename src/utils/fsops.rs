//! Filesystem helpers for the destructive replace-or-create operations the
//! pipeline performs on clone and copy destinations.

use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Remove `path` if it exists, leaving room for an external command to
/// create it (git refuses to clone into an existing directory).
pub fn clear_path(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)?;
    }
    Ok(())
}

/// Copy `src` recursively to `dst`, replacing `dst` wholesale if present.
/// No merging: the destination afterwards mirrors the source exactly.
pub fn replace_tree(src: &Path, dst: &Path) -> Result<()> {
    clear_path(dst)?;
    copy_tree(src, dst)
}

fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        let target = dst.join(entry.file_name());
        if path.is_dir() {
            copy_tree(&path, &target)?;
        } else {
            fs::copy(&path, &target)?;
        }
    }
    Ok(())
}
