// links.rs - 创建目标目录和符号链接

use crate::error::SortError;
use crate::layout::{Bucket, LinkOp};
use std::fs;
use std::io;
use std::path::Path;

/// Create the three bucket directories under `root` if they are missing.
/// Existing directories and their contents are left alone.
pub fn prepare_target_dirs(root: &Path) -> Result<(), SortError> {
    for bucket in Bucket::ALL {
        let dir = root.join(bucket.dir());
        if dir.exists() {
            log::debug!("Directory already present: {}", dir.display());
            continue;
        }
        fs::create_dir_all(&dir).map_err(|source| SortError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        log::debug!("Created directory: {}", dir.display());
    }
    Ok(())
}

/// Create one symlink per operation, in order. Stops at the first failure;
/// links created before it are kept.
pub fn create_links(root: &Path, ops: &[LinkOp]) -> Result<(), SortError> {
    for op in ops {
        let destination = root.join(&op.destination);
        symlink(&op.source, &destination).map_err(|source| SortError::Link {
            source_path: op.source.clone(),
            destination: destination.clone(),
            source,
        })?;
        log::info!("Linked {} -> {}", destination.display(), op.source);
    }
    Ok(())
}

pub fn execute(root: &Path, ops: &[LinkOp]) -> Result<(), SortError> {
    prepare_target_dirs(root)?;
    create_links(root, ops)
}

#[cfg(unix)]
fn symlink(source: &str, destination: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(source, destination)
}

#[cfg(windows)]
fn symlink(source: &str, destination: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(source, destination)
}
