use crate::discovery::Candidate;
use crate::error::StagingError;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;
use walkdir::WalkDir;

/// Fail if something other than a directory sits at the release path
pub fn check_release_dir(release_dir: &Path) -> Result<(), StagingError> {
    if release_dir.exists() && !release_dir.is_dir() {
        return Err(StagingError::ReleasePathIsFile(release_dir.to_path_buf()));
    }
    Ok(())
}

pub fn create_release_dir(release_dir: &Path) -> Result<(), StagingError> {
    check_release_dir(release_dir)?;
    if !release_dir.is_dir() {
        debug!("Creating {:?}", release_dir);
        fs::create_dir_all(release_dir)?;
    }
    Ok(())
}

/// Copy a candidate into `release_dir/<name>`, replacing whatever was there
pub fn stage(candidate: &Candidate, release_dir: &Path) -> Result<PathBuf, StagingError> {
    let target = release_dir.join(&candidate.name);

    if target.is_dir() {
        fs::remove_dir_all(&target)?;
    } else if target.exists() || target.is_symlink() {
        fs::remove_file(&target)?;
    }

    debug!("Staging {:?} -> {:?}", candidate.source, target);
    copy_tree(&candidate.source, &target)?;
    Ok(target)
}

/// Recursively copy `src` to `dst`, following symlinks and keeping
/// modification times
pub fn copy_tree(src: &Path, dst: &Path) -> Result<(), StagingError> {
    // Directory times are applied once their contents are in place
    let mut dirs = Vec::new();

    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(|e| StagingError::Walk {
            path: src.to_path_buf(),
            source: e,
        })?;

        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(rel);
        let modified = entry
            .metadata()
            .map_err(|e| StagingError::Walk {
                path: entry.path().to_path_buf(),
                source: e,
            })?
            .modified()?;

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
            dirs.push((target, modified));
        } else {
            fs::copy(entry.path(), &target).map_err(|e| StagingError::Copy {
                from: entry.path().to_path_buf(),
                to: target.clone(),
                source: e,
            })?;
            set_modified(&target, modified, false)?;
        }
    }

    for (dir, modified) in dirs.iter().rev() {
        set_modified(dir, *modified, true)?;
    }
    Ok(())
}

#[cfg(unix)]
fn set_modified(path: &Path, modified: SystemTime, _is_dir: bool) -> io::Result<()> {
    // Owners may set explicit times through a read-only descriptor
    File::open(path)?.set_modified(modified)
}

#[cfg(not(unix))]
fn set_modified(path: &Path, modified: SystemTime, is_dir: bool) -> io::Result<()> {
    if is_dir {
        return Ok(());
    }
    File::options()
        .write(true)
        .open(path)?
        .set_modified(modified)
}
