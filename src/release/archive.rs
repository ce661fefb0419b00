use crate::error::ArchiveError;
use chrono::{DateTime, Datelike, Local, Timelike};
use std::fs::{self, File, Metadata};
use std::io;
use std::path::{Component, Path};
use tempfile::Builder;
use tracing::debug;
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Zip `staged` into `dest`, rooting every entry under `root_name/`.
///
/// The archive is written next to `dest` under a temporary name and moved
/// into place once complete. Returns the number of entries written.
pub fn write_zip(staged: &Path, root_name: &str, dest: &Path) -> Result<usize, ArchiveError> {
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = Builder::new()
        .prefix(".cardpack-")
        .suffix(".zip.part")
        .tempfile_in(parent)?;

    let mut zip = ZipWriter::new(tmp.as_file_mut());
    let mut entries = 0;

    for entry in WalkDir::new(staged)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| ArchiveError::Walk {
            path: staged.to_path_buf(),
            source: e,
        })?;

        let rel = entry.path().strip_prefix(staged).unwrap_or(entry.path());
        let name = entry_name(root_name, rel);
        let metadata = entry.metadata().map_err(|e| ArchiveError::Walk {
            path: entry.path().to_path_buf(),
            source: e,
        })?;
        let options = entry_options(&metadata);

        if entry.file_type().is_dir() {
            zip.add_directory(format!("{}/", name), options)?;
        } else {
            zip.start_file(name, options)?;
            let mut file = File::open(entry.path())?;
            io::copy(&mut file, &mut zip)?;
        }
        entries += 1;
    }

    zip.finish()?;
    drop(zip);

    tmp.persist(dest).map_err(|e| ArchiveError::Persist {
        path: dest.to_path_buf(),
        source: e.error,
    })?;

    debug!("Wrote {} entries to {:?}", entries, dest);
    Ok(entries)
}

/// Remove a previous archive of the same name, if any
pub fn remove_stale(archive: &Path) -> io::Result<bool> {
    if archive.is_file() {
        fs::remove_file(archive)?;
        return Ok(true);
    }
    Ok(false)
}

fn entry_name(root_name: &str, rel: &Path) -> String {
    let mut name = root_name.to_string();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            name.push('/');
            name.push_str(&part.to_string_lossy());
        }
    }
    name
}

fn entry_options(metadata: &Metadata) -> FileOptions {
    let mut options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    if let Ok(modified) = metadata.modified() {
        let local: DateTime<Local> = modified.into();
        // Zip timestamps cannot represent dates before 1980
        if let Ok(time) = zip::DateTime::from_date_and_time(
            local.year().clamp(0, u16::MAX as i32) as u16,
            local.month() as u8,
            local.day() as u8,
            local.hour() as u8,
            local.minute() as u8,
            local.second() as u8,
        ) {
            options = options.last_modified_time(time);
        }
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        options = options.unix_permissions(metadata.permissions().mode());
    }

    options
}
