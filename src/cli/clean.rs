use crate::config::ReleasePaths;
use std::fs;
use std::io::ErrorKind;
use tracing::warn;

pub fn execute(paths: &ReleasePaths) -> anyhow::Result<()> {
    if !paths.release.is_dir() {
        println!("Nothing to do.");
        return Ok(());
    }

    println!("Cleaning ...");
    match fs::remove_dir_all(&paths.release) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            warn!(
                "{:?} directory could not be removed, check if it is locked by another process.",
                paths.release
            );
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!(
            "Failed to remove {:?}: {}",
            paths.release,
            e
        )),
    }
}
