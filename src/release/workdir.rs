use std::env;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Switches the process working directory for as long as it is held.
///
/// The previous directory is restored on drop, including early returns and
/// error propagation out of the holding scope.
#[derive(Debug)]
pub struct WorkingDir {
    previous: PathBuf,
}

impl WorkingDir {
    pub fn enter(dir: &Path) -> io::Result<Self> {
        let previous = env::current_dir()?;
        env::set_current_dir(dir)?;
        debug!("Entered {:?}", dir);
        Ok(Self { previous })
    }
}

impl Drop for WorkingDir {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            warn!("Failed to restore working directory {:?}: {}", self.previous, e);
        }
    }
}

/// Serializes tests that move the process working directory
#[cfg(test)]
pub static CWD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_restores_previous_directory() {
        let _lock = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = TempDir::new().unwrap();
        let target = dir.path().canonicalize().unwrap();
        let before = env::current_dir().unwrap();

        {
            let _guard = WorkingDir::enter(&target).unwrap();
            assert_eq!(env::current_dir().unwrap(), target);
        }

        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    fn test_enter_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        assert!(WorkingDir::enter(&dir.path().join("missing")).is_err());
    }
}
