use crate::config::{Config, ReleasePaths};
use crate::discovery::{discover, Candidate};
use crate::metadata::{Metadata, ProductInfo};
use crate::release::{
    check_release_dir, create_release_dir, remove_stale, stage, write_zip, ArchiveName,
    ArchiveNamer, WorkingDir,
};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

pub fn execute(config: &Config, paths: &ReleasePaths, dry_run: bool) -> anyhow::Result<()> {
    debug!("Loading metadata from {:?}", paths.info);
    let metadata = Metadata::load(&paths.info)?;
    if metadata.is_empty() {
        warn!("{:?} has no entries", paths.info);
    } else {
        debug!("Loaded {} metadata keys", metadata.len());
    }

    let product = ProductInfo::from_metadata(&metadata);
    let namer = ArchiveNamer::new(config, product.version.as_deref());

    check_release_dir(&paths.release)?;
    let candidates = discover(paths, &product)?;

    if dry_run {
        info!("DRY RUN - nothing will be staged or archived");
        print_plan(paths, &candidates, &namer);
        return Ok(());
    }

    create_release_dir(&paths.release)?;
    for candidate in &candidates {
        stage(candidate, &paths.release)?;
    }

    let written = archive_all(paths, &candidates, &namer)?;
    info!("Packaged {} releases into {:?}", written, paths.release);
    Ok(())
}

/// Zip every staged candidate from inside the release directory and remove
/// the staged copy afterwards.
fn archive_all(
    paths: &ReleasePaths,
    candidates: &[Candidate],
    namer: &ArchiveNamer,
) -> anyhow::Result<usize> {
    let _cwd = WorkingDir::enter(&paths.release)?;
    let mut written = 0;

    for candidate in candidates {
        let staged = Path::new(&candidate.name);
        if !staged.is_dir() {
            warn!("Missing release: {}", candidate.name);
            continue;
        }

        let name = namer.name(&candidate.name);
        println!("Creating release: {}", name.display);

        let archive = name.file_name();
        let archive = Path::new(&archive);
        if remove_stale(archive)? {
            debug!("Removed previous {:?}", archive);
        }

        write_zip(staged, &candidate.name, archive)?;
        fs::remove_dir_all(staged)?;
        written += 1;
    }

    Ok(written)
}

fn print_plan(paths: &ReleasePaths, candidates: &[Candidate], namer: &ArchiveNamer) {
    println!("\n=== Release Plan ===\n");
    println!("Root: {:?}", paths.root);
    println!("Release dir: {:?}", paths.release);

    println!("\nReleases:");
    for candidate in candidates {
        let name: ArchiveName = namer.name(&candidate.name);
        println!(
            "  - {} ({}: {:?}) -> {}",
            candidate.name,
            candidate.kind,
            candidate.source,
            name.file_name()
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::CandidateSource;
    use crate::release::CWD_LOCK;
    use std::env;
    use tempfile::TempDir;

    fn candidate(paths: &ReleasePaths, name: &str) -> Candidate {
        Candidate {
            name: name.to_string(),
            source: paths.collection.join(name),
            kind: CandidateSource::Collection,
        }
    }

    #[test]
    fn test_archive_all_restores_working_directory() {
        let _lock = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = TempDir::new().unwrap();
        let config = Config::default();
        let paths = config.paths(dir.path()).unwrap();
        fs::create_dir_all(paths.release.join("A")).unwrap();
        fs::write(paths.release.join("A").join("f.txt"), "a").unwrap();
        let namer = ArchiveNamer::new(&config, Some("3"));
        let before = env::current_dir().unwrap();

        // "B" was never staged and is skipped
        let candidates = [candidate(&paths, "A"), candidate(&paths, "B")];
        let written = archive_all(&paths, &candidates, &namer).unwrap();

        assert_eq!(written, 1);
        assert_eq!(env::current_dir().unwrap(), before);
        assert!(paths.release.join("A-3.zip").is_file());
        assert!(!paths.release.join("A").exists());
        assert!(!paths.release.join("B-3.zip").exists());
    }

    #[test]
    fn test_archive_all_restores_working_directory_on_error() {
        let _lock = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = TempDir::new().unwrap();
        let config = Config::default();
        let paths = config.paths(dir.path()).unwrap();
        fs::create_dir_all(paths.release.join("A")).unwrap();
        // A directory where the archive should go cannot be replaced
        fs::create_dir_all(paths.release.join("A.zip").join("x")).unwrap();
        let namer = ArchiveNamer::new(&config, None);
        let before = env::current_dir().unwrap();

        let result = archive_all(&paths, &[candidate(&paths, "A")], &namer);

        assert!(result.is_err());
        assert_eq!(env::current_dir().unwrap(), before);
    }
}
