mod candidate;

pub use candidate::{Candidate, CandidateSource};

use crate::config::ReleasePaths;
use crate::error::DiscoveryError;
use crate::metadata::ProductInfo;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Discover every release candidate: the collection subdirectories followed
/// by the raster and vector source trees, when present.
pub fn discover(
    paths: &ReleasePaths,
    product: &ProductInfo,
) -> Result<Vec<Candidate>, DiscoveryError> {
    if !paths.collection.is_dir() {
        return Err(DiscoveryError::MissingCollection(paths.collection.clone()));
    }

    let mut candidates = collection_candidates(&paths.collection)?;
    debug!(
        "Found {} releases in {:?}",
        candidates.len(),
        paths.collection
    );

    let sources: [(fn(&str, PathBuf) -> Candidate, &PathBuf); 2] = [
        (Candidate::raster, &paths.raster),
        (Candidate::vector, &paths.vector),
    ];
    for (make, dir) in sources {
        if !dir.is_dir() {
            continue;
        }

        let Some(ref name) = product.name else {
            warn!("Skipping source release {:?}, product name is not set", dir);
            continue;
        };

        let candidate = make(name, dir.to_path_buf());
        if candidates.iter().any(|c| c.name == candidate.name) {
            warn!(
                "Source release \"{}\" has the same name as a collection release",
                candidate.name
            );
        }
        candidates.push(candidate);
    }

    if candidates.is_empty() {
        return Err(DiscoveryError::NoReleases {
            collection: paths.collection.clone(),
            source_dir: paths.source.clone(),
        });
    }

    Ok(candidates)
}

fn collection_candidates(collection: &Path) -> Result<Vec<Candidate>, DiscoveryError> {
    let mut candidates = Vec::new();

    for entry in fs::read_dir(collection)? {
        let entry = entry?;
        let path = entry.path();

        // Follows symlinks, so linked sets count as releases
        if !path.is_dir() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => candidates.push(Candidate::collection(name, path)),
            Err(name) => warn!("Skipping release with non UTF-8 name: {:?}", name),
        }
    }

    candidates.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(candidates)
}
