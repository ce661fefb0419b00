use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    /// A subdirectory of the collection directory
    Collection,
    /// The raster image source tree
    Raster,
    /// The vector image source tree
    Vector,
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateSource::Collection => write!(f, "collection"),
            CandidateSource::Raster => write!(f, "raster source"),
            CandidateSource::Vector => write!(f, "vector source"),
        }
    }
}

/// One packageable unit, staged and archived under `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub source: PathBuf,
    pub kind: CandidateSource,
}

impl Candidate {
    pub fn collection(name: String, source: PathBuf) -> Self {
        Self {
            name,
            source,
            kind: CandidateSource::Collection,
        }
    }

    /// Raster source tree, released under the product name
    pub fn raster(product: &str, source: PathBuf) -> Self {
        Self {
            name: product.to_string(),
            source,
            kind: CandidateSource::Raster,
        }
    }

    /// Vector source tree, released as `<product>-svg`
    pub fn vector(product: &str, source: PathBuf) -> Self {
        Self {
            name: format!("{}-svg", product),
            source,
            kind: CandidateSource::Vector,
        }
    }
}
