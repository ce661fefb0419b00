use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Root directory '{path}' is not accessible: {source}")]
    Root {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("\"{}\" file does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("\"{}\" is not a regular file", .0.display())]
    NotAFile(PathBuf),

    #[error("Failed to read \"{path}\": {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Cannot create release, \"{}\" directory does not exist", .0.display())]
    MissingCollection(PathBuf),

    #[error("No releases in \"{}\" or \"{}\" directories", .collection.display(), .source_dir.display())]
    NoReleases {
        collection: PathBuf,
        source_dir: PathBuf,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum StagingError {
    #[error("Cannot create \"{}\" directory, file exists with same name", .0.display())]
    ReleasePathIsFile(PathBuf),

    #[error("Failed to walk '{path}': {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to copy '{from}' to '{to}': {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Failed to walk '{path}': {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Failed to write archive '{path}': {source}")]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
