mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;
use tracing::debug;

impl Default for Config {
    fn default() -> Self {
        Self {
            collection_dir: default_collection_dir(),
            release_dir: default_release_dir(),
            source_dir: default_source_dir(),
            raster_dir: default_raster_dir(),
            vector_dir: default_vector_dir(),
            info_file: default_info_file(),
            cardset_prefix: default_cardset_prefix(),
            product_tag: default_product_tag(),
            naming: NamingScheme::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load the explicitly named config, or `<root>/cardpack.yaml` if it
    /// exists, or fall back to the built-in layout.
    pub fn load_or_default(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!("Loading config from {:?}", path);
            return Self::load(path);
        }

        let path = root.join(default_config_file());
        if path.is_file() {
            debug!("Loading config from {:?}", path);
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve every layout entry against `root`
    pub fn paths(&self, root: &Path) -> Result<ReleasePaths, ConfigError> {
        let root = root.canonicalize().map_err(|e| ConfigError::Root {
            path: root.to_path_buf(),
            source: e,
        })?;
        let source = root.join(&self.source_dir);

        Ok(ReleasePaths {
            collection: root.join(&self.collection_dir),
            release: root.join(&self.release_dir),
            raster: source.join(&self.raster_dir),
            vector: source.join(&self.vector_dir),
            info: root.join(&self.info_file),
            source,
            root,
        })
    }
}
