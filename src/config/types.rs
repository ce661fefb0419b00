use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

/// On-disk layout and naming rules, all relative to the layout root.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_collection_dir")]
    pub collection_dir: PathBuf,

    #[serde(default = "default_release_dir")]
    pub release_dir: PathBuf,

    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Raster sources, relative to `source_dir`
    #[serde(default = "default_raster_dir")]
    pub raster_dir: PathBuf,

    /// Vector sources, relative to `source_dir`
    #[serde(default = "default_vector_dir")]
    pub vector_dir: PathBuf,

    #[serde(default = "default_info_file")]
    pub info_file: PathBuf,

    #[serde(default = "default_cardset_prefix")]
    pub cardset_prefix: String,

    #[serde(default = "default_product_tag")]
    pub product_tag: String,

    #[serde(default)]
    pub naming: NamingScheme,
}

/// How archive names are derived from candidate names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingScheme {
    /// Tag cardsets, version everything
    #[default]
    Standard,
    /// Tag and version cardsets only, then re-tag anything still starting
    /// with the cardset prefix
    Legacy,
}

/// Absolute paths resolved from a [`Config`] against the layout root.
#[derive(Debug, Clone)]
pub struct ReleasePaths {
    pub root: PathBuf,
    pub collection: PathBuf,
    pub release: PathBuf,
    pub source: PathBuf,
    pub raster: PathBuf,
    pub vector: PathBuf,
    pub info: PathBuf,
}
