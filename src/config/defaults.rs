use std::path::PathBuf;

pub fn default_collection_dir() -> PathBuf {
    PathBuf::from("PySol")
}

pub fn default_release_dir() -> PathBuf {
    PathBuf::from("release")
}

pub fn default_source_dir() -> PathBuf {
    PathBuf::from("source")
}

pub fn default_raster_dir() -> PathBuf {
    PathBuf::from("PNG")
}

pub fn default_vector_dir() -> PathBuf {
    PathBuf::from("SVG")
}

pub fn default_info_file() -> PathBuf {
    PathBuf::from("INFO")
}

pub fn default_cardset_prefix() -> String {
    "cardset".to_string()
}

pub fn default_product_tag() -> String {
    "pysol".to_string()
}

pub fn default_config_file() -> PathBuf {
    PathBuf::from("cardpack.yaml")
}
