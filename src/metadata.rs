//! `INFO` file loading.
//!
//! The file is a flat list of `key = value` lines. Keys are case-insensitive,
//! `#` starts a comment line, blank lines are ignored.

use crate::error::MetadataError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Default, Clone)]
pub struct Metadata {
    entries: HashMap<String, String>,
}

impl Metadata {
    /// Load metadata from `path`
    pub fn load(path: &Path) -> Result<Self, MetadataError> {
        if !path.exists() {
            return Err(MetadataError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(MetadataError::NotAFile(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| MetadataError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                warn!("Malformed line in INFO file: {}", line);
                continue;
            };

            let key = key.trim().to_lowercase();
            let value = value.trim();
            if key.is_empty() || value.is_empty() {
                continue;
            }

            if entries.insert(key.clone(), value.to_string()).is_some() {
                warn!("Duplicate info key \"{}\"", key);
            }
        }

        Self { entries }
    }

    /// Case-insensitive lookup; a missing key is reported and yields `None`
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_lowercase();
        match self.entries.get(&key) {
            Some(value) => Some(value.as_str()),
            None => {
                warn!("Info key \"{}\" not found", key);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The parts of the metadata that feed into release names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductInfo {
    /// Product name, lowercased with spaces replaced by hyphens
    pub name: Option<String>,
    pub version: Option<String>,
}

impl ProductInfo {
    pub fn from_metadata(metadata: &Metadata) -> Self {
        Self {
            name: metadata.get("name").map(slugify),
            version: metadata.get("version").map(str::to_string),
        }
    }
}

pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_basic() {
        let metadata = Metadata::parse("name = Foo Bar\nversion = 1.2\n");
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata.get("name"), Some("Foo Bar"));
        assert_eq!(metadata.get("version"), Some("1.2"));
    }

    #[test]
    fn test_product_info_slug_and_version() {
        let metadata = Metadata::parse("name = Foo Bar\nversion = 1.2\n");
        let product = ProductInfo::from_metadata(&metadata);
        assert_eq!(product.name.as_deref(), Some("foo-bar"));
        assert_eq!(product.version.as_deref(), Some("1.2"));
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let metadata = Metadata::parse("  NaMe =  Solitaire  \n");
        assert_eq!(metadata.get("NAME"), Some("Solitaire"));
        assert_eq!(metadata.get("name"), Some("Solitaire"));
    }

    #[test]
    fn test_split_on_first_equals() {
        let metadata = Metadata::parse("url = https://example.org/?a=b\n");
        assert_eq!(metadata.get("url"), Some("https://example.org/?a=b"));
    }

    #[test]
    fn test_skips_comments_blanks_and_malformed() {
        let metadata = Metadata::parse("# comment = ignored\n\n   \nbogus line without equals\nname = x\n");
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata.get("name"), Some("x"));
    }

    #[test]
    fn test_empty_key_or_value_ignored() {
        let metadata = Metadata::parse("= value\nkey =\n =  \n");
        assert_eq!(metadata.len(), 0);
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_duplicate_key_overwrites() {
        let metadata = Metadata::parse("version = 1\nVersion = 2\n");
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata.get("version"), Some("2"));
    }

    #[test]
    fn test_missing_key_is_none() {
        let metadata = Metadata::parse("name = x\n");
        assert_eq!(metadata.get("version"), None);
        let product = ProductInfo::from_metadata(&metadata);
        assert_eq!(product.version, None);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Metadata::load(&dir.path().join("INFO")).unwrap_err();
        assert!(matches!(err, MetadataError::NotFound(_)));
    }

    #[test]
    fn test_load_directory_is_not_a_file() {
        let dir = TempDir::new().unwrap();
        let info = dir.path().join("INFO");
        fs::create_dir(&info).unwrap();
        let err = Metadata::load(&info).unwrap_err();
        assert!(matches!(err, MetadataError::NotAFile(_)));
    }

    #[test]
    fn test_load_file() {
        let dir = TempDir::new().unwrap();
        let info = dir.path().join("INFO");
        fs::write(&info, "name = Card Sets\r\nversion = 3\r\n").unwrap();
        let metadata = Metadata::load(&info).unwrap();
        assert_eq!(metadata.get("name"), Some("Card Sets"));
        assert_eq!(metadata.get("version"), Some("3"));
    }
}
