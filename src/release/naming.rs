use crate::config::{Config, NamingScheme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveName {
    /// Name reported to the user
    pub display: String,
    /// File name without the `.zip` extension
    pub stem: String,
}

impl ArchiveName {
    pub fn file_name(&self) -> String {
        format!("{}.zip", self.stem)
    }
}

/// Derives archive names from candidate names.
#[derive(Debug, Clone)]
pub struct ArchiveNamer {
    prefix: String,
    tag: String,
    version: Option<String>,
    scheme: NamingScheme,
}

impl ArchiveNamer {
    pub fn new(config: &Config, version: Option<&str>) -> Self {
        Self {
            prefix: config.cardset_prefix.clone(),
            tag: config.product_tag.clone(),
            version: version.map(str::to_string),
            scheme: config.naming,
        }
    }

    pub fn name(&self, candidate: &str) -> ArchiveName {
        match self.scheme {
            NamingScheme::Standard => {
                let mut stem = self.tagged(candidate);
                if let Some(ref version) = self.version {
                    stem = format!("{}-{}", stem, version);
                }
                ArchiveName {
                    display: stem.clone(),
                    stem,
                }
            }
            NamingScheme::Legacy => {
                let mut display = candidate.to_string();
                if candidate.starts_with(&self.prefix) {
                    display = self.tagged(candidate);
                    if let Some(ref version) = self.version {
                        display = format!("{}-{}", display, version);
                    }
                }
                // Second pass over the already derived name
                let stem = self.tagged(&display);
                ArchiveName { display, stem }
            }
        }
    }

    fn tagged(&self, name: &str) -> String {
        if name.starts_with(&self.prefix) {
            format!("{}-{}", self.tag, name)
        } else {
            name.to_string()
        }
    }
}
