use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::SiteRevision;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Identity and storage conventions of the docset.
///
/// Defaults describe the Laravel Zero docset; a RON file only needs the
/// fields it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsetConfig {
    pub code: String,
    pub name: String,
    /// Host of the documented site, without scheme.
    pub url: String,
    /// Designated index page, relative to `url`.
    pub index: String,
    pub playground: String,
    pub icon_16: String,
    pub icon_32: String,
    pub external_domains: Vec<String>,
    /// Pins the markup revision instead of detecting it per page.
    pub revision: Option<SiteRevision>,
}

impl Default for DocsetConfig {
    fn default() -> Self {
        Self {
            code: "laravel-zero".to_string(),
            name: "Laravel Zero".to_string(),
            url: "laravel-zero.com".to_string(),
            index: "docs/introduction.html".to_string(),
            playground: String::new(),
            icon_16: "../../icons/icon.png".to_string(),
            icon_32: "../../icons/icon@2x.png".to_string(),
            external_domains: vec![
                "raw.githubusercontent.com".to_string(),
                "googleapis.com".to_string(),
            ],
            revision: None,
        }
    }
}

impl DocsetConfig {
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: DocsetConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())
            .map_err(|err| ConfigError::Invalid(err.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("code", &self.code), ("url", &self.url), ("index", &self.index)] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("`{field}` must not be empty")));
            }
        }
        let parsed = Url::parse(&format!("https://{}/", self.url))
            .map_err(|err| ConfigError::Invalid(format!("`url` {:?}: {err}", self.url)))?;
        if parsed.host_str().is_none() {
            return Err(ConfigError::Invalid(format!("`url` {:?} has no host", self.url)));
        }
        Ok(())
    }

    pub fn downloaded_directory(&self) -> String {
        format!("{}/downloaded", self.code)
    }

    pub fn docset_file(&self) -> String {
        format!("{code}/{code}.docset", code = self.code)
    }

    /// Storage root of the docset's documents; stored page paths are rewritten
    /// relative to it.
    pub fn inner_directory(&self) -> String {
        format!("{}/Contents/Resources/Documents", self.docset_file())
    }

    pub fn downloaded_index(&self) -> String {
        format!("{}/{}/{}", self.downloaded_directory(), self.url, self.index)
    }

    pub fn inner_index(&self) -> String {
        format!("{}/{}/{}", self.inner_directory(), self.url, self.index)
    }

    pub fn database_file(&self) -> String {
        format!("{}/Contents/Resources/docSet.dsidx", self.docset_file())
    }
}
