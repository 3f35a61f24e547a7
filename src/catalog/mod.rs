//! Read-only template catalogs, one per generator.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;


#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate template id: {0}")]
    DuplicateId(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Text,
    Image,
    Video,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Text, Domain::Image, Domain::Video];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Text => "text",
            Domain::Image => "image",
            Domain::Video => "video",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry pairing scoring keywords with a reusable prompt text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// May contain `[KEY]` or `{KEY}` placeholders.
    #[serde(alias = "prompt")]
    pub template: String,
    /// Missing or `null` keywords mean the template never scores.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: Vec<String>,
    #[serde(rename = "defaultLLM", default, skip_serializing_if = "Option::is_none")]
    pub default_llm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tone: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    templates: Vec<Template>,
}

impl Catalog {
    pub fn new(templates: Vec<Template>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(templates.len());
        for template in &templates {
            if !seen.insert(template.id.as_str()) {
                return Err(CatalogError::DuplicateId(template.id.clone()));
            }
        }
        Ok(Self { templates })
    }

    /// Parses a JSON array of templates.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let templates: Vec<Template> = serde_json::from_str(json)?;
        Self::new(templates)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), templates = catalog.len(), "loaded template catalog");
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    pub fn as_slice(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Where each domain's catalog lives on disk. Missing entries fall back to
/// the bundled catalog.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogPaths {
    pub text: Option<PathBuf>,
    pub image: Option<PathBuf>,
    pub video: Option<PathBuf>,
}

impl CatalogPaths {
    pub fn get(&self, domain: Domain) -> Option<&Path> {
        match domain {
            Domain::Text => self.text.as_deref(),
            Domain::Image => self.image.as_deref(),
            Domain::Video => self.video.as_deref(),
        }
    }
}

const BUILTIN_TEXT: &str = include_str!("../../data/templates/text.json");
const BUILTIN_IMAGE: &str = include_str!("../../data/templates/image.json");
const BUILTIN_VIDEO: &str = include_str!("../../data/templates/video.json");

/// The three independent catalogs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSet {
    pub text: Catalog,
    pub image: Catalog,
    pub video: Catalog,
}

impl CatalogSet {
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self {
            text: Catalog::from_json_str(BUILTIN_TEXT)?,
            image: Catalog::from_json_str(BUILTIN_IMAGE)?,
            video: Catalog::from_json_str(BUILTIN_VIDEO)?,
        })
    }

    pub fn load(paths: &CatalogPaths) -> Result<Self, CatalogError> {
        let mut set = Self::builtin()?;
        for domain in Domain::ALL {
            if let Some(path) = paths.get(domain) {
                *set.get_mut(domain) = Catalog::from_path(path)?;
            }
        }
        Ok(set)
    }

    pub fn get(&self, domain: Domain) -> &Catalog {
        match domain {
            Domain::Text => &self.text,
            Domain::Image => &self.image,
            Domain::Video => &self.video,
        }
    }

    fn get_mut(&mut self, domain: Domain) -> &mut Catalog {
        match domain {
            Domain::Text => &mut self.text,
            Domain::Image => &mut self.image,
            Domain::Video => &mut self.video,
        }
    }
}
