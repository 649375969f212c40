//! Data models for catalog objects (image overrides, file aliases, bosses)

use serde::{Deserialize, Serialize};

use crate::mods::Mod;

/// Explicit image locator for one entity name.
///
/// An exact name match wins over every computed locator; the URL is
/// returned verbatim, regardless of which mod namespace was requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageOverride {
    pub name: String,
    pub url: String,
}

/// Alternate wiki file name for an entity within one mod's namespace.
///
/// Some wiki pages file an entity's artwork under a historical or variant
/// name ("Fiery Greatsword" lives at `Volcano_(old)`). The alias replaces
/// the underscored display name before percent-encoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileAlias {
    pub name: String,
    pub file: String,
    #[serde(default)]
    pub r#mod: Mod,
}

/// A ranked entity in one mod's progression table.
///
/// `order` is unique within a namespace; the total order across namespaces
/// is produced by [`crate::progression::ProgressionIndex::build`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Boss {
    pub name: String,
    #[serde(default)]
    pub r#mod: Mod,
    pub order: u32,
}

/// A catalog object - ImageOverride, FileAlias, or Boss.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CatalogObject {
    Image(ImageOverride),
    Alias(FileAlias),
    Boss(Boss),
}

/// A warning message from catalog parsing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Warning {
    pub message: String,
    pub line: usize,
}
