//! Override registry for image locators and wiki file aliases
//!
//! The registry stores the static exception tables consulted during
//! resolution: explicit locator overrides (global, exact name match) and
//! per-namespace file aliases (alternate wiki spellings). It is built once
//! at startup and read-only afterwards.

use std::collections::HashMap;

use crate::models::{FileAlias, ImageOverride};
use crate::mods::Mod;

/// Registry of name overrides, keyed the way resolution consults them.
#[derive(Debug, Clone, Default)]
pub struct OverrideRegistry {
    urls: HashMap<String, String>,
    aliases: HashMap<Mod, HashMap<String, String>>,
}

impl OverrideRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an explicit locator override.
    ///
    /// If an override with the same name already exists, it is replaced.
    pub fn register_image(&mut self, over: ImageOverride) {
        self.urls.insert(over.name, over.url);
    }

    /// Register an alternate wiki file name for one namespace.
    ///
    /// Later registrations for the same `(mod, name)` pair replace earlier
    /// ones, so external catalogs can shadow stock aliases.
    pub fn register_alias(&mut self, alias: FileAlias) {
        self.aliases.entry(alias.r#mod).or_default().insert(alias.name, alias.file);
    }

    /// Explicit locator for a name, if one was registered.
    pub fn image_url(&self, name: &str) -> Option<&str> {
        self.urls.get(name).map(String::as_str)
    }

    /// Alternate wiki file name for `(mod, name)`, if one was registered.
    pub fn alias_for(&self, game_mod: Mod, name: &str) -> Option<&str> {
        self.aliases.get(&game_mod).and_then(|table| table.get(name)).map(String::as_str)
    }

    /// True when no overrides of either kind are registered.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty() && self.aliases.is_empty()
    }
}
