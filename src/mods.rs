//! Mod namespaces and their progression priority

use serde::{Deserialize, Serialize};
use std::fmt;

/// Content namespace an entity belongs to.
///
/// Selects both the wiki base path used for image locators and the
/// priority block in the total progression order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Mod {
    /// The base game.
    #[default]
    Vanilla,
    Calamity,
    Thorium,
    /// Catch-all for namespace tags this build does not recognize.
    /// Sorts after every known namespace and resolves against the
    /// base-game image path.
    Unknown,
}

impl From<String> for Mod {
    fn from(tag: String) -> Self {
        Mod::from_tag(&tag)
    }
}

/// Progression priority for entities with no recognized namespace.
pub const UNKNOWN_PRIORITY: u32 = 99;

impl Mod {
    /// Priority block in the total progression order. Lower sorts first.
    pub fn priority(self) -> u32 {
        match self {
            Mod::Vanilla => 0,
            Mod::Calamity => 1,
            Mod::Thorium => 2,
            Mod::Unknown => UNKNOWN_PRIORITY,
        }
    }

    /// True for namespaces whose wikis use the multi-step file naming
    /// conventions the fallback ladder walks.
    pub fn has_ladder(self) -> bool {
        matches!(self, Mod::Calamity | Mod::Thorium)
    }

    /// Parse a namespace tag. Unrecognized tags map to [`Mod::Unknown`]
    /// rather than failing; resolution degrades to the base-game path.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "" | "vanilla" => Mod::Vanilla,
            "calamity" => Mod::Calamity,
            "thorium" => Mod::Thorium,
            _ => Mod::Unknown,
        }
    }

    /// Canonical lowercase tag, as written in catalog files.
    pub fn tag(self) -> &'static str {
        match self {
            Mod::Vanilla => "vanilla",
            Mod::Calamity => "calamity",
            Mod::Thorium => "thorium",
            Mod::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Mod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
