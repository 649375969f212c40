//! Wiki image locator resolution and the fallback ladder
//!
//! Resolution is a pure function of the entity name, the mod namespace,
//! and the static override tables: no network I/O happens here. The
//! caller issues the actual image request; when a locator fails to load
//! it advances a [`FallbackAttempt`] through [`ImageResolver::next_fallback`]
//! until the terminal placeholder is produced.

use crate::config::Sources;
use crate::mods::Mod;
use crate::placeholder::placeholder;
use crate::registry::OverrideRegistry;

const PNG_EXT: &str = ".png";
const GIF_EXT: &str = ".gif";

/// Suffix for wiki pages that file a boss's artwork under its item variant.
const ITEM_SUFFIX: &str = "_(item)";

/// Stage after which every further attempt yields the placeholder.
pub const TERMINAL_STAGE: u8 = 4;

/// Pixel size of placeholders produced by the fallback ladder.
pub const LADDER_PLACEHOLDER_SIZE: u32 = 40;

/// Transient per-display attempt state for the fallback ladder.
///
/// Created when an image is first requested, advanced once per failed
/// load, and discarded when the image loads or the terminal placeholder
/// renders. Owned by a single display instance; never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackAttempt {
    name: String,
    game_mod: Mod,
    stage: u8,
}

impl FallbackAttempt {
    /// Start an attempt at stage 0.
    pub fn new(name: &str, game_mod: Mod) -> Self {
        Self { name: name.to_string(), game_mod, stage: 0 }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn game_mod(&self) -> Mod {
        self.game_mod
    }

    /// Current stage, `0..=TERMINAL_STAGE`.
    pub fn stage(&self) -> u8 {
        self.stage
    }

    /// True once the attempt has produced the generated placeholder.
    /// Callers stop retrying here.
    pub fn is_terminal(&self) -> bool {
        self.stage >= TERMINAL_STAGE
    }

    fn advanced(&self) -> Self {
        Self {
            name: self.name.clone(),
            game_mod: self.game_mod,
            stage: (self.stage + 1).min(TERMINAL_STAGE),
        }
    }

    fn terminal(&self) -> Self {
        Self { name: self.name.clone(), game_mod: self.game_mod, stage: TERMINAL_STAGE }
    }
}

/// Resolves entity names to wiki image locators.
///
/// Holds the injected override tables and base paths; both are read-only
/// after construction, so a resolver is safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct ImageResolver {
    sources: Sources,
    overrides: OverrideRegistry,
}

impl ImageResolver {
    pub fn new(sources: Sources, overrides: OverrideRegistry) -> Self {
        Self { sources, overrides }
    }

    /// Primary image locator for an entity.
    ///
    /// An explicit locator override wins outright and is returned
    /// verbatim. Otherwise the display name is underscored, replaced by
    /// its per-namespace file alias when one exists, percent-encoded, and
    /// appended to the namespace's base path.
    ///
    /// Total: any string resolves to some locator, whether or not the
    /// remote file exists. Checking that is the caller's job, via the
    /// fallback ladder.
    pub fn resolve(&self, name: &str, game_mod: Mod) -> String {
        if let Some(url) = self.overrides.image_url(name) {
            return url.to_string();
        }
        let file = match self.overrides.alias_for(game_mod, name) {
            Some(alias) => alias.to_string(),
            None => wiki_file_name(name),
        };
        format!("{}{}{}", self.sources.base_for(game_mod), percent_encode(&file), PNG_EXT)
    }

    /// Next locator to try after the previous one failed to load.
    ///
    /// For modded namespaces the ladder walks four renaming conventions
    /// before giving up; base-game and unrecognized namespaces have no
    /// alternate conventions and jump straight to the placeholder:
    ///
    /// | stage | file name | extension |
    /// |-------|-----------|-----------|
    /// | 0 | alphanumerics only | `.png` |
    /// | 1 | underscored + `_(item)` | `.png` |
    /// | 2 | underscored | `.gif` |
    /// | 3 | underscored, lowercase | `.png` |
    /// | 4 | generated placeholder | data URI |
    ///
    /// The returned state is advanced by one stage and clamps at the
    /// terminal stage: calling this with a terminal state yields the
    /// placeholder again, never a panic or a loop.
    pub fn next_fallback(&self, attempt: &FallbackAttempt) -> (String, FallbackAttempt) {
        if !attempt.game_mod.has_ladder() || attempt.is_terminal() {
            return (
                placeholder(&attempt.name, LADDER_PLACEHOLDER_SIZE),
                attempt.terminal(),
            );
        }

        let base = self.sources.base_for(attempt.game_mod);
        let underscored = wiki_file_name(&attempt.name);
        let locator = match attempt.stage {
            0 => format!("{}{}{}", base, percent_encode(&strip_symbols(&attempt.name)), PNG_EXT),
            1 => {
                let item = format!("{}{}", underscored, ITEM_SUFFIX);
                format!("{}{}{}", base, percent_encode(&item), PNG_EXT)
            }
            2 => format!("{}{}{}", base, percent_encode(&underscored), GIF_EXT),
            _ => format!("{}{}{}", base, percent_encode(&underscored.to_lowercase()), PNG_EXT),
        };
        (locator, attempt.advanced())
    }

    /// Every locator the ladder would try for an entity, in order: the
    /// primary locator, each fallback rung, and finally the placeholder.
    pub fn fallback_chain(&self, name: &str, game_mod: Mod) -> Vec<String> {
        let mut chain = vec![self.resolve(name, game_mod)];
        let mut attempt = FallbackAttempt::new(name, game_mod);
        loop {
            let exhausted = attempt.is_terminal() || !game_mod.has_ladder();
            let (locator, next) = self.next_fallback(&attempt);
            chain.push(locator);
            attempt = next;
            if exhausted {
                return chain;
            }
        }
    }
}

/// Display name to wiki file name: trimmed, interior spaces underscored.
pub fn wiki_file_name(name: &str) -> String {
    name.trim().replace(' ', "_")
}

/// Strip everything but ASCII alphanumerics.
fn strip_symbols(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Percent-encode a wiki file name for use in a locator.
///
/// Keeps the RFC 3986 unreserved set (`A-Z a-z 0-9 - _ . ~`) and encodes
/// every other byte, UTF-8 bytes included, as uppercase `%XX`.
pub fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => {
                out.push('%');
                out.push(hex_digit(b >> 4));
                out.push(hex_digit(b & 0x0F));
            }
        }
    }
    out
}

/// Nibble to an uppercase hex digit (0-15 in, '0'-'F' out).
fn hex_digit(n: u8) -> char {
    if n < 10 {
        char::from(b'0' + n)
    } else {
        char::from(b'A' + n - 10)
    }
}
