//! Built-in boss progression tables.
//!
//! Ships the stock progression for the base game and the two supported
//! content mods so rank lookups work with no external catalog files.
//! External catalogs are loaded after these and can add entries but not
//! remove them.

use crate::models::Boss;
use crate::mods::Mod;

fn boss(name: &str, game_mod: Mod, order: u32) -> Boss {
    Boss { name: name.to_string(), r#mod: game_mod, order }
}

/// Base-game bosses in progression order.
pub fn vanilla() -> Vec<Boss> {
    vec![
        boss("King Slime", Mod::Vanilla, 1),
        boss("Eye of Cthulhu", Mod::Vanilla, 2),
        boss("The Eater of Worlds", Mod::Vanilla, 3),
        boss("Brain of Cthulhu", Mod::Vanilla, 4),
        boss("Queen Bee", Mod::Vanilla, 5),
        boss("Skeletron", Mod::Vanilla, 6),
        boss("Deerclops", Mod::Vanilla, 7),
        boss("Wall of Flesh", Mod::Vanilla, 8),
        boss("Queen Slime", Mod::Vanilla, 9),
        boss("The Twins", Mod::Vanilla, 10),
        boss("The Destroyer", Mod::Vanilla, 11),
        boss("Skeletron Prime", Mod::Vanilla, 12),
        boss("Plantera", Mod::Vanilla, 13),
        boss("Golem", Mod::Vanilla, 14),
        boss("Duke Fishron", Mod::Vanilla, 15),
        boss("Empress of Light", Mod::Vanilla, 16),
        boss("Lunatic Cultist", Mod::Vanilla, 17),
        boss("Moon Lord", Mod::Vanilla, 18),
    ]
}

/// Calamity bosses in progression order.
pub fn calamity() -> Vec<Boss> {
    vec![
        boss("Desert Scourge", Mod::Calamity, 1),
        boss("Crabulon", Mod::Calamity, 2),
        boss("The Hive Mind", Mod::Calamity, 3),
        boss("The Perforators", Mod::Calamity, 4),
        boss("The Slime God", Mod::Calamity, 5),
        boss("Cryogen", Mod::Calamity, 6),
        boss("Aquatic Scourge", Mod::Calamity, 7),
        boss("Brimstone Elemental", Mod::Calamity, 8),
        boss("Calamitas Clone", Mod::Calamity, 9),
        boss("Leviathan and Anahita", Mod::Calamity, 10),
        boss("Astrum Aureus", Mod::Calamity, 11),
        boss("The Plaguebringer Goliath", Mod::Calamity, 12),
        boss("Ravager", Mod::Calamity, 13),
        boss("Astrum Deus", Mod::Calamity, 14),
        boss("Profaned Guardians", Mod::Calamity, 15),
        boss("Providence, the Profaned Goddess", Mod::Calamity, 16),
        boss("Storm Weaver", Mod::Calamity, 17),
        boss("Ceaseless Void", Mod::Calamity, 18),
        boss("Signus, Envoy of the Devourer", Mod::Calamity, 19),
        boss("Polterghast", Mod::Calamity, 20),
        boss("The Old Duke", Mod::Calamity, 21),
        boss("The Devourer of Gods", Mod::Calamity, 22),
        boss("Yharon, Dragon of Rebirth", Mod::Calamity, 23),
        boss("Exo Mechs", Mod::Calamity, 24),
        boss("Supreme Witch, Calamitas", Mod::Calamity, 25),
    ]
}

/// Thorium bosses in progression order.
pub fn thorium() -> Vec<Boss> {
    vec![
        boss("The Grand Thunder Bird", Mod::Thorium, 1),
        boss("The Queen Jellyfish", Mod::Thorium, 2),
        boss("Viscount", Mod::Thorium, 3),
        boss("Granite Energy Storm", Mod::Thorium, 4),
        boss("The Buried Champion", Mod::Thorium, 5),
        boss("The Star Scouter", Mod::Thorium, 6),
        boss("Borean Strider", Mod::Thorium, 7),
        boss("Coznix, The Fallen Beholder", Mod::Thorium, 8),
        boss("The Lich", Mod::Thorium, 9),
        boss("Abyssion, The Forgotten One", Mod::Thorium, 10),
        boss("The Primordials", Mod::Thorium, 11),
    ]
}

/// All built-in tables concatenated, base game first.
pub fn all() -> Vec<Boss> {
    let mut bosses = vanilla();
    bosses.extend(calamity());
    bosses.extend(thorium());
    bosses
}
