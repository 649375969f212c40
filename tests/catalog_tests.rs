//! Integration tests for catalog loading and end-to-end resolution
//!
//! Parses the fixture catalogs the way the CLI does, then exercises the
//! resolver and the progression index built from them.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use loadstone::bosses;
use loadstone::config::Sources;
use loadstone::models::CatalogObject;
use loadstone::mods::Mod;
use loadstone::parser::parse_catalog;
use loadstone::progression::{ProgressionIndex, UNKNOWN_RANK};
use loadstone::registry::OverrideRegistry;
use loadstone::resolver::ImageResolver;

fn parse_fixture(relative: &str) -> loadstone::parser::CatalogResult {
    let path = Path::new("tests/fixtures").join(relative);
    let file = File::open(&path).unwrap_or_else(|e| panic!("cannot open {:?}: {}", path, e));
    parse_catalog(BufReader::new(file))
}

#[test]
fn test_valid_fixtures_parse_cleanly() {
    for fixture in ["valid/overrides.jsonl", "valid/bosses.jsonl"] {
        let result = parse_fixture(fixture);
        assert!(
            result.warnings.is_empty(),
            "unexpected warnings in {}: {:?}",
            fixture,
            result.warnings
        );
        assert!(!result.objects.is_empty(), "no objects in {}", fixture);
    }
}

#[test]
fn test_invalid_fixture_warns_and_recovers() {
    let result = parse_fixture("invalid/bad_line.jsonl");
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].line, 2);
    // The surrounding lines still load
    assert_eq!(result.objects.len(), 2);
}

#[test]
fn test_resolver_built_from_fixture_overrides() {
    let result = parse_fixture("valid/overrides.jsonl");

    let mut registry = OverrideRegistry::new();
    for obj in result.objects {
        match obj {
            CatalogObject::Image(over) => registry.register_image(over),
            CatalogObject::Alias(alias) => registry.register_alias(alias),
            CatalogObject::Boss(_) => panic!("no bosses in this fixture"),
        }
    }
    let resolver = ImageResolver::new(Sources::default(), registry);

    // Locator override returned verbatim, namespace ignored
    assert_eq!(
        resolver.resolve("Bee Keeper", Mod::Thorium),
        "https://terraria.wiki.gg/images/Bee_Keeper_%28old%29.png"
    );

    // Alias replaces the file name, then gets encoded
    assert_eq!(
        resolver.resolve("Fiery Greatsword", Mod::Vanilla),
        "https://terraria.wiki.gg/images/Volcano_%28old%29.png"
    );

    // Calamity-only alias does not leak into vanilla
    assert_eq!(
        resolver.resolve("Relic of Deliverance", Mod::Vanilla),
        "https://terraria.wiki.gg/images/Relic_of_Deliverance.png"
    );
    assert_eq!(
        resolver.resolve("Relic of Deliverance", Mod::Calamity),
        "https://calamitymod.wiki.gg/images/Relic_of_Deliverance_%28pre-1.4%29.png"
    );

    // Names without an override still resolve
    assert_eq!(
        resolver.resolve("Terra Blade", Mod::Vanilla),
        "https://terraria.wiki.gg/images/Terra_Blade.png"
    );
}

#[test]
fn test_index_built_from_builtins_and_fixture() {
    let result = parse_fixture("valid/bosses.jsonl");

    let mut ranked = bosses::all();
    for obj in result.objects {
        if let CatalogObject::Boss(boss) = obj {
            ranked.push(boss);
        }
    }
    let index = ProgressionIndex::build(ranked);

    // Built-in progression still anchors the front of the order
    assert_eq!(index.rank_of("King Slime"), 0);
    assert_eq!(index.rank_of("eater of worlds"), 2);

    // Fixture boss slots in after the built-in Calamity table
    let polterghast = index.rank_of("Polterghast, the Cursed Revenant");
    assert!(polterghast > index.rank_of("The Devourer of Gods"));
    assert!(polterghast < index.rank_of("The Grand Thunder Bird"));

    // Unrecognized namespace sorts after every known table
    let squirrel = index.rank_of("Trojan Squirrel");
    assert!(squirrel > index.rank_of("The Ragnarok"));
    assert_ne!(squirrel, UNKNOWN_RANK);

    // Unknown names still degrade to the sentinel
    assert_eq!(index.rank_of("Not In Any Table"), UNKNOWN_RANK);
}
