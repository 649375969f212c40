//! Command-line interface implementation

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::bosses;
use crate::config::{load_config, AppConfig};
use crate::models::{Boss, CatalogObject};
use crate::mods::Mod;
use crate::parser::parse_catalog;
use crate::placeholder::{display_letter, placeholder};
use crate::progression::ProgressionIndex;
use crate::registry::OverrideRegistry;
use crate::renderer::{render_tile, save_png};
use crate::resolver::ImageResolver;

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// Loadstone - wiki image locators and boss progression for loadout tools
#[derive(Parser)]
#[command(name = "lode")]
#[command(about = "Loadstone - wiki image locators and boss progression for loadout tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Catalog/config options shared by the data-driven commands.
#[derive(Args)]
pub struct DataArgs {
    /// Catalog files with overrides, aliases, and bosses
    #[arg(short, long)]
    data: Vec<PathBuf>,

    /// Optional lode.toml with base paths and extra catalog files
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Strict mode: treat catalog warnings as errors
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve an entity name to its wiki image locator
    Resolve {
        /// Entity display name
        name: String,

        /// Mod namespace (vanilla, calamity, thorium).
        /// Unrecognized tags resolve against the base-game path.
        #[arg(short = 'm', long = "mod", default_value = "vanilla")]
        game_mod: String,

        /// Print the whole fallback chain instead of just the primary locator
        #[arg(long)]
        chain: bool,

        /// Emit a JSON array instead of plain lines
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        data: DataArgs,
    },

    /// Print progression ranks for boss names
    Rank {
        /// Boss names to look up
        names: Vec<String>,

        /// Emit JSON objects instead of tab-separated lines
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        data: DataArgs,
    },

    /// Sort names by boss progression (reads stdin when no names are given)
    Sort {
        /// Names to sort; unknown names sink to the end
        names: Vec<String>,

        #[command(flatten)]
        data: DataArgs,
    },

    /// Generate a placeholder image for an entity with no artwork
    Placeholder {
        /// Text whose first letter the placeholder shows
        text: String,

        /// Square size in pixels for the data URI
        #[arg(short, long, default_value = "40")]
        size: u32,

        /// Write a rasterized PNG tile here instead of printing a data URI
        #[arg(long)]
        png: Option<PathBuf>,

        /// Integer upscale factor for the PNG tile (1-16)
        #[arg(long, default_value = "4", value_parser = clap::value_parser!(u8).range(1..=16))]
        scale: u8,
    },
}

#[derive(Serialize)]
struct RankEntry<'a> {
    name: &'a str,
    rank: usize,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { name, game_mod, chain, json, data } => {
            run_resolve(&name, &game_mod, chain, json, &data)
        }
        Commands::Rank { names, json, data } => run_rank(&names, json, &data),
        Commands::Sort { names, data } => run_sort(names, &data),
        Commands::Placeholder { text, size, png, scale } => {
            run_placeholder(&text, size, png.as_deref(), scale)
        }
    }
}

/// Build the resolver and progression index from config, built-in tables,
/// and any catalog files.
fn load_data(args: &DataArgs) -> Result<(ImageResolver, ProgressionIndex), ExitCode> {
    let config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return Err(ExitCode::from(EXIT_INVALID_ARGS));
            }
        },
        None => AppConfig::default(),
    };

    let mut registry = OverrideRegistry::new();
    let mut ranked: Vec<Boss> = bosses::all();
    let mut warnings = Vec::new();

    for path in config.data.iter().chain(args.data.iter()) {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Error: cannot open catalog '{}': {}", path.display(), e);
                return Err(ExitCode::from(EXIT_INVALID_ARGS));
            }
        };

        let result = parse_catalog(BufReader::new(file));
        for warning in result.warnings {
            warnings.push(format!("{}: line {}: {}", path.display(), warning.line, warning.message));
        }
        for obj in result.objects {
            match obj {
                CatalogObject::Image(over) => registry.register_image(over),
                CatalogObject::Alias(alias) => registry.register_alias(alias),
                CatalogObject::Boss(boss) => ranked.push(boss),
            }
        }
    }

    if args.strict && !warnings.is_empty() {
        for warning in &warnings {
            eprintln!("Error: {}", warning);
        }
        return Err(ExitCode::from(EXIT_ERROR));
    }
    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }

    Ok((
        ImageResolver::new(config.sources, registry),
        ProgressionIndex::build(ranked),
    ))
}

fn run_resolve(name: &str, mod_tag: &str, chain: bool, json: bool, data: &DataArgs) -> ExitCode {
    let game_mod = Mod::from_tag(mod_tag);
    let (resolver, _) = match load_data(data) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    let locators = if chain {
        resolver.fallback_chain(name, game_mod)
    } else {
        vec![resolver.resolve(name, game_mod)]
    };

    if json {
        return print_json(&locators);
    }
    for locator in &locators {
        println!("{}", locator);
    }
    ExitCode::from(EXIT_SUCCESS)
}

fn run_rank(names: &[String], json: bool, data: &DataArgs) -> ExitCode {
    let (_, index) = match load_data(data) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    if json {
        let entries: Vec<RankEntry> = names
            .iter()
            .map(|name| RankEntry { name: name.as_str(), rank: index.rank_of(name) })
            .collect();
        return print_json(&entries);
    }
    for name in names {
        println!("{}\t{}", index.rank_of(name), name);
    }
    ExitCode::from(EXIT_SUCCESS)
}

fn run_sort(names: Vec<String>, data: &DataArgs) -> ExitCode {
    let (_, index) = match load_data(data) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    let mut names = names;
    if names.is_empty() {
        names = std::io::stdin().lock().lines().map_while(Result::ok).collect();
    }

    index.sort_by_rank(&mut names, |name| name.as_str());
    for name in &names {
        println!("{}", name);
    }
    ExitCode::from(EXIT_SUCCESS)
}

fn run_placeholder(text: &str, size: u32, png: Option<&Path>, scale: u8) -> ExitCode {
    match png {
        Some(path) => {
            let tile = render_tile(display_letter(text), scale);
            if let Err(e) = save_png(&tile, path) {
                eprintln!("Error: cannot write '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        None => {
            println!("{}", placeholder(text, size));
            ExitCode::from(EXIT_SUCCESS)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string(value) {
        Ok(out) => {
            println!("{}", out);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
