pub mod build;
pub mod completions;
pub mod init;
pub mod palette;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::catalog::{BuiltinCatalog, FileCatalog, PaletteProvider};
use crate::config::ProjectConfig;
use crate::error::Result;
use crate::mosaic::MatchPolicy;
use crate::output::{display_path, Printer};
use crate::types::{Finish, FinishSet};

/// brickify - Turn pictures into brick mosaics
#[derive(Parser, Debug)]
#[command(name = "brickify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG wins when set
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a mosaic, print the parts list and write a preview
    Build(build::BuildArgs),

    /// List the colours a catalog offers for a piece type
    Palette(palette::PaletteArgs),

    /// Initialize a project (generates brickify.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

impl Cli {
    /// Default log filter for the verbosity level.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "brickify=warn",
            1 => "brickify=info",
            2 => "brickify=debug",
            _ => "brickify=trace",
        }
    }
}

/// `--config` if given, otherwise `./brickify.yaml` when present, otherwise defaults.
pub(crate) fn load_config(explicit: Option<&Path>, printer: &Printer) -> Result<ProjectConfig> {
    if let Some(path) = explicit {
        printer.info("Config", &display_path(path));
        return ProjectConfig::load(path);
    }
    match ProjectConfig::discover(Path::new("."))? {
        Some((path, config)) => {
            printer.info("Config", &display_path(&path));
            Ok(config)
        }
        None => Ok(ProjectConfig::default()),
    }
}

/// Command line stock and finish flags take precedence over the config.
pub(crate) fn override_policy(base: MatchPolicy, min_stock: Option<u32>, finishes: &[Finish]) -> MatchPolicy {
    let mut policy = base;
    if let Some(min) = min_stock {
        policy = policy.with_min_availability(min);
    }
    if !finishes.is_empty() {
        policy = policy.with_finishes(finishes.iter().copied().collect::<FinishSet>());
    }
    policy
}

/// A catalog file when one is named, the builtin colour table otherwise.
pub(crate) fn open_catalog(path: Option<&Path>) -> Result<PaletteProvider> {
    Ok(match path {
        Some(path) => PaletteProvider::new(FileCatalog::load(path)?),
        None => PaletteProvider::new(BuiltinCatalog::default()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_filter() {
        let cli = Cli::parse_from(["brickify", "-vv", "init"]);
        assert_eq!(cli.log_filter(), "brickify=debug");
        let cli = Cli::parse_from(["brickify", "init"]);
        assert_eq!(cli.log_filter(), "brickify=warn");
    }

    #[test]
    fn test_flags_override_config_policy() {
        let base = MatchPolicy::production();
        assert_eq!(override_policy(base, None, &[]), base);
        assert_eq!(
            override_policy(base, Some(5), &[Finish::Trans, Finish::Solid]),
            MatchPolicy::new(5, FinishSet::only(Finish::Trans).with(Finish::Solid))
        );
    }

    #[test]
    fn test_open_builtin_catalog() {
        let provider = open_catalog(None).unwrap();
        assert_eq!(provider.source_name(), "builtin");
    }
}
