//! Project configuration (brickify.yaml).
//!
//! Every field is optional; command line flags override whatever the file
//! sets.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BrickError, Result};
use crate::mosaic::{MatchPolicy, DEFAULT_QUANTIZATION};
use crate::types::{Baseplate, Finish, FinishSet, PieceType};

pub const CONFIG_FILENAME: &str = "brickify.yaml";

/// Settings loaded from brickify.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Baseplate side in studs.
    pub size: u32,

    /// Piece name (plate, tile, slope, plate_round) or raw reference.
    pub piece: String,

    /// Colours need strictly more than this many in stock.
    pub min_stock: u32,

    pub finishes: Vec<Finish>,

    /// Lab quantization step for the match cache; 0 disables caching.
    pub quantization: f32,

    /// Preview pixels per cell.
    pub cell_pixels: u32,

    pub studs: bool,

    pub gutter: bool,

    /// Catalog file; the builtin catalog is used when unset.
    pub catalog: Option<PathBuf>,

    /// Output directory for previews.
    pub output: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            size: 32,
            piece: "plate".to_string(),
            min_stock: 0,
            finishes: vec![Finish::Solid],
            quantization: DEFAULT_QUANTIZATION,
            cell_pixels: 20,
            studs: true,
            gutter: true,
            catalog: None,
            output: PathBuf::from("."),
        }
    }
}

impl ProjectConfig {
    /// Load configuration from a brickify.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BrickError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let mut config = Self::parse(&content)?;
        // relative catalog paths are relative to the config file
        if let (Some(catalog), Some(dir)) = (config.catalog.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let blank = content.lines().all(|line| {
            let line = line.trim();
            line.is_empty() || line.starts_with('#')
        });
        if blank {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| BrickError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load `dir/brickify.yaml` if it exists.
    pub fn discover(dir: &Path) -> Result<Option<(PathBuf, Self)>> {
        let path = dir.join(CONFIG_FILENAME);
        if !path.is_file() {
            return Ok(None);
        }
        let config = Self::load(&path)?;
        Ok(Some((path, config)))
    }

    pub fn piece_type(&self) -> Result<PieceType> {
        self.piece.parse()
    }

    pub fn baseplate(&self) -> Result<Baseplate> {
        Baseplate::from_side(self.size)
    }

    pub fn finish_set(&self) -> FinishSet {
        self.finishes.iter().copied().collect()
    }

    pub fn policy(&self) -> MatchPolicy {
        MatchPolicy::new(self.min_stock, self.finish_set())
    }

    /// Commented config with every default spelled out.
    pub fn template() -> String {
        let defaults = Self::default();
        let mut yaml = String::new();
        yaml.push_str("# brickify project settings\n");
        yaml.push_str(&format!(
            "\n# baseplate side in studs: {}\n",
            Baseplate::supported_sides()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ));
        yaml.push_str(&format!("size: {}\n", defaults.size));
        yaml.push_str(&format!(
            "\n# piece: {} or a catalog reference\n",
            PieceType::names().collect::<Vec<_>>().join(", ")
        ));
        yaml.push_str(&format!("piece: {}\n", defaults.piece));
        yaml.push_str("\n# only use colours with more than this many in stock\n");
        yaml.push_str(&format!("min_stock: {}\n", defaults.min_stock));
        yaml.push_str("\n# solid, pearl, metallic, trans, glitter, chrome\n");
        yaml.push_str("finishes:\n");
        for finish in &defaults.finishes {
            yaml.push_str(&format!("  - {}\n", finish));
        }
        yaml.push_str("\n# colour match cache step in Lab units (0 disables the cache)\n");
        yaml.push_str(&format!("quantization: {}\n", defaults.quantization));
        yaml.push_str("\n# preview\n");
        yaml.push_str(&format!("cell_pixels: {}\n", defaults.cell_pixels));
        yaml.push_str(&format!("studs: {}\n", defaults.studs));
        yaml.push_str(&format!("gutter: {}\n", defaults.gutter));
        yaml.push_str("\n# catalog: colours.yaml\n");
        yaml.push_str(&format!("output: \"{}\"\n", defaults.output.display()));
        yaml
    }
}
