//! Init command implementation.
//!
//! Writes a `brickify.yaml` with every default spelled out.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{ProjectConfig, CONFIG_FILENAME};
use crate::error::{BrickError, Result};
use crate::output::{display_path, Printer};

/// Initialize a brickify project by generating a brickify.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing brickify.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(BrickError::Config {
            message: format!("{} already exists", display_path(&config_path)),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    fs::create_dir_all(&args.path).map_err(|e| BrickError::Io {
        path: args.path.clone(),
        message: format!("Failed to create directory: {}", e),
    })?;

    fs::write(&config_path, ProjectConfig::template()).map_err(|e| BrickError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.success("Created", &display_path(&config_path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Printer;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_config() {
        let dir = tempdir().unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &Printer::new()).unwrap();

        let config = ProjectConfig::load(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn test_init_errors_if_config_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "size: 16").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        let result = run(args, &Printer::new());
        assert!(matches!(result, Err(BrickError::Config { .. })));
        // untouched
        let content = fs::read_to_string(dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(content, "size: 16");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "size: 16").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join(CONFIG_FILENAME)).unwrap();
        assert!(content.contains("size: 32"));
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("mosaics");

        let args = InitArgs {
            path: project.clone(),
            force: false,
        };
        run(args, &Printer::new()).unwrap();

        assert!(project.join(CONFIG_FILENAME).exists());
    }
}
