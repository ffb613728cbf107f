//! Build command implementation.
//!
//! Matches an image against the catalog, prints the parts list and writes a
//! preview PNG next to the other outputs.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use crate::catalog::PaletteProvider;
use crate::error::Result;
use crate::imaging;
use crate::mosaic::{aggregate, ColourMatcher, GridSize, MosaicBuilder, PartsList};
use crate::output::{display_path, plural, Printer};
use crate::render::{write_png, MosaicRenderer};
use crate::report::PartsReport;
use crate::types::{Baseplate, BrickColour, Finish, PieceType};

/// Colour every baseplate is bought in.
pub const BASEPLATE_COLOUR: &str = "White";

/// Build a mosaic, print the parts list and write a preview
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Image to convert
    pub image: PathBuf,

    /// Baseplate side in studs (14, 16, 24, 32, 40, 48)
    #[arg(long, short)]
    pub size: Option<u32>,

    /// Piece type: plate, tile, slope, plate_round or a catalog reference
    #[arg(long, short = 't')]
    pub piece: Option<String>,

    /// Catalog file (YAML or JSON); the builtin colours otherwise
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Only use colours with more than this many in stock
    #[arg(long)]
    pub min_stock: Option<u32>,

    /// Allowed finish (repeatable; default solid)
    #[arg(long = "finish")]
    pub finishes: Vec<Finish>,

    /// Preview pixels per cell (at most 512)
    #[arg(long)]
    pub cell: Option<u32>,

    /// Draw flat cells without studs
    #[arg(long)]
    pub no_studs: bool,

    /// Leave out the index gutter
    #[arg(long)]
    pub no_gutter: bool,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print the parts list as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Also save the downsampled image
    #[arg(long)]
    pub keep_resized: bool,

    /// Config file (default: ./brickify.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Files and counts produced by a build.
#[derive(Debug)]
pub struct BuildOutput {
    pub preview: PathBuf,
    pub resized: Option<PathBuf>,
    pub parts: PartsList,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    execute(&args, printer).map(|_| ())
}

pub fn execute(args: &BuildArgs, printer: &Printer) -> Result<BuildOutput> {
    let config = super::load_config(args.config.as_deref(), printer)?;

    let baseplate = Baseplate::from_side(args.size.unwrap_or(config.size))?;
    let piece_type: PieceType = match &args.piece {
        Some(piece) => piece.parse()?,
        None => config.piece_type()?,
    };
    let policy = super::override_policy(config.policy(), args.min_stock, &args.finishes);
    let catalog = args.catalog.clone().or_else(|| config.catalog.clone());
    let output_dir = args.output.clone().unwrap_or_else(|| config.output.clone());
    let grid_size = GridSize::from(baseplate);

    let provider = super::open_catalog(catalog.as_deref())?;
    printer.info("Catalog", provider.source_name());

    let image = imaging::load(&args.image)?;

    printer.status(
        "Matching",
        &format!(
            "{} ({}, piece {}, {})",
            display_path(&args.image),
            grid_size,
            piece_type,
            policy
        ),
    );
    let matcher = ColourMatcher::new(&provider).with_quantization(config.quantization)?;
    let builder = MosaicBuilder::with_matcher(matcher).with_policy(policy);
    let grid = builder.build(&image, grid_size, &piece_type)?;

    let resized = if args.keep_resized {
        let suffix = format!("_resized_{}", grid_size);
        let path = imaging::sibling_png(&args.image, &output_dir, &suffix);
        let sampled = imaging::resize(&image, grid_size.width, grid_size.height);
        write_png(&sampled, &path)?;
        printer.status("Resized", &display_path(&path));
        Some(path)
    } else {
        None
    };

    let parts = aggregate(&grid);
    let mut report = PartsReport::new(grid.size(), &parts).with_baseplate(baseplate);
    if let Some(colour) = baseplate_colour(&provider, baseplate, printer) {
        report = report.with_baseplate_colour(colour);
    }
    if args.json {
        printer.line(&report.to_json()?);
    } else {
        for entry in parts.iter() {
            printer.line(&format!(
                "{}{}",
                printer.swatch(entry.colour.rgb()),
                PartsReport::line(entry)
            ));
        }
        if let Some(line) = report.baseplate_line() {
            printer.line(&line);
        }
    }

    let renderer = MosaicRenderer::new(args.cell.unwrap_or(config.cell_pixels), config.studs && !args.no_studs)
        .with_gutter(config.gutter && !args.no_gutter);
    let preview = imaging::sibling_png(&args.image, &output_dir, "_brick");
    write_png(&renderer.render(&grid)?, &preview)?;
    printer.status("Rendered", &display_path(&preview));

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(parts.total(), "piece", "pieces"),
            plural(parts.len(), "colour", "colours")
        ),
    );

    Ok(BuildOutput {
        preview,
        resized,
        parts,
    })
}

/// The baseplate in [`BASEPLATE_COLOUR`], when the catalog lists it.
fn baseplate_colour(
    provider: &PaletteProvider,
    baseplate: Baseplate,
    printer: &Printer,
) -> Option<Arc<BrickColour>> {
    let piece_type = baseplate.piece_type();
    match provider.colour_by_name(&piece_type, BASEPLATE_COLOUR) {
        Ok(Some(colour)) => Some(colour),
        Ok(None) => {
            printer.warning(
                "Baseplate",
                &format!("{} has no {} colour in {}", piece_type, BASEPLATE_COLOUR, provider.source_name()),
            );
            None
        }
        Err(e) => {
            printer.warning("Baseplate", &e.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BrickError;
    use image::{Rgb, RgbImage};
    use std::fs;
    use tempfile::tempdir;

    const CATALOG: &str = r##"
default:
  - { id: "5", name: "Red", hex: "#FF0000", availability: 20 }
  - { id: "7", name: "Blue", hex: "#0000FF", availability: 20 }
"##;

    fn fixture(dir: &std::path::Path) -> (PathBuf, PathBuf) {
        let image = dir.join("flag.png");
        // already baseplate sized, so cells map one to one
        RgbImage::from_fn(16, 16, |_, y| if y < 8 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 255]) })
            .save(&image)
            .unwrap();
        let catalog = dir.join("colours.yaml");
        fs::write(&catalog, CATALOG).unwrap();
        (image, catalog)
    }

    #[test]
    fn test_build_writes_preview_and_counts_parts() {
        let dir = tempdir().unwrap();
        let (image, catalog) = fixture(dir.path());
        let out = dir.path().join("out");

        let args = BuildArgs {
            image,
            size: Some(16),
            catalog: Some(catalog),
            cell: Some(2),
            no_gutter: true,
            output: Some(out.clone()),
            ..Default::default()
        };
        let result = execute(&args, &Printer::new()).unwrap();

        assert_eq!(result.preview, out.join("flag_brick.png"));
        assert!(result.resized.is_none());
        assert_eq!(result.parts.total(), 256);
        assert_eq!(result.parts.count_of("5"), 128);
        assert_eq!(result.parts.count_of("7"), 128);

        let preview = image::open(&result.preview).unwrap().to_rgb8();
        assert_eq!(preview.dimensions(), (32, 32));
    }

    #[test]
    fn test_build_keeps_resized_image() {
        let dir = tempdir().unwrap();
        let (image, catalog) = fixture(dir.path());

        let args = BuildArgs {
            image,
            size: Some(14),
            catalog: Some(catalog),
            output: Some(dir.path().to_path_buf()),
            keep_resized: true,
            json: true,
            ..Default::default()
        };
        let result = execute(&args, &Printer::new()).unwrap();

        let resized = result.resized.unwrap();
        assert_eq!(resized, dir.path().join("flag_resized_14x14.png"));
        assert_eq!(image::open(&resized).unwrap().to_rgb8().dimensions(), (14, 14));
    }

    #[test]
    fn test_build_uses_config_file() {
        let dir = tempdir().unwrap();
        let (image, _) = fixture(dir.path());
        let config = dir.path().join("brickify.yaml");
        fs::write(
            &config,
            "size: 16\ncatalog: colours.yaml\ncell_pixels: 3\ngutter: false\nstuds: false\n",
        )
        .unwrap();

        let args = BuildArgs {
            image,
            config: Some(config),
            output: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let result = execute(&args, &Printer::new()).unwrap();

        assert_eq!(result.parts.total(), 256);
        let preview = image::open(&result.preview).unwrap().to_rgb8();
        assert_eq!(preview.dimensions(), (48, 48));
    }

    #[test]
    fn test_build_rejects_unsupported_size() {
        let dir = tempdir().unwrap();
        let (image, catalog) = fixture(dir.path());

        let args = BuildArgs {
            image,
            size: Some(20),
            catalog: Some(catalog),
            output: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(execute(&args, &Printer::new()), Err(BrickError::Config { .. })));
    }

    #[test]
    fn test_build_fails_without_eligible_colours() {
        let dir = tempdir().unwrap();
        let (image, catalog) = fixture(dir.path());

        let args = BuildArgs {
            image,
            size: Some(16),
            catalog: Some(catalog),
            min_stock: Some(50),
            output: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(
            execute(&args, &Printer::new()),
            Err(BrickError::NoEligibleColor { .. })
        ));
        assert!(!dir.path().join("flag_brick.png").exists());
    }

    #[test]
    fn test_failed_build_leaves_no_resized_image() {
        let dir = tempdir().unwrap();
        let (image, catalog) = fixture(dir.path());

        let args = BuildArgs {
            image,
            size: Some(16),
            catalog: Some(catalog),
            min_stock: Some(50),
            keep_resized: true,
            output: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(execute(&args, &Printer::new()).is_err());
        assert!(!dir.path().join("flag_resized_16x16.png").exists());
    }

    #[test]
    fn test_baseplate_colour_comes_from_catalog() {
        let dir = tempdir().unwrap();
        let catalog = dir.path().join("with_white.yaml");
        fs::write(
            &catalog,
            format!("{}  - {{ id: \"1\", name: \"White\", hex: \"#FFFFFF\", availability: 20 }}\n", CATALOG),
        )
        .unwrap();
        let provider = crate::cli::open_catalog(Some(&catalog)).unwrap();
        let plate = Baseplate::from_side(16).unwrap();

        let white = baseplate_colour(&provider, plate, &Printer::new()).unwrap();
        assert_eq!(white.id(), "1");

        let parts = PartsList::default();
        let report = PartsReport::new(GridSize::square(16), &parts)
            .with_baseplate(plate)
            .with_baseplate_colour(white);
        assert_eq!(
            report.baseplate_line().unwrap(),
            "You need 1 baseplate of White (ref: 3867, color: 1, size: 16x16)"
        );
    }

    #[test]
    fn test_baseplate_colour_missing_from_catalog() {
        let dir = tempdir().unwrap();
        let (_, catalog) = fixture(dir.path());
        let provider = crate::cli::open_catalog(Some(&catalog)).unwrap();

        let plate = Baseplate::from_side(16).unwrap();
        assert!(baseplate_colour(&provider, plate, &Printer::new()).is_none());
    }

    #[test]
    fn test_build_missing_image() {
        let dir = tempdir().unwrap();
        let args = BuildArgs {
            image: dir.path().join("missing.png"),
            size: Some(16),
            output: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(execute(&args, &Printer::new()), Err(BrickError::Io { .. })));
    }
}
