//! Palette command: list the colours a catalog offers for a piece type.

use std::path::PathBuf;

use clap::Args;

use crate::catalog::Palette;
use crate::error::Result;
use crate::mosaic::MatchPolicy;
use crate::output::{plural, Printer};
use crate::types::{BrickColour, Finish, PieceType};

/// List the colours a catalog offers for a piece type
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Piece type: plate, tile, slope, plate_round or a catalog reference
    #[arg(long, short = 't')]
    pub piece: Option<String>,

    /// Catalog file (YAML or JSON); the builtin colours otherwise
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Only colours with more than this many in stock
    #[arg(long)]
    pub min_stock: Option<u32>,

    /// Allowed finish (repeatable)
    #[arg(long = "finish")]
    pub finishes: Vec<Finish>,

    /// Show every colour, eligible or not
    #[arg(long)]
    pub all: bool,

    /// Config file (default: ./brickify.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let config = super::load_config(args.config.as_deref(), printer)?;
    let piece_type: PieceType = match &args.piece {
        Some(piece) => piece.parse()?,
        None => config.piece_type()?,
    };
    let policy = super::override_policy(config.policy(), args.min_stock, &args.finishes);
    let catalog = args.catalog.clone().or(config.catalog.clone());

    let provider = super::open_catalog(catalog.as_deref())?;
    let palette = provider.colors_for(&piece_type)?;
    let shown = listed(&palette, &policy, args.all);

    printer.status(
        "Listing",
        &format!(
            "{} for {} from {} ({})",
            plural(shown.len(), "colour", "colours"),
            piece_type,
            provider.source_name(),
            if args.all { "all".to_string() } else { policy.to_string() },
        ),
    );

    if !args.all && shown.is_empty() {
        printer.warning(
            "Empty",
            &format!("no colour passes {}; try --all or a lower --min-stock", policy),
        );
    }

    for colour in shown {
        printer.line(&styled_row(printer, colour, &policy));
    }

    Ok(())
}

fn listed<'p>(palette: &'p Palette, policy: &MatchPolicy, all: bool) -> Vec<&'p BrickColour> {
    palette
        .iter()
        .map(|c| c.as_ref())
        .filter(|c| all || policy.admits(c))
        .collect()
}

/// Swatch plus row; colours the policy rejects are dimmed.
fn styled_row(printer: &Printer, colour: &BrickColour, policy: &MatchPolicy) -> String {
    let text = row(colour, policy);
    let text = if policy.admits(colour) { text } else { printer.dim(&text) };
    format!("{}{}", printer.swatch(colour.rgb()), text)
}

fn row(colour: &BrickColour, policy: &MatchPolicy) -> String {
    let stock = colour
        .availability()
        .map_or_else(|| "-".to_string(), |n| n.to_string());
    let marker = if policy.admits(colour) { ' ' } else { 'x' };
    format!(
        "{marker} {:<20} {:<28} {} {:<8} {:>6}",
        colour.id(),
        colour.name(),
        colour.rgb(),
        colour.finish().as_str(),
        stock,
    )
}
