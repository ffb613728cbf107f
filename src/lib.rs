//! brickify - Turn pictures into brick mosaics
//!
//! A library for matching an image against a catalog of piece colours,
//! counting the pieces a mosaic needs, and rendering a preview of it.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod imaging;
pub mod mosaic;
pub mod output;
pub mod render;
pub mod report;
pub mod space;
pub mod types;

pub use catalog::{
    BuiltinCatalog, CatalogDocument, CatalogEntry, CatalogError, CatalogSource, FileCatalog, Palette,
    PaletteProvider, StaticCatalog,
};
pub use config::{ProjectConfig, CONFIG_FILENAME};
pub use error::{BrickError, Result};
pub use mosaic::{
    aggregate, ColourMatcher, GridSize, MatchPolicy, MosaicBuilder, MosaicGrid, PartsEntry, PartsList,
};
pub use render::{write_png, MosaicRenderer};
pub use report::{catalog_url, PartsReport};
pub use space::{perceptual_distance, to_hex, to_lab, to_rgb, LabColour};
pub use types::{
    Baseplate, BrickColour, Colour, ColourInput, Finish, FinishSet, Piece, PieceSize, PieceType,
};
