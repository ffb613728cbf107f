//! Image to mosaic: colour matching, grid building, and parts counting.

mod builder;
mod grid;
mod matcher;
mod parts;

pub use builder::MosaicBuilder;
pub use grid::{GridSize, MosaicGrid};
pub use matcher::{ColourMatcher, MatchPolicy, MatchStats, DEFAULT_QUANTIZATION, MIN_QUANTIZATION};
pub use parts::{aggregate, PartsEntry, PartsList};
