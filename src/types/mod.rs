//! Core domain types for brickify.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` / `ColourInput` - 24-bit RGB values and boundary input
//! - `Finish` - surface treatment classification
//! - `BrickColour` - a catalog colour with derived Lab coordinates
//! - `PieceType`, `PieceSize`, `Baseplate`, `Piece` - what goes on the grid

mod brick_colour;
mod colour;
mod finish;
mod piece;

pub use brick_colour::BrickColour;
pub use colour::{Colour, ColourInput};
pub use finish::{Finish, FinishSet, FINISH_RULES};
pub use piece::{Baseplate, Piece, PieceSize, PieceType};
