//! Rendering a mosaic grid to a preview image.

mod png;
mod preview;

pub use png::write_png;
pub use preview::{MosaicRenderer, BACKGROUND, MAX_CELL_PIXELS};
