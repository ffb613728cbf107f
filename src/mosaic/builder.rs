//! Image to mosaic grid.

use std::path::Path;

use image::RgbImage;
use tracing::{debug, info};

use crate::catalog::PaletteProvider;
use crate::error::{BrickError, Result};
use crate::imaging;
use crate::space::rgb_to_lab;
use crate::types::{Colour, Piece, PieceSize, PieceType};

use super::{ColourMatcher, GridSize, MatchPolicy, MosaicGrid};

/// Samples an image down to one pixel per cell and matches every cell.
pub struct MosaicBuilder<'a> {
    matcher: ColourMatcher<'a>,
    policy: MatchPolicy,
}

impl<'a> MosaicBuilder<'a> {
    pub fn new(provider: &'a PaletteProvider) -> Self {
        Self::with_matcher(ColourMatcher::new(provider))
    }

    pub fn with_matcher(matcher: ColourMatcher<'a>) -> Self {
        Self {
            matcher,
            policy: MatchPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    pub fn matcher(&self) -> &ColourMatcher<'a> {
        &self.matcher
    }

    /// Build a fully populated grid from `image`.
    ///
    /// The first failed match aborts the whole build.
    pub fn build(&self, image: &RgbImage, grid: GridSize, piece_type: &PieceType) -> Result<MosaicGrid> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(BrickError::EmptyImage { width, height });
        }
        if grid.is_empty() {
            return Err(BrickError::InvalidGrid {
                message: format!("cannot build a {} mosaic", grid),
            });
        }

        let sampled = imaging::resize(image, grid.width, grid.height);
        let samples: Vec<Colour> = sampled.pixels().map(|p| Colour::from(p.0)).collect();
        debug!(source = %format!("{}x{}", width, height), grid = %grid, "sampled image");

        let cells = self.match_samples(&samples, piece_type)?;
        let mosaic = MosaicGrid::from_cells(grid, cells)?;

        let stats = self.matcher.stats();
        info!(
            grid = %grid,
            piece = %piece_type,
            cache_hits = stats.hits,
            cache_misses = stats.misses,
            "mosaic built"
        );
        Ok(mosaic)
    }

    /// Load an image file and build from it.
    pub fn build_path(&self, path: &Path, grid: GridSize, piece_type: &PieceType) -> Result<MosaicGrid> {
        let image = imaging::load(path)?;
        self.build(&image, grid, piece_type)
    }

    fn match_cell(&self, colour: Colour, piece_type: &PieceType) -> Result<Piece> {
        let matched = self.matcher.closest(rgb_to_lab(colour), piece_type, &self.policy)?;
        Ok(Piece::new(piece_type.clone(), matched, PieceSize::UNIT))
    }

    #[cfg(not(feature = "parallel"))]
    fn match_samples(&self, samples: &[Colour], piece_type: &PieceType) -> Result<Vec<Piece>> {
        samples
            .iter()
            .map(|&colour| self.match_cell(colour, piece_type))
            .collect()
    }

    /// Parallel matching. The palette is fetched up front so the catalog is
    /// never hit from worker threads.
    #[cfg(feature = "parallel")]
    fn match_samples(&self, samples: &[Colour], piece_type: &PieceType) -> Result<Vec<Piece>> {
        use rayon::prelude::*;

        self.matcher.provider().warm([piece_type])?;
        samples
            .par_iter()
            .map(|&colour| self.match_cell(colour, piece_type))
            .collect()
    }
}
