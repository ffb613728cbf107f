//! The finished mosaic arrangement.

use std::fmt;

use crate::error::{BrickError, Result};
use crate::types::{Baseplate, Piece};

/// Grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<Baseplate> for GridSize {
    fn from(plate: Baseplate) -> Self {
        Self::square(plate.side())
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A fully populated W×H grid of pieces, row-major with the origin top-left.
#[derive(Debug, Clone)]
pub struct MosaicGrid {
    size: GridSize,
    cells: Vec<Piece>,
}

impl MosaicGrid {
    /// Build a grid from exactly `width * height` cells in row-major order.
    pub fn from_cells(size: GridSize, cells: Vec<Piece>) -> Result<Self> {
        if size.is_empty() {
            return Err(BrickError::InvalidGrid {
                message: format!("grid {} has no cells", size),
            });
        }
        if cells.len() != size.area() {
            return Err(BrickError::InvalidGrid {
                message: format!("grid {} needs {} cells, got {}", size, size.area(), cells.len()),
            });
        }
        Ok(Self { size, cells })
    }

    /// Build a grid from rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<Piece>>) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        if rows.iter().any(|r| r.len() != width as usize) {
            return Err(BrickError::InvalidGrid {
                message: "rows have different lengths".to_string(),
            });
        }
        Self::from_cells(GridSize::new(width, height), rows.into_iter().flatten().collect())
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Get the piece at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<&Piece> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.cells.get(y as usize * self.size.width as usize + x as usize)
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Piece]> {
        self.cells.chunks(self.size.width as usize)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Piece] {
        &self.cells
    }

    /// Cells with their (x, y) position.
    pub fn enumerate(&self) -> impl Iterator<Item = (u32, u32, &Piece)> {
        let width = self.size.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, piece)| (i as u32 % width, i as u32 / width, piece))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BrickColour, Colour, PieceSize, PieceType};
    use std::sync::Arc;

    fn piece(id: &str) -> Piece {
        Piece::new(
            PieceType::plate(),
            Arc::new(BrickColour::new(id, id, Colour::BLACK, Some(1))),
            PieceSize::UNIT,
        )
    }

    #[test]
    fn test_from_cells_row_major() {
        let grid = MosaicGrid::from_cells(
            GridSize::new(3, 2),
            ["a", "b", "c", "d", "e", "f"].iter().map(|id| piece(id)).collect(),
        )
        .unwrap();

        assert_eq!(grid.get(0, 0).unwrap().colour.id(), "a");
        assert_eq!(grid.get(2, 0).unwrap().colour.id(), "c");
        assert_eq!(grid.get(0, 1).unwrap().colour.id(), "d");
        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(0, 2).is_none());

        let rows: Vec<Vec<&str>> = grid
            .rows()
            .map(|r| r.iter().map(|p| p.colour.id()).collect())
            .collect();
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);

        let (x, y, last) = grid.enumerate().last().unwrap();
        assert_eq!((x, y, last.colour.id()), (2, 1, "f"));
    }

    #[test]
    fn test_from_cells_rejects_holes() {
        let result = MosaicGrid::from_cells(GridSize::new(2, 2), vec![piece("a"); 3]);
        assert!(matches!(result, Err(BrickError::InvalidGrid { .. })));
    }

    #[test]
    fn test_from_cells_rejects_empty() {
        let result = MosaicGrid::from_cells(GridSize::new(0, 4), vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_rows() {
        let grid = MosaicGrid::from_rows(vec![vec![piece("a"), piece("b")], vec![piece("c"), piece("d")]]).unwrap();
        assert_eq!(grid.size(), GridSize::square(2));

        let ragged = MosaicGrid::from_rows(vec![vec![piece("a"), piece("b")], vec![piece("c")]]);
        assert!(ragged.is_err());
    }

    #[test]
    fn test_grid_size_from_baseplate() {
        let size = GridSize::from(Baseplate::from_side(16).unwrap());
        assert_eq!(size, GridSize::new(16, 16));
        assert_eq!(size.area(), 256);
    }
}
