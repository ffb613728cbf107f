//! Bill of materials for a finished grid.

use std::collections::HashMap;
use std::sync::Arc;

use crate::types::{BrickColour, PieceSize, PieceType};

use super::MosaicGrid;

/// One line of the parts list: how many of a (type, colour, size) piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartsEntry {
    pub piece_type: PieceType,
    pub colour: Arc<BrickColour>,
    pub size: PieceSize,
    pub count: usize,
}

/// Aggregated piece counts, most-used first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartsList {
    entries: Vec<PartsEntry>,
    total: usize,
}

impl PartsList {
    pub fn entries(&self) -> &[PartsEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &PartsEntry> {
        self.entries.iter()
    }

    /// Number of distinct pieces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pieces overall.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Count for a colour id, summed over every type and size.
    pub fn count_of(&self, colour_id: &str) -> usize {
        self.entries
            .iter()
            .filter(|e| e.colour.id() == colour_id)
            .map(|e| e.count)
            .sum()
    }
}

impl<'a> IntoIterator for &'a PartsList {
    type Item = &'a PartsEntry;
    type IntoIter = std::slice::Iter<'a, PartsEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Count the pieces in `grid`.
///
/// Pieces are keyed by type, colour id and size. Ties in count are ordered
/// by that key so the output is stable.
pub fn aggregate(grid: &MosaicGrid) -> PartsList {
    let mut counts: HashMap<(&PieceType, &str, PieceSize), (Arc<BrickColour>, usize)> = HashMap::new();
    for piece in grid.cells() {
        counts
            .entry((&piece.piece_type, piece.colour.id(), piece.size))
            .or_insert_with(|| (piece.colour.clone(), 0))
            .1 += 1;
    }

    let mut entries: Vec<PartsEntry> = counts
        .into_iter()
        .map(|((piece_type, _, size), (colour, count))| PartsEntry {
            piece_type: piece_type.clone(),
            colour,
            size,
            count,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.piece_type.cmp(&b.piece_type))
            .then_with(|| a.colour.id().cmp(b.colour.id()))
            .then_with(|| a.size.cmp(&b.size))
    });

    let total = entries.iter().map(|e| e.count).sum();
    PartsList { entries, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mosaic::GridSize;
    use crate::types::{Colour, Piece};
    use pretty_assertions::assert_eq;

    fn colour(id: &str) -> Arc<BrickColour> {
        Arc::new(BrickColour::new(id, id, Colour::BLACK, Some(5)))
    }

    fn grid_of(ids: &[&str], width: u32) -> MosaicGrid {
        let palette: HashMap<&str, Arc<BrickColour>> = ids.iter().map(|id| (*id, colour(id))).collect();
        let cells = ids
            .iter()
            .map(|id| Piece::new(PieceType::plate(), palette[id].clone(), PieceSize::UNIT))
            .collect::<Vec<_>>();
        let height = ids.len() as u32 / width;
        MosaicGrid::from_cells(GridSize::new(width, height), cells).unwrap()
    }

    #[test]
    fn test_red_over_blue_counts() {
        let parts = aggregate(&grid_of(&["RED", "RED", "BLUE", "BLUE"], 2));
        assert_eq!(parts.len(), 2);
        assert_eq!(parts.count_of("RED"), 2);
        assert_eq!(parts.count_of("BLUE"), 2);
        assert_eq!(parts.count_of("GREEN"), 0);
        // equal counts fall back to colour id order
        let order: Vec<&str> = parts.iter().map(|e| e.colour.id()).collect();
        assert_eq!(order, vec!["BLUE", "RED"]);
    }

    #[test]
    fn test_total_equals_cell_count() {
        let grid = grid_of(&["A", "B", "A", "C", "A", "B"], 3);
        let parts = aggregate(&grid);
        assert_eq!(parts.total(), 6);
        assert_eq!(parts.iter().map(|e| e.count).sum::<usize>(), grid.size().area());
    }

    #[test]
    fn test_most_used_first() {
        let parts = aggregate(&grid_of(&["A", "B", "A", "C", "A", "B"], 3));
        let counts: Vec<(&str, usize)> = parts.iter().map(|e| (e.colour.id(), e.count)).collect();
        assert_eq!(counts, vec![("A", 3), ("B", 2), ("C", 1)]);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let grid = grid_of(&["A", "B", "C", "A"], 2);
        assert_eq!(aggregate(&grid), aggregate(&grid));
    }

    #[test]
    fn test_different_piece_types_are_separate_lines() {
        let red = colour("RED");
        let cells = vec![
            Piece::new(PieceType::plate(), red.clone(), PieceSize::UNIT),
            Piece::new(PieceType::tile(), red.clone(), PieceSize::UNIT),
        ];
        let grid = MosaicGrid::from_cells(GridSize::new(2, 1), cells).unwrap();
        let parts = aggregate(&grid);

        assert_eq!(parts.len(), 2);
        assert_eq!(parts.count_of("RED"), 2);
        // "3024" sorts before "3070"
        assert_eq!(parts.entries()[0].piece_type, PieceType::plate());
    }
}
