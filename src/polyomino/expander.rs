//! This module implements an iterator that provides all N + 1 growths
//! of a polyomino of N.

use super::Polyomino;
use crate::grid_vec::GridVec;

impl Polyomino {
    /// All shapes obtainable by adding one cell to `self`.
    ///
    /// Walks every cell and every free orthogonal neighbor of it. A
    /// coordinate reachable from more than one cell is yielded once per
    /// approach; deduplication is the consumer's concern (the generator
    /// keeps a seen-set anyway, to fold D4-equivalent growths).
    pub fn expansions(&self) -> impl Iterator<Item = Polyomino> + '_ {
        self.cells
            .iter()
            .flat_map(|cell| cell.neighbors())
            .filter(|&neighbor| !self.contains(neighbor))
            .map(|neighbor| self.grown(neighbor))
    }

    /// Grow at a cell that is orthogonally adjacent to the shape.
    /// Adjacency makes the result connected by construction, so the
    /// traversal check of [`Polyomino::grow`] is skipped.
    fn grown(&self, cell: GridVec) -> Polyomino {
        Self::from_connected_cells(self.cells().chain(core::iter::once(cell)).collect())
    }
}
