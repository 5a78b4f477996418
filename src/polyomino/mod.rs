//! A contiguity-validated, position-normalized polyomino.

use core::fmt;
use core::str::FromStr;
use std::collections::VecDeque;

use hashbrown::HashSet;

use crate::grid_vec::GridVec;
use crate::symmetry::D4Subgroup;
use crate::text::lines_any;

mod expander;

/// Error returned when a cell collection does not form a single
/// 4-connected component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidShape;

impl fmt::Display for InvalidShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid shape: disconnected cells")
    }
}

impl std::error::Error for InvalidShape {}

/// A polyomino, represented as a set of occupied grid cells.
///
/// Construction validates 4-connectivity and translates the cells so
/// that `min x = min y = 0`; the width, height, and exact [`D4Subgroup`]
/// symmetry are computed once at that point and never change. All
/// transformations return a new, independently normalized `Polyomino`.
#[derive(Clone, Debug)]
pub struct Polyomino {
    /// The normalized cells, in sorted order.
    cells: Vec<GridVec>,
    /// The same cells again, for constant-time membership tests.
    lookup: HashSet<GridVec>,
    width: i32,
    height: i32,
    symmetry: D4Subgroup,
}

impl Eq for Polyomino {}

impl PartialEq for Polyomino {
    fn eq(&self, other: &Self) -> bool {
        // The dimensions and symmetry are derived from the cells, so
        // comparing the sorted cell lists is enough.
        self.cells == other.cells
    }
}

impl std::hash::Hash for Polyomino {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}

/// The single-cell polyomino.
impl Default for Polyomino {
    fn default() -> Self {
        Self::monomino()
    }
}

impl Polyomino {
    /// Create a polyomino from a collection of cells.
    ///
    /// Duplicate coordinates are collapsed. Returns [`InvalidShape`] if
    /// the collection is empty or is not a single 4-connected component.
    pub fn new(cells: impl IntoIterator<Item = GridVec>) -> Result<Self, InvalidShape> {
        let cells: HashSet<GridVec> = cells.into_iter().collect();

        // Breadth-first traversal over a working copy of the set; any
        // cell left unvisited afterwards is disconnected.
        let mut unvisited = cells.clone();

        let start = match cells.iter().next() {
            Some(&cell) => cell,
            None => return Err(InvalidShape),
        };

        unvisited.remove(&start);
        let mut queue = VecDeque::from([start]);

        while let Some(cell) = queue.pop_front() {
            for neighbor in cell.neighbors() {
                if unvisited.remove(&neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        if !unvisited.is_empty() {
            return Err(InvalidShape);
        }

        Ok(Self::from_connected_cells(cells))
    }

    /// The single-cell polyomino.
    pub fn monomino() -> Self {
        Self::from_connected_cells([GridVec::ZERO].into_iter().collect())
    }

    /// Create a polyomino from a multi-line text grid.
    ///
    /// `#` marks an occupied cell; every other character is empty. The
    /// top text row maps to the highest `y`, so the literal looks like
    /// the shape it produces. Any mix of `\n`, `\r\n`, and `\r` line
    /// endings parses identically.
    pub fn from_text(text: &str) -> Result<Self, InvalidShape> {
        let lines = lines_any(text);
        let rows = lines.len();

        let cells = lines.iter().enumerate().flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, c)| c == '#')
                .map(move |(col, _)| GridVec::new(col as i32, (rows - 1 - row) as i32))
        });

        Self::new(cells)
    }

    /// Build from cells that are already known to be 4-connected:
    /// normalize, sort, and derive the extent and symmetry.
    fn from_connected_cells(cells: HashSet<GridVec>) -> Self {
        let min_x = cells.iter().map(|cell| cell.x).min().unwrap_or(0);
        let min_y = cells.iter().map(|cell| cell.y).min().unwrap_or(0);
        let origin = GridVec::new(min_x, min_y);

        let lookup: HashSet<GridVec> = cells.iter().map(|&cell| cell - origin).collect();

        let mut cells: Vec<GridVec> = lookup.iter().copied().collect();
        cells.sort_unstable();

        let width = cells.iter().map(|cell| cell.x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|cell| cell.y).max().unwrap_or(0) + 1;
        let symmetry = Self::classify_symmetry(&lookup, width, height);

        Self {
            cells,
            lookup,
            width,
            height,
            symmetry,
        }
    }

    /// The number of cells.
    pub fn order(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The exact largest subgroup of D4 under which the shape is
    /// invariant.
    pub fn symmetry(&self) -> D4Subgroup {
        self.symmetry
    }

    /// Returns whether `cell` is occupied, in normalized coordinates.
    pub fn contains(&self, cell: GridVec) -> bool {
        self.lookup.contains(&cell)
    }

    /// The normalized cells, in sorted order.
    pub fn cells(&self) -> impl Iterator<Item = GridVec> + '_ {
        self.cells.iter().copied()
    }

    /// Create a new polyomino with `cell` added.
    ///
    /// The result goes through the full construction contract, so
    /// growing at a non-adjacent coordinate returns [`InvalidShape`].
    pub fn grow(&self, cell: GridVec) -> Result<Self, InvalidShape> {
        Self::new(self.cells().chain(core::iter::once(cell)))
    }

    /// Determine the largest invariance, testing the higher-order
    /// subgroups first so that the reported symmetry is exact. Only
    /// square shapes can have diagonal or 4-fold symmetry.
    fn classify_symmetry(lookup: &HashSet<GridVec>, width: i32, height: i32) -> D4Subgroup {
        let invariant_under = |map: &dyn Fn(GridVec) -> GridVec| {
            lookup.iter().all(|&cell| lookup.contains(&map(cell)))
        };

        let square = width == height;
        let mirror_vertical = invariant_under(&|c| GridVec::new(width - 1 - c.x, c.y));

        if square && invariant_under(&|c| GridVec::new(c.y, width - 1 - c.x)) {
            return if mirror_vertical {
                D4Subgroup::DihedralFull
            } else {
                D4Subgroup::Rotate4
            };
        }

        let main_diagonal = square && invariant_under(&|c| GridVec::new(c.y, c.x));

        if invariant_under(&|c| GridVec::new(width - 1 - c.x, height - 1 - c.y)) {
            return if mirror_vertical {
                D4Subgroup::DihedralOrthogonal
            } else if main_diagonal {
                D4Subgroup::DihedralDiagonal
            } else {
                D4Subgroup::Rotate2
            };
        }

        if mirror_vertical {
            return D4Subgroup::ReflectVertical;
        }

        if invariant_under(&|c| GridVec::new(c.x, height - 1 - c.y)) {
            return D4Subgroup::ReflectHorizontal;
        }

        if main_diagonal {
            return D4Subgroup::ReflectMainDiagonal;
        }

        if square && invariant_under(&|c| GridVec::new(height - 1 - c.y, width - 1 - c.x)) {
            return D4Subgroup::ReflectAntiDiagonal;
        }

        D4Subgroup::Identity
    }

    /// Apply a cell mapping and re-normalize. Isometries preserve
    /// connectivity, so the traversal check is skipped.
    fn transformed(&self, map: impl Fn(GridVec) -> GridVec) -> Self {
        Self::from_connected_cells(self.cells().map(map).collect())
    }

    /// Rotate 90 degrees clockwise.
    pub fn rotate_cw(&self) -> Self {
        self.transformed(|c| GridVec::new(c.y, -c.x))
    }

    /// Rotate 90 degrees counterclockwise.
    pub fn rotate_ccw(&self) -> Self {
        self.transformed(|c| GridVec::new(-c.y, c.x))
    }

    /// Rotate 180 degrees.
    pub fn rotate_180(&self) -> Self {
        self.transformed(|c| GridVec::new(-c.x, -c.y))
    }

    /// Reflect across a vertical mirror line.
    pub fn reflect_vertical(&self) -> Self {
        self.transformed(|c| GridVec::new(-c.x, c.y))
    }

    /// Reflect across a horizontal mirror line.
    pub fn reflect_horizontal(&self) -> Self {
        self.transformed(|c| GridVec::new(c.x, -c.y))
    }

    /// Reflect across the main diagonal.
    pub fn reflect_main_diagonal(&self) -> Self {
        self.transformed(|c| GridVec::new(c.y, c.x))
    }

    /// Reflect across the anti-diagonal.
    pub fn reflect_anti_diagonal(&self) -> Self {
        self.transformed(|c| GridVec::new(-c.y, -c.x))
    }
}

impl FromStr for Polyomino {
    type Err = InvalidShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

/// Renders the shape as the same `#`-grid that [`Polyomino::from_text`]
/// accepts, highest `y` first.
impl fmt::Display for Polyomino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut grid = String::new();

        for y in (0..self.height).rev() {
            let mut line = String::new();
            for x in 0..self.width {
                line.push(if self.contains(GridVec::new(x, y)) {
                    '#'
                } else {
                    ' '
                });
            }
            grid.push_str(line.trim_end());
            if y > 0 {
                grid.push('\n');
            }
        }

        f.write_str(&grid)
    }
}

#[cfg(test)]
mod test {
    use super::{InvalidShape, Polyomino};
    use crate::grid_vec::GridVec;
    use crate::symmetry::D4Subgroup;

    fn shape(cells: &[(i32, i32)]) -> Polyomino {
        Polyomino::new(cells.iter().map(|&(x, y)| GridVec::new(x, y))).unwrap()
    }

    #[test]
    fn monomino_is_the_default() {
        let polyomino = Polyomino::default();

        assert_eq!(polyomino.order(), 1);
        assert!(polyomino.contains(GridVec::ZERO));
        assert_eq!(polyomino, Polyomino::monomino());
    }

    #[test]
    fn constructor_uses_custom_coordinates() {
        let polyomino = shape(&[(1, 0), (0, 1), (1, 1)]);

        assert_eq!(polyomino.order(), 3);
        for cell in [(1, 0), (0, 1), (1, 1)] {
            assert!(polyomino.contains(GridVec::new(cell.0, cell.1)));
        }
    }

    #[test]
    fn constructor_normalizes_position_of_cells() {
        let polyomino = shape(&[(3, -5), (2, -4), (3, -4)]);

        assert_eq!(polyomino.order(), 3);
        assert_eq!(polyomino, shape(&[(1, 0), (0, 1), (1, 1)]));

        assert_eq!(polyomino.cells().map(|c| c.x).min(), Some(0));
        assert_eq!(polyomino.cells().map(|c| c.y).min(), Some(0));
    }

    #[test]
    fn equality_ignores_input_order() {
        let a = shape(&[(0, 0), (1, 0), (2, 0), (2, 1)]);
        let b = shape(&[(2, 1), (2, 0), (0, 0), (1, 0)]);

        assert_eq!(a, b);
    }

    #[test]
    fn duplicate_cells_are_collapsed() {
        let polyomino = shape(&[(0, 0), (1, 0), (1, 0)]);

        assert_eq!(polyomino.order(), 2);
    }

    #[test]
    fn disconnected_cells_are_rejected() {
        let result = Polyomino::new([GridVec::new(0, 0), GridVec::new(2, 0)]);

        assert_eq!(result, Err(InvalidShape));
    }

    #[test]
    fn diagonal_contact_is_not_connectivity() {
        let result = Polyomino::new([GridVec::new(0, 0), GridVec::new(1, 1)]);

        assert_eq!(result, Err(InvalidShape));
    }

    #[test]
    fn empty_input_is_rejected() {
        let result = Polyomino::new([]);

        assert_eq!(result, Err(InvalidShape));
    }

    #[test]
    fn width_and_height_follow_the_extent() {
        let polyomino = shape(&[(0, 0), (1, 0), (2, 0), (2, 1)]);

        assert_eq!(polyomino.width(), 3);
        assert_eq!(polyomino.height(), 2);
    }

    #[test]
    fn text_grid_matches_explicit_coordinates() {
        let from_text = Polyomino::from_text("##\n ## #\n  ###").unwrap();
        let from_cells = shape(&[
            (0, 2),
            (1, 2),
            (1, 1),
            (2, 1),
            (4, 1),
            (2, 0),
            (3, 0),
            (4, 0),
        ]);

        assert_eq!(from_text, from_cells);
    }

    #[test]
    fn line_ending_style_does_not_matter() {
        let unix = Polyomino::from_text("##\n ## #\n  ###").unwrap();
        let windows = Polyomino::from_text("##\r\n ## #\r\n  ###").unwrap();
        let classic_mac = Polyomino::from_text("##\r ## #\r  ###").unwrap();

        assert_eq!(unix, windows);
        assert_eq!(unix, classic_mac);
    }

    #[test]
    fn top_text_row_has_the_highest_y() {
        let polyomino = Polyomino::from_text("#\n##").unwrap();

        assert_eq!(polyomino, shape(&[(0, 1), (0, 0), (1, 0)]));
    }

    #[test]
    fn display_round_trips_through_from_text() {
        let polyomino = shape(&[(0, 2), (1, 2), (1, 1), (2, 1), (4, 1), (2, 0), (3, 0), (4, 0)]);

        let rendered = polyomino.to_string();
        let reparsed: Polyomino = rendered.parse().unwrap();

        assert_eq!(rendered, "##\n ## #\n  ###");
        assert_eq!(reparsed, polyomino);
    }

    #[test]
    fn growing_at_an_adjacent_cell_extends_the_shape() {
        let domino = shape(&[(0, 0), (1, 0)]);

        let tromino = domino.grow(GridVec::new(2, 0)).unwrap();

        assert_eq!(tromino.order(), 3);
        assert_eq!(tromino, shape(&[(0, 0), (1, 0), (2, 0)]));
    }

    #[test]
    fn growing_below_the_origin_renormalizes() {
        let domino = shape(&[(0, 0), (1, 0)]);

        let tromino = domino.grow(GridVec::new(0, -1)).unwrap();

        assert_eq!(tromino, shape(&[(0, 1), (1, 1), (0, 0)]));
    }

    #[test]
    fn growing_at_a_detached_cell_fails() {
        let domino = shape(&[(0, 0), (1, 0)]);

        assert_eq!(domino.grow(GridVec::new(3, 0)), Err(InvalidShape));
    }

    #[test]
    fn rotating_four_times_is_the_identity() {
        let l_tetromino = shape(&[(0, 0), (0, 1), (0, 2), (1, 0)]);

        let full_turn = l_tetromino
            .rotate_cw()
            .rotate_cw()
            .rotate_cw()
            .rotate_cw();

        assert_eq!(full_turn, l_tetromino);
    }

    #[test]
    fn opposite_rotations_cancel() {
        let l_tetromino = shape(&[(0, 0), (0, 1), (0, 2), (1, 0)]);

        assert_eq!(l_tetromino.rotate_cw().rotate_ccw(), l_tetromino);
        assert_eq!(l_tetromino.rotate_180().rotate_180(), l_tetromino);
        assert_eq!(l_tetromino.rotate_cw().rotate_cw(), l_tetromino.rotate_180());
    }

    #[test]
    fn reflections_are_involutions() {
        let l_tetromino = shape(&[(0, 0), (0, 1), (0, 2), (1, 0)]);

        assert_eq!(l_tetromino.reflect_vertical().reflect_vertical(), l_tetromino);
        assert_eq!(
            l_tetromino.reflect_horizontal().reflect_horizontal(),
            l_tetromino
        );
        assert_eq!(
            l_tetromino.reflect_main_diagonal().reflect_main_diagonal(),
            l_tetromino
        );
        assert_eq!(
            l_tetromino.reflect_anti_diagonal().reflect_anti_diagonal(),
            l_tetromino
        );
    }

    #[test]
    fn rotation_changes_an_asymmetric_shape() {
        let l_tetromino = shape(&[(0, 0), (0, 1), (0, 2), (1, 0)]);

        assert_ne!(l_tetromino.rotate_cw(), l_tetromino);
    }

    #[test]
    fn monomino_has_full_symmetry() {
        assert_eq!(Polyomino::monomino().symmetry(), D4Subgroup::DihedralFull);
    }

    #[test]
    fn square_tetromino_has_full_symmetry() {
        let square = shape(&[(0, 0), (1, 0), (0, 1), (1, 1)]);

        assert_eq!(square.symmetry(), D4Subgroup::DihedralFull);
    }

    #[test]
    fn l_tromino_is_main_diagonal_symmetric() {
        let l_tromino = shape(&[(0, 0), (1, 0), (0, 1)]);

        assert_eq!(l_tromino.symmetry(), D4Subgroup::ReflectMainDiagonal);
    }

    #[test]
    fn straight_tromino_has_both_mirrors_and_a_half_turn() {
        let straight = shape(&[(0, 0), (1, 0), (2, 0)]);

        assert_eq!(straight.symmetry(), D4Subgroup::DihedralOrthogonal);
    }

    #[test]
    fn s_tetromino_is_only_rotation_symmetric() {
        let s_tetromino = shape(&[(0, 0), (1, 0), (1, 1), (2, 1)]);

        assert_eq!(s_tetromino.symmetry(), D4Subgroup::Rotate2);
    }

    #[test]
    fn t_tetromino_has_a_single_vertical_mirror() {
        let t_tetromino = shape(&[(0, 1), (1, 1), (2, 1), (1, 0)]);

        assert_eq!(t_tetromino.symmetry(), D4Subgroup::ReflectVertical);
    }

    #[test]
    fn arch_has_a_single_horizontal_mirror() {
        let arch = shape(&[(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)]);

        assert_eq!(arch.symmetry(), D4Subgroup::ReflectHorizontal);
    }

    #[test]
    fn w_pentomino_is_anti_diagonal_symmetric() {
        let w_pentomino = shape(&[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)]);

        assert_eq!(w_pentomino.symmetry(), D4Subgroup::ReflectAntiDiagonal);
    }

    #[test]
    fn clipped_square_is_diagonal_dihedral() {
        // A 3x3 block with two opposite corners removed.
        let clipped = shape(&[(0, 0), (1, 0), (0, 1), (1, 1), (2, 1), (1, 2), (2, 2)]);

        assert_eq!(clipped.symmetry(), D4Subgroup::DihedralDiagonal);
    }

    #[test]
    fn pinwheel_is_four_fold_rotation_symmetric() {
        // A 2x2 core with one arm on each side, offset so that no
        // mirror survives.
        let pinwheel = shape(&[
            (1, 1),
            (2, 1),
            (1, 2),
            (2, 2),
            (0, 1),
            (1, 3),
            (3, 2),
            (2, 0),
        ]);

        assert_eq!(pinwheel.symmetry(), D4Subgroup::Rotate4);
    }

    #[test]
    fn l_tetromino_has_no_symmetry() {
        let l_tetromino = shape(&[(0, 0), (0, 1), (0, 2), (1, 0)]);

        assert_eq!(l_tetromino.symmetry(), D4Subgroup::Identity);
    }

    #[test]
    fn reported_symmetry_is_a_subgroup_of_full_d4() {
        for cells in [
            vec![(0, 0)],
            vec![(0, 0), (1, 0)],
            vec![(0, 0), (1, 0), (0, 1)],
            vec![(0, 0), (0, 1), (0, 2), (1, 0)],
        ] {
            let polyomino = shape(&cells);

            assert!(polyomino.symmetry().is_subgroup_of(D4Subgroup::DihedralFull));
        }
    }
}
