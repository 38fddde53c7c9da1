use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-size rectangular board of cells, indexed by `(x, y)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Allocates a board where every position holds a hidden empty cell.
    pub fn generate_cells((width, height): Coord2) -> Self {
        let shape = (usize::from(width), usize::from(height));
        let cells = Array2::from_shape_fn(shape, |(x, y)| {
            Cell::empty((x as Coord, y as Coord))
        });
        Self { cells }
    }

    /// Builds a fully populated board with mines at exactly the given coordinates.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if mine_coords.is_empty() {
            return Err(GameError::NoMines);
        }

        let mut grid = Self::generate_cells(size);
        for &coords in mine_coords {
            let coords = grid.validate_coords(coords)?;
            grid.place_mine(coords);
        }
        grid.generate_numbers();
        Ok(grid)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let (dim_x, dim_y) = self.cells.dim();
        (
            Coord::try_from(dim_x).unwrap_or(Coord::MAX),
            Coord::try_from(dim_y).unwrap_or(Coord::MAX),
        )
    }

    pub fn total_cells(&self) -> CellCount {
        let (width, height) = self.size();
        mult(width, height)
    }

    /// Resolves a raw point to in-bounds coordinates.
    pub fn contains(&self, point: Point) -> Option<Coord2> {
        checked_coords(point, self.size())
    }

    /// Looks up a cell by raw point, out-of-bounds lookups yield [`Cell::INVALID`].
    pub fn cell_at(&self, point: Point) -> Cell {
        self.contains(point).map_or(Cell::INVALID, |coords| self[coords])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Turns the cell into a mine, returns `false` if it already was one.
    pub fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self[coords];
        if cell.is_mine() {
            return false;
        }
        cell.kind = CellKind::Mine;
        cell.number = 0;
        true
    }

    pub fn mine_count(&self) -> CellCount {
        self.iter().filter(|cell| cell.is_mine()).count() as CellCount
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine())
            .count() as u8
    }

    /// Recomputes the adjacency number and kind of every non-mine cell.
    pub fn generate_numbers(&mut self) {
        let (width, height) = self.size();
        for x in 0..width {
            for y in 0..height {
                let coords = (x, y);
                if self[coords].is_mine() {
                    continue;
                }

                let number = self.adjacent_mine_count(coords);
                let cell = &mut self[coords];
                cell.number = number;
                cell.kind = if number > 0 {
                    CellKind::Number
                } else {
                    CellKind::Empty
                };
            }
        }
    }

    pub fn reveal_mines(&mut self) {
        for cell in self.iter_mut().filter(|cell| cell.is_mine()) {
            cell.revealed = true;
        }
    }

    pub fn flag_mines(&mut self) {
        for cell in self.iter_mut().filter(|cell| cell.is_mine()) {
            cell.flagged = true;
        }
    }

    /// Whether no non-mine cell is left hidden, scans the whole board.
    pub fn all_safe_revealed(&self) -> bool {
        self.iter().all(|cell| cell.is_mine() || cell.revealed)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.iter().filter(|cell| cell.flagged).count() as CellCount
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
