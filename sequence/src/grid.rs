mod cell;
mod coord;
mod runs;

use std::ops::Index;

pub use cell::*;
pub use coord::*;
use serde::{Deserialize, Serialize};
pub use runs::*;

use crate::MalformedGrid;

/// The grid is always exactly this many rows and this many columns.
pub const GRID_SIZE: usize = 10;

/// The 10x10 board.
///
/// Its shape is fixed by its type, so once a `Grid` exists it can be indexed by
/// any [`Coord`] without further checks. Untyped input goes through
/// [`Grid::from_values()`], which is where a malformed grid is rejected.
///
/// Serialized as ten rows of ten numeric cell states (see [`Cell`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// A grid where every cell is empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a grid from rows of numeric cell states (0, 1 or -1).
    pub fn from_values<R: AsRef<[i8]>>(rows: &[R]) -> Result<Self, MalformedGrid> {
        if rows.len() != GRID_SIZE {
            return Err(MalformedGrid::WrongNumberOfRows { rows: rows.len() });
        }
        let mut grid = Self::empty();
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != GRID_SIZE {
                return Err(MalformedGrid::WrongRowLength {
                    row,
                    len: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                grid.cells[row][col] = Cell::try_from(value)
                    .map_err(|_| MalformedGrid::UnknownCellValue { row, col, value })?;
            }
        }
        Ok(grid)
    }

    /// The numeric cell states, row by row.
    pub fn to_values(&self) -> [[i8; GRID_SIZE]; GRID_SIZE] {
        self.cells.map(|row| row.map(Cell::value))
    }

    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row()][coord.col()] = cell;
    }

    /// Puts a chip on the cell, whatever was there before.
    pub fn place_chip(&mut self, coord: Coord) {
        self.set(coord, Cell::Chip);
    }

    pub fn is_chip(&self, coord: Coord) -> bool {
        self.get(coord).is_chip()
    }

    /// The coordinates of all chips, in row-major order.
    pub fn chips(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(|&coord| self.is_chip(coord))
    }

    pub fn num_chips(&self) -> usize {
        self.chips().count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_SIZE]> {
        self.cells.iter()
    }
}

impl Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Cell {
        &self.cells[coord.row()][coord.col()]
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::visualize_grid(self))
    }
}
