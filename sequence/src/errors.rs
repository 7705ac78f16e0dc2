/// The error type for [`Grid::from_values()`](crate::Grid::from_values), i.e. for
/// reading a grid that is not a 10x10 array of cell states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MalformedGrid {
    WrongNumberOfRows { rows: usize },
    WrongRowLength { row: usize, len: usize },
    UnknownCellValue { row: usize, col: usize, value: i8 },
}

impl std::error::Error for MalformedGrid {}

impl std::fmt::Display for MalformedGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedGrid::WrongNumberOfRows { rows } =>
                write!(f, "Grid has {} rows instead of {}", rows, crate::GRID_SIZE),
            MalformedGrid::WrongRowLength { row, len } =>
                write!(f, "Row {} of the grid has {} cells instead of {}", row, len, crate::GRID_SIZE),
            MalformedGrid::UnknownCellValue { row, col, value } =>
                write!(f, "Cell ({}, {}) has the value {}, which is not a cell state", row, col, value),
        }
    }
}

/// The error type for [`take_turn()`](crate::take_turn) when there is no card left to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyPool;

impl std::error::Error for EmptyPool {}

impl std::fmt::Display for EmptyPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tried to draw a card from an empty pool")
    }
}
