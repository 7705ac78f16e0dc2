use serde::{Deserialize, Serialize};

/// The state of a single grid cell.
///
/// Serialized as its numeric value: 0 for empty, 1 for a chip, -1 for a free space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Cell {
    #[default]
    Empty,
    /// A placed chip. Free corners in a single-player game are stored like this, too.
    Chip,
    /// A free corner in a multi-player game, which is nobody's chip.
    FreeSpace,
}

impl Cell {
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Chip => 1,
            Cell::FreeSpace => -1,
        }
    }

    /// Only chips count as occupied, for both placement scoring and sequence detection.
    pub fn is_chip(self) -> bool {
        self == Cell::Chip
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '·',
            Cell::Chip => '●',
            Cell::FreeSpace => '★',
        }
    }
}

impl From<Cell> for i8 {
    fn from(cell: Cell) -> i8 {
        cell.value()
    }
}

/// The error type for converting a number other than 0, 1 or -1 into a [`Cell`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownCellValue(pub i8);

impl std::error::Error for UnknownCellValue {}

impl std::fmt::Display for UnknownCellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is not a cell state (expected 0 for empty, 1 for a chip or -1 for a free space)",
            self.0
        )
    }
}

impl TryFrom<i8> for Cell {
    type Error = UnknownCellValue;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Chip),
            -1 => Ok(Cell::FreeSpace),
            other => Err(UnknownCellValue(other)),
        }
    }
}
