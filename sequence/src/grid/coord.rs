use serde::{Deserialize, Serialize};

use super::GRID_SIZE;

/// A cell position on the grid. Both coordinates are always in `0..10`.
///
/// Serialized as a `[row, col]` pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "(u8, u8)", try_from = "(u8, u8)")]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Returns `None` if either coordinate lies outside the grid.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// For tables known at compile time. An out-of-bounds coordinate fails compilation.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        assert!((row as usize) < GRID_SIZE && (col as usize) < GRID_SIZE);
        Self { row, col }
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// The neighbouring coordinate reached by moving `d_row` rows and `d_col` columns,
    /// or `None` when that leaves the grid.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = (self.row as i8).checked_add(d_row)?;
        let col = (self.col as i8).checked_add(d_col)?;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as usize, col as usize)
    }

    /// Euclidean distance between the centers of two cells.
    pub fn distance(self, other: Coord) -> f64 {
        let d_row = f64::from(self.row) - f64::from(other.row);
        let d_col = f64::from(self.col) - f64::from(other.col);
        (d_row * d_row + d_col * d_col).sqrt()
    }

    /// All 100 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..GRID_SIZE as u8).flat_map(|row| (0..GRID_SIZE as u8).map(move |col| Coord { row, col }))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<Coord> for (u8, u8) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

/// The error type for converting an out-of-bounds pair into a [`Coord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordOutOfBounds {
    pub row: u8,
    pub col: u8,
}

impl std::error::Error for CoordOutOfBounds {}

impl std::fmt::Display for CoordOutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Coordinate ({}, {}) lies outside of the {}x{} grid",
            self.row, self.col, GRID_SIZE, GRID_SIZE
        )
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = CoordOutOfBounds;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row.into(), col.into()).ok_or(CoordOutOfBounds { row, col })
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn distance_is_symmetric(a: Coord, b: Coord) -> bool {
            a.distance(b) == b.distance(a) && (a.distance(b) == 0.0) == (a == b)
        }

        fn offset_and_back(coord: Coord, d_row: i8, d_col: i8) -> bool {
            let (d_row, d_col) = (d_row % 10, d_col % 10);
            match coord.offset(d_row, d_col) {
                Some(moved) => moved.offset(-d_row, -d_col) == Some(coord),
                None => {
                    let row = coord.row() as i8 + d_row;
                    let col = coord.col() as i8 + d_col;
                    !(0..10).contains(&row) || !(0..10).contains(&col)
                }
            }
        }
    }

    #[test]
    fn bounds() {
        assert!(Coord::new(9, 9).is_some());
        assert!(Coord::new(10, 0).is_none());
        assert!(Coord::new(0, 10).is_none());
        assert_eq!(Coord::at(0, 0).offset(-1, 0), None);
        assert_eq!(Coord::at(9, 9).offset(0, 1), None);
        assert_eq!(Coord::at(4, 4).offset(1, -1), Coord::new(5, 3));
    }

    #[test]
    fn distance() {
        assert_eq!(Coord::at(0, 0).distance(Coord::at(3, 4)), 5.0);
        assert_eq!(Coord::at(2, 7).distance(Coord::at(2, 7)), 0.0);
        assert!((Coord::at(0, 0).distance(Coord::at(9, 9)) - 12.727922061357855).abs() < 1e-12);
    }

    #[test]
    fn serde_rejects_out_of_bounds() {
        assert_eq!(serde_json::to_string(&Coord::at(3, 8)).unwrap(), "[3,8]");
        assert_eq!(serde_json::from_str::<Coord>("[9,0]").unwrap(), Coord::at(9, 0));
        assert!(serde_json::from_str::<Coord>("[10,0]").is_err());
    }

    #[test]
    fn all_is_row_major() {
        let all: Vec<Coord> = Coord::all().collect();
        assert_eq!(all.len(), 100);
        assert_eq!(all[0], Coord::at(0, 0));
        assert_eq!(all[13], Coord::at(1, 3));
        assert_eq!(all[99], Coord::at(9, 9));
    }
}
