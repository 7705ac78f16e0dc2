use super::{Coord, Grid, GRID_SIZE};

/// How many chips in a straight line make a sequence.
pub const SEQUENCE_LENGTH: usize = 5;

/// A maximal straight line of cells across the grid.
#[derive(Clone, Copy, Debug)]
struct Line {
    start: Coord,
    step: (i8, i8),
    len: usize,
}

/// Every row, column, diagonal and anti-diagonal of the grid, including the
/// short diagonals near the corners.
fn lines() -> impl Iterator<Item = Line> {
    let n = GRID_SIZE;
    let rows = (0..n).map(move |row| Line {
        start: Coord::at(row as u8, 0),
        step: (0, 1),
        len: n,
    });
    let cols = (0..n).map(move |col| Line {
        start: Coord::at(0, col as u8),
        step: (1, 0),
        len: n,
    });
    // Top-left to bottom-right, starting from the top row or the left column
    let diagonals = (0..n)
        .map(|col| (0, col))
        .chain((1..n).map(|row| (row, 0)))
        .map(move |(row, col)| Line {
            start: Coord::at(row as u8, col as u8),
            step: (1, 1),
            len: n - row.max(col),
        });
    // Top-right to bottom-left, starting from the top row or the right column
    let anti_diagonals = (0..n)
        .map(|col| (0, col))
        .chain((1..n).map(move |row| (row, n - 1)))
        .map(move |(row, col)| Line {
            start: Coord::at(row as u8, col as u8),
            step: (1, -1),
            len: (n - row).min(col + 1),
        });
    rows.chain(cols).chain(diagonals).chain(anti_diagonals)
}

impl Line {
    fn cells(self) -> impl Iterator<Item = Coord> {
        std::iter::successors(Some(self.start), move |coord| {
            coord.offset(self.step.0, self.step.1)
        })
        .take(self.len)
    }

    /// Length of the longest run of consecutive chips on this line.
    ///
    /// Stops counting as soon as a run reaches `enough`.
    fn longest_run(self, grid: &Grid, enough: usize) -> usize {
        let mut longest = 0;
        let mut count = 0;
        for coord in self.cells() {
            if grid.is_chip(coord) {
                count += 1;
                longest = longest.max(count);
                if longest >= enough {
                    break;
                }
            } else {
                count = 0;
            }
        }
        longest
    }
}

/// Are there five chips in a row anywhere on the grid?
///
/// Rows, columns and both diagonal directions are checked. Only
/// [chips](super::Cell::Chip) count, so free spaces in a multi-player game
/// break a run.
pub fn has_sequence(grid: &Grid) -> bool {
    lines()
        .filter(|line| line.len >= SEQUENCE_LENGTH)
        .any(|line| line.longest_run(grid, SEQUENCE_LENGTH) >= SEQUENCE_LENGTH)
}

impl Grid {
    /// See [`has_sequence()`].
    pub fn has_sequence(&self) -> bool {
        has_sequence(self)
    }

    /// The longest straight run of chips in any direction.
    pub fn longest_run(&self) -> usize {
        lines()
            .map(|line| line.longest_run(self, usize::MAX))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::{init, Cell};

    fn grid_with_chips(chips: &[(u8, u8)]) -> Grid {
        let mut grid = Grid::empty();
        for &(row, col) in chips {
            grid.place_chip(Coord::at(row, col));
        }
        grid
    }

    // Checks every window of five cells in every direction, independently of `lines()`.
    fn brute_force_sequence(grid: &Grid) -> bool {
        for start in Coord::all() {
            for (d_row, d_col) in [(0, 1), (1, 0), (1, 1), (1, -1)] {
                let mut coord = Some(start);
                let mut count = 0;
                while let Some(c) = coord {
                    if count == SEQUENCE_LENGTH || !grid.is_chip(c) {
                        break;
                    }
                    count += 1;
                    coord = c.offset(d_row, d_col);
                }
                if count == SEQUENCE_LENGTH {
                    return true;
                }
            }
        }
        false
    }

    quickcheck! {
        fn agrees_with_brute_force(grid: Grid) -> bool {
            has_sequence(&grid) == brute_force_sequence(&grid)
        }

        fn agrees_with_longest_run(grid: Grid) -> bool {
            has_sequence(&grid) == (grid.longest_run() >= SEQUENCE_LENGTH)
        }
    }

    #[test]
    fn lines_cover_every_cell_once_per_direction() {
        for step in [(0, 1), (1, 0), (1, 1), (1, -1)] {
            let mut cells: Vec<Coord> = lines()
                .filter(|line| line.step == step)
                .flat_map(Line::cells)
                .collect();
            cells.sort();
            assert_eq!(cells, Coord::all().collect::<Vec<_>>());
        }
        // Eleven diagonals of length 5 to 10 per direction
        let long_diagonals = lines()
            .filter(|line| line.step.0 == 1 && line.step.1 != 0)
            .filter(|line| line.len >= SEQUENCE_LENGTH)
            .count();
        assert_eq!(long_diagonals, 2 * (2 * 5 + 1));
    }

    #[test]
    fn empty_grid() {
        assert!(!has_sequence(&Grid::empty()));
        assert_eq!(Grid::empty().longest_run(), 0);
    }

    #[test]
    fn row_and_column() {
        assert!(has_sequence(&grid_with_chips(&[(3, 2), (3, 3), (3, 4), (3, 5), (3, 6)])));
        assert!(has_sequence(&grid_with_chips(&[(5, 9), (6, 9), (7, 9), (8, 9), (9, 9)])));
        assert!(has_sequence(&grid_with_chips(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)])));
    }

    #[test]
    fn short_diagonals_near_corners() {
        // Top right, top-left to bottom-right direction
        assert!(has_sequence(&grid_with_chips(&[(0, 5), (1, 6), (2, 7), (3, 8), (4, 9)])));
        // Bottom left, top-left to bottom-right direction
        assert!(has_sequence(&grid_with_chips(&[(5, 0), (6, 1), (7, 2), (8, 3), (9, 4)])));
        // Top left, top-right to bottom-left direction
        assert!(has_sequence(&grid_with_chips(&[(0, 4), (1, 3), (2, 2), (3, 1), (4, 0)])));
        // Bottom right, top-right to bottom-left direction
        assert!(has_sequence(&grid_with_chips(&[(5, 9), (6, 8), (7, 7), (8, 6), (9, 5)])));
    }

    #[test]
    fn main_diagonals() {
        assert!(has_sequence(&grid_with_chips(&[(5, 5), (6, 6), (7, 7), (8, 8), (9, 9)])));
        assert!(has_sequence(&grid_with_chips(&[(2, 7), (3, 6), (4, 5), (5, 4), (6, 3)])));
    }

    #[test]
    fn runs_of_four_are_not_enough() {
        // Two runs of four, separated by one empty cell
        let grid = grid_with_chips(&[
            (4, 0),
            (4, 1),
            (4, 2),
            (4, 3),
            (4, 5),
            (4, 6),
            (4, 7),
            (4, 8),
        ]);
        assert!(!has_sequence(&grid));
        assert_eq!(grid.longest_run(), 4);

        let grid = grid_with_chips(&[
            (0, 3),
            (1, 2),
            (2, 1),
            (3, 0),
            (6, 6),
            (7, 6),
            (8, 6),
            (9, 6),
            (1, 1),
            (2, 2),
            (3, 3),
            (4, 4),
        ]);
        assert!(!has_sequence(&grid));
        assert_eq!(grid.longest_run(), 4);
    }

    #[test]
    fn longer_runs_count() {
        let grid = grid_with_chips(&[(7, 1), (7, 2), (7, 3), (7, 4), (7, 5), (7, 6), (7, 7)]);
        assert!(has_sequence(&grid));
        assert_eq!(grid.longest_run(), 7);
    }

    #[test]
    fn free_spaces_in_single_player() {
        let (mut grid, _) = init(1);
        for col in 1..5 {
            grid.place_chip(Coord::at(0, col));
        }
        assert!(has_sequence(&grid));
    }

    #[test]
    fn free_spaces_in_multi_player() {
        let (mut grid, _) = init(2);
        for col in 1..5 {
            grid.place_chip(Coord::at(0, col));
        }
        assert_eq!(grid.get(Coord::at(0, 0)), Cell::FreeSpace);
        assert!(!has_sequence(&grid));
        grid.place_chip(Coord::at(0, 5));
        assert!(has_sequence(&grid));
    }
}
