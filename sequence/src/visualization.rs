use crate::{Grid, GRID_SIZE};

/// Draws the grid as text, one row per line, with row and column numbers.
///
/// Chips are `●`, free spaces `★` and empty cells `·`.
pub fn visualize_grid(grid: &Grid) -> String {
    // Column numbers
    let mut result = String::from("    ");
    for j in 0..GRID_SIZE {
        result += &format!("{} ", j);
    }
    // Draw the top of the box
    result += "\n   ╭";
    for _ in 0..GRID_SIZE {
        result += "──";
    }
    result += "╮\n";

    for (i, row) in grid.rows().enumerate() {
        result += &format!("{:>2} │", i);
        for cell in row {
            result.push(cell.symbol());
            result.push(' ');
        }
        result += "│\n";
    }

    // Draw the bottom of the box
    result += "   ╰";
    for _ in 0..GRID_SIZE {
        result += "──";
    }
    result += "╯";
    result
}
