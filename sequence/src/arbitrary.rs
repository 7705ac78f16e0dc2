use crate::{Card, Cell, Coord, Grid, ALL_CARDS};

impl quickcheck::Arbitrary for Card {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&ALL_CARDS).unwrap()
    }
}

impl quickcheck::Arbitrary for Coord {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let row = usize::from(u8::arbitrary(g) % 10);
        let col = usize::from(u8::arbitrary(g) % 10);
        Coord::new(row, col).unwrap()
    }
}

impl quickcheck::Arbitrary for Grid {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Vary how full the grid is, so that both sparse boards and boards
        // with long runs show up.
        let fill_percent = u8::arbitrary(g) % 101;
        let mut grid = Grid::empty();
        for coord in Coord::all() {
            let cell = if u8::arbitrary(g) % 100 < fill_percent {
                Cell::Chip
            } else if u8::arbitrary(g) % 20 == 0 {
                Cell::FreeSpace
            } else {
                Cell::Empty
            };
            grid.set(coord, cell);
        }
        grid
    }
}
