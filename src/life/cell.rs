/// Width in characters of a rendered cell.
pub const GLYPH_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// State of this cell in the next generation, given its live neighbor count.
    ///
    /// Survival is on 2 or 3 neighbors. Birth happens on 4 or more neighbors,
    /// not on exactly 3 as in canonical Life.
    pub fn next(self, neighbors: u8) -> Cell {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Alive, _) => Cell::Dead,
            (Cell::Dead, n) if n > 3 => Cell::Alive,
            (Cell::Dead, _) => Cell::Dead,
        }
    }

    /// Fixed-width text glyph for this cell
    pub fn glyph(self) -> &'static str {
        match self {
            Cell::Alive => " * ",
            Cell::Dead => "   ",
        }
    }
}
