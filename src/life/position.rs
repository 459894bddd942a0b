/// Offsets of the 8 cells surrounding a position, diagonals included.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A signed grid coordinate. Neighbors of edge cells fall outside the board,
/// so rows and columns may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: isize,
    pub column: isize,
}

impl Position {
    pub fn new(row: isize, column: isize) -> Self {
        Position { row, column }
    }

    /// The 8 surrounding positions, whether or not they lie on a board.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dr, dc)| Position::new(self.row + dr, self.column + dc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_neighbors_are_distinct_and_adjacent() {
        let center = Position::new(4, 7);
        let neighbors: HashSet<Position> = center.neighbors().collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&center));
        for pos in &neighbors {
            assert!((pos.row - center.row).abs() <= 1);
            assert!((pos.column - center.column).abs() <= 1);
        }
    }

    #[test]
    fn test_neighbors_of_origin_go_negative() {
        let negative = Position::new(0, 0)
            .neighbors()
            .filter(|p| p.row < 0 || p.column < 0)
            .count();
        assert_eq!(negative, 5);
    }
}
