use std::fmt;
use std::str::FromStr;

use rand::Rng;
use tracing::trace;

use super::{Cell, Position, GLYPH_WIDTH};
use crate::error::{BoardError, OutOfBounds};

/// Probability that a freshly randomized cell starts alive.
pub const LIVE_PROBABILITY: f64 = 0.2;

/// A fixed-size grid of cells with hard, non-wrapping edges.
///
/// Dimensions may be zero, which yields an empty board: every lookup is out of
/// bounds, advancing does nothing and rendering produces an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a board where each cell is alive with probability [`LIVE_PROBABILITY`].
    pub fn new<R: Rng>(rows: usize, columns: usize, rng: &mut R) -> Self {
        Self::with_density(rows, columns, LIVE_PROBABILITY, rng)
    }

    /// Create a board where each cell is independently alive with probability
    /// `density`, clamped into `[0, 1]` (NaN counts as 0).
    pub fn with_density<R: Rng>(
        rows: usize,
        columns: usize,
        density: f64,
        rng: &mut R,
    ) -> Self {
        let density = density.max(0.0).min(1.0);
        let cells = (0..rows)
            .map(|_| {
                (0..columns)
                    .map(|_| {
                        if rng.random_bool(density) {
                            Cell::Alive
                        } else {
                            Cell::Dead
                        }
                    })
                    .collect()
            })
            .collect();

        Board {
            rows,
            columns,
            cells,
        }
    }

    /// Create a board with every cell dead
    pub fn dead(rows: usize, columns: usize) -> Self {
        Board {
            rows,
            columns,
            cells: vec![vec![Cell::Dead; columns]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Iterate over the rows of the grid, top to bottom.
    pub fn cells(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Number of live cells on the board.
    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_alive())
            .count()
    }

    /// Get the cell at a coordinate.
    pub fn cell_at(&self, row: isize, column: isize) -> Result<Cell, BoardError> {
        let (r, c) = self.index(row, column)?;
        Ok(self.cells[r][c])
    }

    /// Overwrite the cell at a coordinate.
    pub fn set(&mut self, row: isize, column: isize, cell: Cell) -> Result<(), BoardError> {
        let (r, c) = self.index(row, column)?;
        self.cells[r][c] = cell;
        Ok(())
    }

    /// Resolve a signed coordinate to grid indices. The row is checked first.
    fn index(&self, row: isize, column: isize) -> Result<(usize, usize), BoardError> {
        let kind = if row < 0 {
            Some(OutOfBounds::NegativeRow)
        } else if row as usize >= self.rows {
            Some(OutOfBounds::RowTooLarge)
        } else if column < 0 {
            Some(OutOfBounds::NegativeColumn)
        } else if column as usize >= self.columns {
            Some(OutOfBounds::ColumnTooLarge)
        } else {
            None
        };

        match kind {
            Some(kind) => Err(BoardError::OutOfBounds { row, column, kind }),
            None => Ok((row as usize, column as usize)),
        }
    }

    /// Count live neighbors of every cell. Positions off the board count as dead.
    pub fn neighbor_counts(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|row| {
                (0..self.columns)
                    .map(|column| {
                        Position::new(row as isize, column as isize)
                            .neighbors()
                            .filter(|pos| {
                                matches!(self.cell_at(pos.row, pos.column), Ok(Cell::Alive))
                            })
                            .count() as u8
                    })
                    .collect()
            })
            .collect()
    }

    /// Advance one generation. Every transition is computed from the counts of
    /// the current generation before any cell is updated.
    pub fn advance(&mut self) {
        let counts = self.neighbor_counts();
        let mut births = 0usize;
        let mut deaths = 0usize;

        for (row, row_counts) in self.cells.iter_mut().zip(&counts) {
            for (cell, &count) in row.iter_mut().zip(row_counts) {
                let next = cell.next(count);
                match (*cell, next) {
                    (Cell::Dead, Cell::Alive) => births += 1,
                    (Cell::Alive, Cell::Dead) => deaths += 1,
                    _ => {}
                }
                *cell = next;
            }
        }

        trace!(births, deaths, "advanced generation");
    }

    /// Render the board as text: one line per row, one glyph per cell.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.columns * GLYPH_WIDTH + 1));
        for row in &self.cells {
            for cell in row {
                out.push_str(cell.glyph());
            }
            out.push('\n');
        }
        out
    }

    /// Write the board as a text pattern, one character per cell: `*` alive,
    /// `.` dead. Parsing the result yields the same board whenever it has at
    /// least one column.
    pub fn to_pattern(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.columns + 1));
        for row in &self.cells {
            out.extend(row.iter().map(|cell| match cell {
                Cell::Alive => '*',
                Cell::Dead => '.',
            }));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Parse a text pattern: `*`, `O` or `o` is alive, `.` or a space is dead.
///
/// Blank lines before the first and after the last row are ignored, and short
/// rows are padded with dead cells up to the widest row.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        let Some(first) = lines.iter().position(|l| !l.trim().is_empty()) else {
            return Ok(Board::dead(0, 0));
        };
        let last = lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .unwrap_or(first);

        let mut cells = Vec::with_capacity(last - first + 1);
        for (offset, text) in lines[first..=last].iter().enumerate() {
            let line = first + offset + 1;
            let row = text
                .chars()
                .enumerate()
                .map(|(i, ch)| match ch {
                    '*' | 'O' | 'o' => Ok(Cell::Alive),
                    '.' | ' ' => Ok(Cell::Dead),
                    found => Err(BoardError::InvalidPattern {
                        line,
                        column: i + 1,
                        found,
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            cells.push(row);
        }

        let columns = cells.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut cells {
            row.resize(columns, Cell::Dead);
        }

        Ok(Board {
            rows: cells.len(),
            columns,
            cells,
        })
    }
}
