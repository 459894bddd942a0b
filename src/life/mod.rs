//! Cellular-automaton engine: cell states, neighbor positions, and the board
//! that advances one synchronous generation at a time.

mod board;
mod cell;
mod position;

pub use board::{Board, LIVE_PROBABILITY};
pub use cell::{Cell, GLYPH_WIDTH};
pub use position::Position;
