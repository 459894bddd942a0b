use crate::life::{Board, Cell};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Lines for a board, one styled span per cell, using the board's glyphs.
pub fn board_lines(board: &Board) -> Vec<Line<'static>> {
    board
        .cells()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&cell| match cell {
                    Cell::Alive => Span::styled(cell.glyph(), Style::default().fg(Color::Green)),
                    Cell::Dead => Span::raw(cell.glyph()),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Render the board (no borders) into the given area.
pub fn render_board(frame: &mut Frame, board: &Board, area: Rect) {
    let widget = Paragraph::new(board_lines(board));
    frame.render_widget(widget, area);
}
