use crate::life::Board;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget;

pub fn render(frame: &mut Frame, board: &Board, generation: u64) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Board
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, board, generation, chunks[0]);
    board_widget::render_board(frame, board, chunks[1]);
    render_footer(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, board: &Board, generation: u64, area: Rect) {
    let status = format!(
        "Conway's Game of Life — generation {}  |  population {}",
        generation,
        board.population()
    );

    let header = Paragraph::new(status)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new("(press any key to quit)")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}
