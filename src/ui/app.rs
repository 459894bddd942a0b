use crate::life::Board;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct App {
    board: Board,
    generation: u64,
    tick: Duration,
    should_quit: bool,
}

impl App {
    pub fn new(board: Board, tick: Duration) -> Self {
        App {
            board,
            generation: 0,
            tick,
            should_quit: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Generations advanced since the app started
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop: redraw, wait for input until the next tick, and
    /// advance the board whenever a tick elapses.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!(tick_ms = self.tick.as_millis() as u64, "simulation started");
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| self.render(f))?;

            let timeout = self.tick.saturating_sub(last_tick.elapsed());
            self.handle_events(timeout)?;
            if self.should_quit {
                break;
            }

            if last_tick.elapsed() >= self.tick {
                self.on_tick();
                last_tick = Instant::now();
            }
        }

        info!(generation = self.generation, "simulation stopped");
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Any key press quits; release and repeat events are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Press {
            debug!(code = ?key.code, "quit requested");
            self.should_quit = true;
        }
    }

    /// Advance the board one generation
    pub fn on_tick(&mut self) {
        self.board.advance();
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.board.population(),
            "tick"
        );
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::life_view::render(frame, &self.board, self.generation);
    }
}
