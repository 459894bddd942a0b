//! Terminal UI: a timer-driven app loop around the board and the view that
//! draws each generation.

mod app;
pub mod board_widget;
mod life_view;

pub use app::App;
