//! # term_life
//!
//! Conway's Game of Life on a bounded grid, drawn in the terminal with Ratatui.
//!
//! ## Modules
//!
//! - [`life`] — Core automaton: cells, neighbor positions, the board and its rule
//! - [`ui`] — Terminal UI: timer-driven app loop and the generation view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`logging`] — Log file setup

pub mod config;
pub mod error;
pub mod life;
pub mod logging;
pub mod ui;
