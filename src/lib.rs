//! Endless wrap-around snake: a fixed-tick arcade game for the terminal.
//!
//! The simulation core lives in [`actor`], [`food`], and [`game`]. Rendering,
//! input polling, and terminal lifecycle are thin collaborators over ratatui
//! and crossterm; the core never touches the terminal directly.

pub mod actor;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod terminal_runtime;
pub mod ui;
