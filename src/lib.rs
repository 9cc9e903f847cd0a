//! # Connect Four
//!
//! A two-player Connect Four engine: a fixed 7x6 grid, gravity-based disc
//! placement, turn alternation, and win/draw detection in all four
//! directions. Ships with a plain-text renderer and a Ratatui terminal UI.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player colour, state machine, engine
//! - [`render`] — Plain-text board rendering for the engine's output sink
//! - [`ui`] — Terminal UI and line-oriented driver
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — `tracing` subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod render;
pub mod ui;

pub use error::GameError;
pub use game::{Connect4, GameState, GameStatus, PlayerColor, COLUMNS, ROWS};
