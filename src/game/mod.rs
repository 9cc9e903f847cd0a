//! Core Connect Four game logic: board representation, player colours, the
//! game state machine, and the engine that renders each move to a sink.

mod board;
mod engine;
mod player;
mod state;

pub use board::{Board, Cell, COLUMNS, CONNECT, ROWS};
pub use engine::Connect4;
pub use player::PlayerColor;
pub use state::{GameState, GameStatus, Snapshot};

use crate::error::GameError;

/// Parse a user-supplied column index.
///
/// Negative and too-large numbers are reported as `OutOfBounds` with the
/// value the user typed.
pub fn parse_column(input: &str) -> Result<usize, GameError> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| GameError::InvalidInput {
        input: trimmed.to_string(),
    })?;

    match usize::try_from(value) {
        Ok(column) if column < COLUMNS => Ok(column),
        _ => Err(GameError::OutOfBounds { column: value }),
    }
}
