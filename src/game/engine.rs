use std::io::Write;

use tracing::{debug, info, warn};

use super::{GameState, GameStatus, PlayerColor, Snapshot};
use crate::error::GameError;
use crate::render::TextRenderer;

/// A game bound to an output sink.
///
/// Every accepted move is followed by a render of the board to the sink.
/// Sink failures are logged and otherwise ignored.
pub struct Connect4<W: Write> {
    state: GameState,
    output: W,
    renderer: TextRenderer,
}

impl<W: Write> Connect4<W> {
    pub fn new(output: W) -> Self {
        Self::with_renderer(output, TextRenderer::default())
    }

    pub fn with_renderer(output: W, renderer: TextRenderer) -> Self {
        Connect4 {
            state: GameState::initial(),
            output,
            renderer,
        }
    }

    pub fn insert_disc(&mut self, column: usize) -> Result<usize, GameError> {
        let player = self.state.current_player();
        let row = self.state.insert_disc(column)?;
        debug!(player = player.name(), column, row, "disc inserted");

        match self.state.status() {
            GameStatus::Won(winner) => info!(winner = winner.name(), "game won"),
            GameStatus::Draw => info!("game drawn"),
            GameStatus::InProgress => {}
        }

        if let Err(err) = self.renderer.write(&mut self.output, &self.state.snapshot()) {
            warn!(error = %err, "failed to render board");
        }

        Ok(row)
    }

    pub fn switch_player(&mut self) {
        self.state.switch_player();
        debug!(player = self.state.current_player().name(), "turn switched");
    }

    pub fn current_player(&self) -> PlayerColor {
        self.state.current_player()
    }

    pub fn number_of_discs(&self) -> usize {
        self.state.number_of_discs()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn winner(&self) -> Result<PlayerColor, GameError> {
        self.state.winner()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }

    /// Start a fresh game on the same sink.
    pub fn reset(&mut self) {
        self.state = GameState::initial();
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
