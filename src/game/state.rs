use super::{Board, PlayerColor, COLUMNS, ROWS};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerColor),
    Draw,
}

impl GameStatus {
    /// `Won` and `Draw` are terminal; nothing leaves them.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Read-only view of a game handed to renderers.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub board: &'a Board,
    pub current_player: PlayerColor,
    pub status: GameStatus,
}

/// The Connect Four state machine: grid, turn, and status. No I/O.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: PlayerColor,
    status: GameStatus,
    discs: usize,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: PlayerColor::Red, // Red starts
            status: GameStatus::InProgress,
            discs: 0,
        }
    }

    /// Colour due to play next
    pub fn current_player(&self) -> PlayerColor {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn number_of_discs(&self) -> usize {
        self.discs
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Winning colour, or `NoWinner` unless the game was won.
    pub fn winner(&self) -> Result<PlayerColor, GameError> {
        match self.status {
            GameStatus::Won(color) => Ok(color),
            GameStatus::InProgress | GameStatus::Draw => Err(GameError::NoWinner),
        }
    }

    /// Get list of columns that still accept a disc
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_finished() {
            return Vec::new();
        }

        (0..COLUMNS)
            .filter(|&column| !self.board.is_column_full(column))
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            board: &self.board,
            current_player: self.current_player,
            status: self.status,
        }
    }

    /// Drop the current player's disc into `column` and return the landing row.
    ///
    /// A rejected move leaves the state untouched.
    pub fn insert_disc(&mut self, column: usize) -> Result<usize, GameError> {
        if self.is_finished() {
            return Err(GameError::GameFinished);
        }
        if column >= COLUMNS {
            return Err(GameError::out_of_bounds(column));
        }

        let row = self.board.drop_disc(column, self.current_player)?;
        self.discs += 1;

        if self.board.check_win(column, row) {
            self.status = GameStatus::Won(self.current_player);
        } else if self.discs == COLUMNS * ROWS {
            self.status = GameStatus::Draw;
        } else {
            self.current_player = self.current_player.other();
        }

        Ok(row)
    }

    /// Flip the active colour without placing a disc.
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.other();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), PlayerColor::Red);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.number_of_discs(), 0);
        assert!(!state.is_finished());
        assert_eq!(state.legal_columns().len(), COLUMNS);
    }

    #[test]
    fn test_insert_disc() {
        let mut state = GameState::initial();
        let row = state.insert_disc(3).unwrap();

        assert_eq!(row, 0);
        assert_eq!(state.current_player(), PlayerColor::Green);
        assert_eq!(state.board().get(3, 0), Cell::Occupied(PlayerColor::Red));
        assert_eq!(state.number_of_discs(), 1);
    }

    #[test]
    fn test_finished_game_rejects_any_column() {
        let mut state = GameState::initial();
        for _ in 0..4 {
            state.insert_disc(0).unwrap();
            state.switch_player();
        }
        assert!(state.is_finished());
        let before = state;

        assert_eq!(state.insert_disc(9), Err(GameError::GameFinished));
        assert_eq!(state.insert_disc(COLUMNS), Err(GameError::GameFinished));
        assert_eq!(state.insert_disc(1), Err(GameError::GameFinished));
        assert_eq!(state, before);
    }

    #[test]
    fn test_rejected_move_leaves_state_unchanged() {
        let mut state = GameState::initial();
        for _ in 0..ROWS {
            state.insert_disc(0).unwrap();
        }
        let before = state;

        assert_eq!(state.insert_disc(0), Err(GameError::ColumnFull { column: 0 }));
        assert_eq!(state.insert_disc(99), Err(GameError::OutOfBounds { column: 99 }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red wins with a horizontal line, Green stacks on top
        for column in 0..4 {
            state.insert_disc(column).unwrap(); // Red
            if column < 3 {
                state.insert_disc(column).unwrap(); // Green
            }
        }

        assert!(state.is_finished());
        assert_eq!(state.status(), GameStatus::Won(PlayerColor::Red));
        assert_eq!(state.winner(), Ok(PlayerColor::Red));
        // The winner stays the current player
        assert_eq!(state.current_player(), PlayerColor::Red);
        assert!(state.legal_columns().is_empty());
    }

    #[test]
    fn test_winner_while_in_progress() {
        let state = GameState::initial();
        assert_eq!(state.winner(), Err(GameError::NoWinner));
    }

    #[test]
    fn test_switch_player_touches_only_turn() {
        let mut state = GameState::initial();
        state.insert_disc(2).unwrap();
        let discs = state.number_of_discs();
        let board = *state.board();

        state.switch_player();
        assert_eq!(state.current_player(), PlayerColor::Red);
        assert_eq!(state.number_of_discs(), discs);
        assert_eq!(state.board(), &board);
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::initial();

        // Columns filled in the order 0,1,4,5 / 2,3,6 with alternating colours
        // leave no line of four anywhere.
        for &column in &[0, 1, 4, 5, 2, 3, 6] {
            for _ in 0..ROWS {
                state.insert_disc(column).unwrap();
            }
            if column == 5 {
                state.switch_player();
            }
        }

        assert_eq!(state.number_of_discs(), COLUMNS * ROWS);
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.winner(), Err(GameError::NoWinner));
        assert_eq!(state.insert_disc(0), Err(GameError::GameFinished));
    }
}
