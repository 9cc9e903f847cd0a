//! Plain-text board rendering for the engine's output sink.

use std::fmt::Write as _;
use std::io;

use serde::{Deserialize, Serialize};

use crate::game::{Cell, GameStatus, PlayerColor, Snapshot, COLUMNS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// `R`, `G` and a blank for empty cells
    #[default]
    Ascii,
    /// Filled and hollow disc glyphs
    Unicode,
}

impl DisplayStyle {
    fn symbol(self, cell: Cell) -> char {
        match (self, cell) {
            (_, Cell::Empty) => ' ',
            (DisplayStyle::Ascii, Cell::Occupied(color)) => color.symbol(),
            (DisplayStyle::Unicode, Cell::Occupied(PlayerColor::Red)) => '\u{25cf}',
            (DisplayStyle::Unicode, Cell::Occupied(PlayerColor::Green)) => '\u{25cb}',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    style: DisplayStyle,
    announce_turn: bool,
}

impl TextRenderer {
    pub fn new(style: DisplayStyle, announce_turn: bool) -> Self {
        TextRenderer {
            style,
            announce_turn,
        }
    }

    /// Render the board top row first, one `|R|G| |...|` line per row,
    /// followed by a status line.
    pub fn render(&self, snapshot: &Snapshot<'_>) -> String {
        let mut text = String::with_capacity((COLUMNS * 2 + 2) * (ROWS + 1));

        for row in (0..ROWS).rev() {
            text.push('|');
            for column in 0..COLUMNS {
                text.push(self.style.symbol(snapshot.board.get(column, row)));
                text.push('|');
            }
            text.push('\n');
        }

        match snapshot.status {
            GameStatus::Won(winner) => {
                let _ = writeln!(text, "{} wins", winner.symbol());
            }
            GameStatus::Draw => text.push_str("It's a draw\n"),
            GameStatus::InProgress if self.announce_turn => {
                let _ = writeln!(text, "Player {} turn", snapshot.current_player.symbol());
            }
            GameStatus::InProgress => {}
        }

        text
    }

    pub fn write<W: io::Write>(&self, out: &mut W, snapshot: &Snapshot<'_>) -> io::Result<()> {
        out.write_all(self.render(snapshot).as_bytes())?;
        out.flush()
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(DisplayStyle::Ascii, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;

    #[test]
    fn test_render_empty_board() {
        let state = GameState::initial();
        let text = TextRenderer::default().render(&state.snapshot());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), ROWS + 1);
        for line in &lines[..ROWS] {
            assert_eq!(*line, "| | | | | | | |");
        }
        assert_eq!(lines[ROWS], "Player R turn");
    }

    #[test]
    fn test_render_bottom_row_last() {
        let mut state = GameState::initial();
        state.insert_disc(0).unwrap();
        state.insert_disc(0).unwrap();
        state.insert_disc(6).unwrap();

        let text = TextRenderer::default().render(&state.snapshot());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[ROWS - 1], "|R| | | | | |R|");
        assert_eq!(lines[ROWS - 2], "|G| | | | | | |");
        assert_eq!(lines[ROWS], "Player G turn");
    }

    #[test]
    fn test_render_winner() {
        let mut state = GameState::initial();
        for _ in 0..4 {
            state.insert_disc(2).unwrap();
            state.switch_player();
        }
        let text = TextRenderer::default().render(&state.snapshot());
        assert!(text.ends_with("R wins\n"));
    }

    #[test]
    fn test_render_unicode_without_turn() {
        let mut state = GameState::initial();
        state.insert_disc(1).unwrap();
        state.insert_disc(2).unwrap();

        let text = TextRenderer::new(DisplayStyle::Unicode, false).render(&state.snapshot());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[ROWS - 1], "| |\u{25cf}|\u{25cb}| | | | |");
    }

    #[test]
    fn test_style_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            style: DisplayStyle,
        }
        let parsed: Wrapper = toml::from_str("style = \"unicode\"").unwrap();
        assert_eq!(parsed.style, DisplayStyle::Unicode);
    }
}
