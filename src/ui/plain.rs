//! Line-oriented driver: one command per input line.
//!
//! A number inserts a disc into that column, `s` switches the player and `q`
//! quits. Errors are reported on the game's output and play continues.

use std::io::{self, BufRead, Write};

use crate::game::{parse_column, Connect4, GameStatus};

pub fn run<R: BufRead, W: Write>(input: R, game: &mut Connect4<W>) -> io::Result<GameStatus> {
    let symbol = game.current_player().symbol();
    writeln!(game.output_mut(), "Player {symbol} turn")?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "s" | "switch" => {
                game.switch_player();
                let symbol = game.current_player().symbol();
                writeln!(game.output_mut(), "Player {symbol} turn")?;
            }
            command => {
                if let Err(err) = parse_column(command).and_then(|column| game.insert_disc(column)) {
                    writeln!(game.output_mut(), "Error: {err}")?;
                }
            }
        }

        if game.is_finished() {
            break;
        }
    }

    Ok(game.status())
}
