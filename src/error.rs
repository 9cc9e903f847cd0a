use std::path::PathBuf;

/// Errors reported by game operations. None of them change the game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {column} is outside the board (valid columns are 0 to 6)")]
    OutOfBounds { column: i64 },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is finished, no more discs can be inserted")]
    GameFinished,

    #[error("there is no winner")]
    NoWinner,

    #[error("'{input}' is not a column number")]
    InvalidInput { input: String },
}

impl GameError {
    pub fn out_of_bounds(column: usize) -> Self {
        GameError::OutOfBounds {
            column: i64::try_from(column).unwrap_or(i64::MAX),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
