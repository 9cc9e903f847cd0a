//! Front ends: a Ratatui terminal UI and a line-oriented stdin driver.

mod app;
mod game_view;
pub mod plain;

pub use app::App;
