//! Terminal UI: an interactive game view built on Ratatui, plus a plain
//! text mode that prints the board and reads moves from stdin.

mod app;
mod game_view;
pub mod text;

pub use app::App;
