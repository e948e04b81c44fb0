//! Core Connect Four game logic: the board state machine with gravity
//! placement, turn tracking, and four-in-a-row detection.

mod board;
mod player;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;

pub use crate::error::MoveError;
