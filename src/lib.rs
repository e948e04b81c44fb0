//! # Connect Four
//!
//! A two-player Connect Four game for the terminal, with an interactive
//! Ratatui UI and a plain text mode.
//!
//! ## Modules
//!
//! - [`game`]: core game logic, gravity placement, win detection
//! - [`ui`]: terminal UI with a game view and a plain text mode
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
