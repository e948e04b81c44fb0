use std::path::PathBuf;

/// Errors that can occur when applying a move to the board.
///
/// Both variants are recoverable: the board is never mutated when a move is
/// rejected, so the caller may pick another column or stop issuing moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The requested column is full or out of range.
    #[error("column {column} is not a legal move")]
    InvalidMove { column: usize },

    /// A player already has four in a row.
    #[error("someone won this game already")]
    GameAlreadyOver,
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
