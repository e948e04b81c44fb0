use std::path::Path;

use crate::error::ConfigError;
use crate::game::Cell;

/// Display symbols for rendering cells, one glyph per cell state.
///
/// The defaults reproduce the classic board print: a blank for empty cells,
/// a filled circle for White and an open circle for Black.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub empty_symbol: String,
    pub white_symbol: String,
    pub black_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            empty_symbol: " ".to_string(),
            white_symbol: "\u{25cf}".to_string(),
            black_symbol: "\u{25ef}".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Glyph for the given cell
    pub fn symbol(&self, cell: Cell) -> &str {
        match cell {
            Cell::Empty => &self.empty_symbol,
            Cell::White => &self.white_symbol,
            Cell::Black => &self.black_symbol,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
///
/// Board dimensions are deliberately not configurable; the game is defined
/// on a 6x7 grid.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(
                path = %path.display(),
                "config file not found, using defaults"
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// Every symbol must be exactly one character so the board columns line
    /// up, and the two players must not share a glyph.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, symbol) in [
            ("display.empty_symbol", &self.display.empty_symbol),
            ("display.white_symbol", &self.display.white_symbol),
            ("display.black_symbol", &self.display.black_symbol),
        ] {
            if symbol.chars().count() != 1 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be exactly one character"
                )));
            }
        }
        if self.display.white_symbol == self.display.black_symbol {
            return Err(ConfigError::Validation(
                "display.white_symbol and display.black_symbol must differ".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
