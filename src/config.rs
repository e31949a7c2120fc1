use std::path::Path;

use tracing::warn;

use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;
use crate::game::RenderMode;

/// Construction-time game settings, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid dimension N
    pub board_size: usize,
    /// Initial presentation mode, forwarded to the renderer
    pub render_mode: RenderMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            render_mode: RenderMode::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board_size must be >= {MIN_BOARD_SIZE}"
            )));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board_size must be <= {MAX_BOARD_SIZE}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board_size, 15);
        assert_eq!(config.render_mode, RenderMode::Canvas);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("render_mode = \"dom\"").unwrap();
        assert_eq!(config.render_mode, RenderMode::Cells);
        assert_eq!(config.board_size, DEFAULT_BOARD_SIZE);
    }

    #[test]
    fn test_validation_rejects_small_board() {
        let config = GameConfig {
            board_size: 4,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_large_board() {
        let config = GameConfig {
            board_size: 27,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result: Result<GameConfig, _> = toml::from_str("board_size = \"big\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_toml_roundtrip() {
        let toml_str = GameConfig::default_toml();
        let config: GameConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gobang.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "board_size = 19").unwrap();
        writeln!(f, "render_mode = \"cells\"").unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.board_size, 19);
        assert_eq!(config.render_mode, RenderMode::Cells);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gobang.toml");
        std::fs::write(&path, "board_size = 3\n").unwrap();

        let err = GameConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let path = Path::new("/nonexistent/path/gobang.toml");
        let config = GameConfig::load_or_default(path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = GameConfig::load(Path::new("/nonexistent/path/gobang.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
