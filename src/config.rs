use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::life::LIVE_PROBABILITY;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub simulation: SimulationConfig,
    pub log: LogConfig,
}

/// Where a loaded [`AppConfig`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    /// The config file was missing
    Defaults,
}

/// Size and initial population of the board.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
    /// Probability that a cell starts alive
    pub density: f64,
    /// Seed for the initial population; a fresh one is drawn when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: 40,
            columns: 40,
            density: LIVE_PROBABILITY,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Milliseconds between generations
    pub tick_ms: u64,
    /// Generations printed in headless mode
    pub generations: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            tick_ms: 500,
            generations: 20,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file; the terminal itself belongs to the UI
    pub file: PathBuf,
    /// Fallback filter when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: PathBuf::from("term_life.log"),
            level: "info".to_string(),
        }
    }
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
    /// does not exist. The returned [`ConfigSource`] tells which one was used, so
    /// the caller can report a missing file once its logging is set up.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, ConfigSource::File))
        } else {
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.board.columns == 0 {
            return Err(ConfigError::Validation("board.columns must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.board.density) {
            return Err(ConfigError::Validation(
                "board.density must be in [0, 1]".into(),
            ));
        }
        if self.simulation.tick_ms == 0 {
            return Err(ConfigError::Validation(
                "simulation.tick_ms must be > 0".into(),
            ));
        }
        if self.simulation.generations == 0 {
            return Err(ConfigError::Validation(
                "simulation.generations must be > 0".into(),
            ));
        }
        if self.log.level.trim().is_empty() {
            return Err(ConfigError::Validation("log.level must not be empty".into()));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
rows = 12
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.rows, 12);
        // Other fields should be defaults
        assert_eq!(config.board.columns, 40);
        assert!((config.board.density - 0.2).abs() < 1e-9);
        assert_eq!(config.simulation.tick_ms, 500);
        assert_eq!(config.board.seed, None);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.board.rows, default.board.rows);
        assert_eq!(config.simulation.generations, default.simulation.generations);
        assert_eq!(config.log.file, default.log.file);
    }

    #[test]
    fn test_seed_is_parsed() {
        let config: AppConfig = toml::from_str("[board]\nseed = 1234\n").unwrap();
        assert_eq!(config.board.seed, Some(1234));
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = AppConfig::default();
        config.board.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_columns() {
        let mut config = AppConfig::default();
        config.board.columns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_density_out_of_range() {
        let mut config = AppConfig::default();
        config.board.density = 1.5;
        assert!(config.validate().is_err());
        config.board.density = -0.1;
        assert!(config.validate().is_err());
        config.board.density = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_tick() {
        let mut config = AppConfig::default();
        config.simulation.tick_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_generations() {
        let mut config = AppConfig::default();
        config.simulation.generations = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_log_level() {
        let mut config = AppConfig::default();
        config.log.level = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let (config, source) =
            AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config.board.rows, 40);
    }

    #[test]
    fn test_load_or_default_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("life.toml");
        std::fs::write(&path, "[board]\ncolumns = 64\n").unwrap();

        let (config, source) = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(source, ConfigSource::File);
        assert_eq!(config.board.columns, 64);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("life.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[simulation]
tick_ms = 100

[board]
seed = 7
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.simulation.tick_ms, 100);
        assert_eq!(config.board.seed, Some(7));
        // Others are defaults
        assert_eq!(config.board.columns, 40);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("life.toml");
        std::fs::write(&path, "[board]\nrows = 0\n").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
