use std::path::PathBuf;

/// Which bound a coordinate violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OutOfBounds {
    #[error("row must not be negative")]
    NegativeRow,

    #[error("column must not be negative")]
    NegativeColumn,

    #[error("row exceeds dimension")]
    RowTooLarge,

    #[error("column exceeds dimension")]
    ColumnTooLarge,
}

/// Errors that can occur when addressing or building a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {column}) is out of bounds: {kind}")]
    OutOfBounds {
        row: isize,
        column: isize,
        kind: OutOfBounds,
    },

    #[error("invalid pattern character {found:?} at line {line}, column {column}")]
    InvalidPattern {
        line: usize,
        column: usize,
        found: char,
    },
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
