use std::path::PathBuf;

/// Errors that can occur when loading or parsing configuration.
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

    #[error("invalid board dimensions {0:?} (expected ROWS x COLUMNS)")]
    InvalidDimensions(String),

    #[error("Board rows should be from 5 to 9")]
    RowsOutOfRange(u32),

    #[error("Board columns should be from 5 to 9")]
    ColumnsOutOfRange(u32),

    #[error("invalid number of games {0:?}")]
    InvalidGameCount(String),
}

/// Errors from the text console: reading moves and answers, printing output.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed while waiting for {0}")]
    InputClosed(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
