use std::fmt;
use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLUMNS, DEFAULT_ROWS};

/// Smallest accepted board side.
pub const MIN_SIDE: u32 = 5;
/// Largest accepted board side.
pub const MAX_SIDE: u32 = 9;

/// Validated board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} X {}", self.rows, self.columns)
    }
}

/// Parse a `ROWS x COLUMNS` string such as `"6x7"` or `" 9 X 5 "`.
///
/// Empty text selects the 6 x 7 default. Rows are range-checked before
/// columns, so a string with both out of range reports the rows.
pub fn parse_dimensions(text: &str) -> Result<Dimensions, ConfigError> {
    if text.is_empty() {
        return Ok(Dimensions::default());
    }

    let invalid = || ConfigError::InvalidDimensions(text.to_string());
    let (rows, columns) = text.split_once(['x', 'X']).ok_or_else(invalid)?;
    let rows = parse_side(rows).ok_or_else(invalid)?;
    let columns = parse_side(columns).ok_or_else(invalid)?;

    if !(MIN_SIDE..=MAX_SIDE).contains(&rows) {
        return Err(ConfigError::RowsOutOfRange(rows));
    }
    if !(MIN_SIDE..=MAX_SIDE).contains(&columns) {
        return Err(ConfigError::ColumnsOutOfRange(columns));
    }

    Ok(Dimensions {
        rows: rows as usize,
        columns: columns as usize,
    })
}

/// Digits with optional surrounding whitespace. Numbers too large for `u32`
/// saturate so that they fail the range check rather than the syntax check.
fn parse_side(text: &str) -> Option<u32> {
    let digits = text.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

/// Parse the number of games to play. Empty text means a single game.
pub fn parse_game_count(text: &str) -> Result<u32, ConfigError> {
    if text.is_empty() {
        return Ok(1);
    }

    let well_formed = text.bytes().all(|b| b.is_ascii_digit()) && !text.starts_with('0');
    if !well_formed {
        return Err(ConfigError::InvalidGameCount(text.to_string()));
    }
    text.parse()
        .map_err(|_| ConfigError::InvalidGameCount(text.to_string()))
}

/// Match settings, loadable from TOML. Anything left unset is asked for
/// interactively when the match starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub first_player: Option<String>,
    pub second_player: Option<String>,
    /// Board size as `ROWS x COLUMNS`.
    pub board: Option<String>,
    pub games: Option<u32>,
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
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dimensions()?;
        if self.games == Some(0) {
            return Err(ConfigError::Validation("games must be > 0".into()));
        }
        for (key, name) in [
            ("first_player", &self.first_player),
            ("second_player", &self.second_player),
        ] {
            if name.as_deref().is_some_and(|n| n.trim().is_empty()) {
                return Err(ConfigError::Validation(format!("{key} must not be blank")));
            }
        }
        Ok(())
    }

    /// Parsed board size, if one is configured.
    pub fn dimensions(&self) -> Result<Option<Dimensions>, ConfigError> {
        self.board.as_deref().map(parse_dimensions).transpose()
    }

    /// A fully populated example configuration as TOML.
    pub fn example_toml() -> String {
        let example = AppConfig {
            first_player: Some("Anna".into()),
            second_player: Some("Joan".into()),
            board: Some(Dimensions::default().to_string()),
            games: Some(1),
        };
        toml::to_string_pretty(&example).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_dimensions() {
        assert_eq!(parse_dimensions("").unwrap(), Dimensions { rows: 6, columns: 7 });
        assert_eq!(Dimensions::default().to_string(), "6 X 7");
    }

    #[test]
    fn test_parse_dimensions_with_whitespace_and_case() {
        assert_eq!(parse_dimensions("5x9").unwrap(), Dimensions { rows: 5, columns: 9 });
        assert_eq!(
            parse_dimensions("  9 X 5\t").unwrap(),
            Dimensions { rows: 9, columns: 5 }
        );
        assert_eq!(parse_dimensions("7 x 8").unwrap(), Dimensions { rows: 7, columns: 8 });
    }

    #[test]
    fn test_parse_dimensions_rejects_malformed() {
        for text in ["6", "x7", "6x", "6 by 7", "6x7x8", "-6x7", "six x seven", " "] {
            assert!(
                matches!(parse_dimensions(text), Err(ConfigError::InvalidDimensions(_))),
                "{text:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_dimensions_range_checks_rows_first() {
        assert!(matches!(parse_dimensions("4x7"), Err(ConfigError::RowsOutOfRange(4))));
        assert!(matches!(parse_dimensions("10x10"), Err(ConfigError::RowsOutOfRange(10))));
        assert!(matches!(parse_dimensions("6x4"), Err(ConfigError::ColumnsOutOfRange(4))));
        assert!(matches!(
            parse_dimensions("6x99999999999"),
            Err(ConfigError::ColumnsOutOfRange(u32::MAX))
        ));
    }

    #[test]
    fn test_parse_game_count() {
        assert_eq!(parse_game_count("").unwrap(), 1);
        assert_eq!(parse_game_count("1").unwrap(), 1);
        assert_eq!(parse_game_count("12").unwrap(), 12);
        for text in ["0", "01", "-3", "two", " 3", "99999999999"] {
            assert!(parse_game_count(text).is_err(), "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_partial_toml_leaves_rest_unset() {
        let toml_str = r#"
first_player = "Anna"
board = "5 x 5"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.first_player.as_deref(), Some("Anna"));
        assert_eq!(config.second_player, None);
        assert_eq!(config.games, None);
        assert_eq!(
            config.dimensions().unwrap(),
            Some(Dimensions { rows: 5, columns: 5 })
        );
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let config = AppConfig {
            games: Some(0),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_board() {
        let config = AppConfig {
            board: Some("3x3".into()),
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::RowsOutOfRange(3))));
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let config = AppConfig {
            second_player: Some("  ".into()),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
second_player = "Joan"
games = 3
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.second_player.as_deref(), Some("Joan"));
        assert_eq!(config.games, Some(3));
        assert_eq!(config.dimensions().unwrap(), None);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "board = \"6 x 12\"\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::ColumnsOutOfRange(12))
        ));
    }

    #[test]
    fn test_example_toml_roundtrips() {
        let toml_str = AppConfig::example_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("example config should be valid");
        assert_eq!(config.games, Some(1));
    }
}
