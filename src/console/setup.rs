use std::io::{BufRead, Write};

use tracing::debug;

use super::input::LineInput;
use crate::config::{parse_dimensions, parse_game_count, AppConfig, Dimensions};
use crate::error::{ConfigError, ConsoleError};
use crate::game::Roster;

/// Everything a match needs before the first session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSetup {
    pub roster: Roster,
    pub dimensions: Dimensions,
    pub games: u32,
}

/// Complete the match settings, asking on the console for whatever the
/// configuration leaves unset.
///
/// Invalid answers are reported and asked again. An invalid configured board
/// size is returned as an error rather than asked for.
pub fn configure<R: BufRead, W: Write>(
    config: &AppConfig,
    input: &mut LineInput<R>,
    out: &mut W,
) -> Result<MatchSetup, ConsoleError> {
    writeln!(out, "Connect Four")?;

    let first = match &config.first_player {
        Some(name) => name.clone(),
        None => ask(input, out, "First player's name:", "the first player's name")?,
    };
    let second = match &config.second_player {
        Some(name) => name.clone(),
        None => ask(input, out, "Second player's name:", "the second player's name")?,
    };

    let dimensions = match config.dimensions()? {
        Some(dimensions) => dimensions,
        None => ask_dimensions(input, out)?,
    };

    let games = match config.games {
        Some(games) if games > 0 => games,
        _ => ask_game_count(input, out)?,
    };

    debug!(%first, %second, %dimensions, games, "match configured");
    Ok(MatchSetup {
        roster: Roster::new(first, second),
        dimensions,
        games,
    })
}

fn ask<R: BufRead, W: Write>(
    input: &mut LineInput<R>,
    out: &mut W,
    prompt: &str,
    waiting_for: &str,
) -> Result<String, ConsoleError> {
    writeln!(out, "{prompt}")?;
    out.flush()?;
    input.read_line(waiting_for)
}

fn ask_dimensions<R: BufRead, W: Write>(
    input: &mut LineInput<R>,
    out: &mut W,
) -> Result<Dimensions, ConsoleError> {
    loop {
        let answer = ask(
            input,
            out,
            "Set the board dimensions (Rows x Columns)\nPress Enter for default (6 x 7)",
            "the board dimensions",
        )?;
        match parse_dimensions(&answer) {
            Ok(dimensions) => return Ok(dimensions),
            Err(err @ (ConfigError::RowsOutOfRange(_) | ConfigError::ColumnsOutOfRange(_))) => {
                writeln!(out, "{err}")?;
            }
            Err(_) => writeln!(out, "Invalid input")?,
        }
    }
}

fn ask_game_count<R: BufRead, W: Write>(
    input: &mut LineInput<R>,
    out: &mut W,
) -> Result<u32, ConsoleError> {
    loop {
        let answer = ask(
            input,
            out,
            "Do you want to play single or multiple games?\n\
             For a single game, input 1 or press Enter\n\
             Input a number of games:",
            "the number of games",
        )?;
        match parse_game_count(&answer) {
            Ok(games) => return Ok(games),
            Err(_) => writeln!(out, "Invalid input")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(config: &AppConfig, answers: &str) -> (Result<MatchSetup, ConsoleError>, String) {
        let mut input = LineInput::new(Cursor::new(answers.to_string()));
        let mut out = Vec::new();
        let result = configure(config, &mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_all_defaults_from_prompts() {
        let (setup, transcript) = run(&AppConfig::default(), "Anna\nJoan\n\n\n");
        let setup = setup.unwrap();
        assert_eq!(setup.roster.first().name, "Anna");
        assert_eq!(setup.roster.second().name, "Joan");
        assert_eq!(setup.dimensions, Dimensions::default());
        assert_eq!(setup.games, 1);
        assert!(transcript.starts_with("Connect Four\nFirst player's name:\n"));
    }

    #[test]
    fn test_reprompts_until_valid() {
        let (setup, transcript) = run(
            &AppConfig::default(),
            "Anna\nJoan\nfoo\n4x7\n6x10\n 9 x 5 \nzero\n0\n3\n",
        );
        let setup = setup.unwrap();
        assert_eq!(setup.dimensions, Dimensions { rows: 9, columns: 5 });
        assert_eq!(setup.games, 3);

        let errors: Vec<&str> = transcript
            .lines()
            .filter(|l| l.starts_with("Invalid") || l.starts_with("Board"))
            .collect();
        assert_eq!(
            errors,
            vec![
                "Invalid input",
                "Board rows should be from 5 to 9",
                "Board columns should be from 5 to 9",
                "Invalid input",
                "Invalid input",
            ]
        );
    }

    #[test]
    fn test_configured_values_skip_prompts() {
        let config = AppConfig {
            first_player: Some("Anna".into()),
            second_player: Some("Joan".into()),
            board: Some("5x5".into()),
            games: Some(2),
        };
        let (setup, transcript) = run(&config, "");
        let setup = setup.unwrap();
        assert_eq!(setup.dimensions, Dimensions { rows: 5, columns: 5 });
        assert_eq!(setup.games, 2);
        assert_eq!(transcript, "Connect Four\n");
    }

    #[test]
    fn test_bad_configured_board_is_rejected() {
        let config = AppConfig {
            board: Some("3x3".into()),
            ..AppConfig::default()
        };
        let (setup, transcript) = run(&config, "Anna\nJoan\n\n\n");
        assert!(matches!(
            setup,
            Err(ConsoleError::Config(ConfigError::RowsOutOfRange(3)))
        ));
        assert!(!transcript.contains("Set the board dimensions"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (setup, _) = run(&AppConfig::default(), "Anna\n");
        assert!(matches!(
            setup,
            Err(ConsoleError::InputClosed(what)) if what == "the second player's name"
        ));
    }
}
