//! # Connect Four
//!
//! Two-player Connect Four for the terminal. Players take turns dropping
//! pieces into a board of 5 to 9 rows and columns; four in a row in any
//! direction wins. A match can span several games, with the opening player
//! alternating and scores carried over (2 points for a win, 1 each for a
//! draw).
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players and scoring, win detection,
//!   turn state machine
//! - [`console`] — Line-based text console: prompts, board drawing, match loop
//! - [`ui`] — Full-screen terminal UI built with Ratatui
//! - [`config`] — TOML configuration and board-size parsing
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod ui;
