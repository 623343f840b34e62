//! Core Connect Four game logic: board storage, players and scoring, win
//! and draw detection, and the per-session turn state machine.

mod board;
mod controller;
mod evaluator;
mod player;

pub use board::{Board, Cell, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use controller::{Move, MoveError, Phase, TurnController};
pub use evaluator::{evaluate, find_winning_line, Direction, Outcome, WinningLine, WIN_LENGTH};
pub use player::{Player, Roster, Seat, DRAW_POINTS, WIN_POINTS};
