//! Line-oriented text console: reading moves and answers, drawing the board,
//! asking for match settings, and running a multi-game match.

pub mod game_loop;
pub mod input;
pub mod render;
pub mod setup;

pub use game_loop::{Match, MatchReport};
pub use input::{Command, LineInput, MoveSource};
pub use render::render_board;
pub use setup::{configure, MatchSetup};
