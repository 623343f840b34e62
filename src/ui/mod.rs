//! Full-screen terminal front-end for a match, built on Ratatui.

mod app;
mod game_view;

pub use app::App;
