//! Toolkit-free game rules. The controller owns all round state and answers
//! every event with a list of [`Effect`]s for the presentation layer.

pub mod board;
pub mod config;
pub mod controller;
pub mod faces;
pub mod labels;

pub use board::{Board, GRID_COLS, GRID_ROWS, HIDDEN_FACE, MATCH_SIZE, SYMBOLS, Tile, TileStatus};
pub use config::GameConfig;
pub use controller::{Effect, GameController};
pub use faces::CardFaces;
