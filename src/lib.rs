pub mod debug;
pub mod game;

#[cfg(feature = "gui")]
pub mod ui;
