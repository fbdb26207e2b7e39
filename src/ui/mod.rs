//! GTK front end. Widgets forward clicks and timer callbacks to the
//! [`GameController`](crate::game::GameController) and apply the effects it
//! returns.

pub mod app;
mod board;
mod debug_tools;
mod dialogs;
mod hud;
mod state;
