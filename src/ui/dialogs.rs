use std::cell::{Cell, RefCell};
use std::rc::Rc;

use libadwaita as adw;

use adw::prelude::*;

use super::hud::apply_effects;
use super::state::AppState;
use crate::game::Effect;
use crate::game::labels::{COMPLETION_TITLE, completion_message};

/// Shows the end-of-round dialog; `next_round` is applied once it is closed.
pub(super) fn show_completion_dialog(
    state: &Rc<RefCell<AppState>>,
    seconds: u32,
    next_round: Vec<Effect>,
) {
    let dialog = adw::AlertDialog::new(Some(COMPLETION_TITLE), Some(&completion_message(seconds)));
    dialog.add_response("ok", "OK");
    dialog.set_default_response(Some("ok"));
    dialog.set_close_response("ok");

    let pending = Cell::new(Some(next_round));
    let state_next = state.clone();
    dialog.connect_response(None, move |_, _| {
        if let Some(effects) = pending.take() {
            apply_effects(&state_next, effects);
        }
    });

    let window = state.borrow().window.clone();
    dialog.present(window.as_ref());
}

pub fn show_instructions_dialog(app: &adw::Application) -> adw::AlertDialog {
    let dialog = adw::AlertDialog::new(
        Some("Instructions"),
        Some(
            "Flip two cards per turn to find matching pairs.\n\
Matched pairs stay face up; other cards turn back after a second.\n\
Clear the board as fast as you can.",
        ),
    );
    dialog.add_response("ok", "Got it");
    dialog.set_default_response(Some("ok"));
    dialog.set_close_response("ok");
    dialog.present(app.active_window().as_ref());
    dialog
}

pub fn show_about_dialog(app: &adw::Application) -> adw::AboutDialog {
    let dialog = adw::AboutDialog::builder()
        .application_name("Memoria")
        .version(env!("CARGO_PKG_VERSION"))
        .comments("A memory game for finding pairs.")
        .build();
    dialog.present(app.active_window().as_ref());
    dialog
}
