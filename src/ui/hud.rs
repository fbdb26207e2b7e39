use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gtk4 as gtk;
use gtk4::prelude::*;

use super::dialogs::show_completion_dialog;
use super::state::AppState;
use crate::game::Effect;
use crate::game::labels::{score_label, time_label};

pub(super) fn redraw_button_child(button: &gtk::Button) {
    if let Some(child) = button.child() {
        child.queue_draw();
    }
}

pub(super) fn stop_timer(st: &mut AppState) {
    if let Some(handle) = st.timer_handle.take() {
        handle.remove();
    }
}

fn start_timer(state: &Rc<RefCell<AppState>>, round: u64, interval: Duration) {
    let mut st = state.borrow_mut();
    // A batch held back by the completion dialog can be older than the
    // current round.
    if st.controller.round() != round {
        return;
    }
    stop_timer(&mut st);

    let state_clone = state.clone();
    let handle = glib::timeout_add_local(interval, move || {
        let effects = state_clone.borrow_mut().controller.on_tick(round);
        apply_effects(&state_clone, effects);
        glib::ControlFlow::Continue
    });
    st.timer_handle = Some(handle);
}

fn schedule_flip_back(state: &Rc<RefCell<AppState>>, round: u64, delay: Duration) {
    let state_clone = state.clone();
    glib::timeout_add_local_once(delay, move || {
        let effects = state_clone.borrow_mut().controller.on_flip_back_elapsed(round);
        apply_effects(&state_clone, effects);
    });
}

fn reset_board_buttons(st: &AppState) {
    for button in &st.grid_buttons {
        button.remove_css_class("matched");
        button.remove_css_class("active");
        button.set_sensitive(true);
        redraw_button_child(button);
    }
}

fn with_button(st: &AppState, index: usize, update: impl FnOnce(&gtk::Button)) {
    if let Some(button) = st.grid_buttons.get(index) {
        update(button);
        redraw_button_child(button);
    }
}

/// Applies controller output to the widgets in order. A completed round
/// holds back the rest of the batch until the dialog is dismissed.
pub(super) fn apply_effects(state: &Rc<RefCell<AppState>>, effects: Vec<Effect>) {
    let mut pending = effects.into_iter();
    while let Some(effect) = pending.next() {
        state.borrow_mut().faces.apply(&effect);
        match effect {
            Effect::ResetBoard => reset_board_buttons(&state.borrow()),
            Effect::ShowSymbol { index, .. } => {
                with_button(&state.borrow(), index, |button| button.add_css_class("active"));
            }
            Effect::HideCell(index) => {
                with_button(&state.borrow(), index, |button| {
                    button.remove_css_class("active");
                });
            }
            Effect::DisableCell(index) => {
                with_button(&state.borrow(), index, |button| {
                    button.remove_css_class("active");
                    button.add_css_class("matched");
                    button.set_sensitive(false);
                });
            }
            Effect::ScoreChanged(score) => {
                if let Some(label) = &state.borrow().score_label {
                    label.set_text(&score_label(score));
                }
            }
            Effect::TimeChanged(seconds) => {
                if let Some(label) = &state.borrow().timer_label {
                    label.set_text(&time_label(seconds));
                }
            }
            Effect::StartTick { round, interval } => start_timer(state, round, interval),
            Effect::StopTick => stop_timer(&mut state.borrow_mut()),
            Effect::ScheduleFlipBack { round, delay } => schedule_flip_back(state, round, delay),
            Effect::RoundComplete { seconds } => {
                show_completion_dialog(state, seconds, pending.collect());
                return;
            }
        }
    }
}

pub(super) fn handle_tile_click(state: &Rc<RefCell<AppState>>, index: usize) {
    let effects = state.borrow_mut().controller.on_cell_activated(index);
    apply_effects(state, effects);
}

pub(super) fn start_new_game(state: &Rc<RefCell<AppState>>) {
    let effects = state.borrow_mut().controller.on_new_game_requested();
    apply_effects(state, effects);
}

pub(super) fn build_hud(state: &Rc<RefCell<AppState>>) -> gtk::Box {
    let hud = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    hud.add_css_class("memoria-hud");
    hud.set_hexpand(true);

    let score = gtk::Label::builder()
        .label(score_label(0))
        .halign(gtk::Align::Start)
        .hexpand(true)
        .css_classes(vec!["memoria-hud-label", "title-4"])
        .build();

    let timer = gtk::Label::builder()
        .label(time_label(0))
        .halign(gtk::Align::End)
        .hexpand(true)
        .css_classes(vec!["memoria-hud-label", "title-4"])
        .build();

    hud.append(&score);
    hud.append(&timer);

    let mut st = state.borrow_mut();
    st.score_label = Some(score);
    st.timer_label = Some(timer);

    hud
}
