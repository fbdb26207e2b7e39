use std::cell::RefCell;
use std::rc::Rc;

use gtk4::gdk;

use super::hud::apply_effects;
use super::state::AppState;
use crate::debug::{self, DEBUG_ENV, debug_mode_enabled};

pub fn handle_debug_shortcut(
    state: &Rc<RefCell<AppState>>,
    key: gdk::Key,
    mods: gdk::ModifierType,
) -> bool {
    if !mods.contains(gdk::ModifierType::CONTROL_MASK) {
        return false;
    }
    let want_shift = mods.contains(gdk::ModifierType::SHIFT_MASK);

    let is_debug_key = match key {
        gdk::Key::N | gdk::Key::n => true,
        gdk::Key::R | gdk::Key::r => want_shift,
        _ => false,
    };
    if !is_debug_key {
        return false;
    }

    if !debug_mode_enabled() {
        show_debug_banner(state, &format!("DEBUG OFF | export {DEBUG_ENV}=1"));
        return true;
    }

    match key {
        gdk::Key::N | gdk::Key::n => {
            let prepared = state.borrow_mut().controller.debug_prepare_near_win();
            match prepared {
                Some(effects) => {
                    apply_effects(state, effects);
                    debug::log("Board", "Board prepared: one pair left.");
                    show_debug_banner(state, "DEBUG | Near-win ready");
                }
                None => {
                    debug::log("Board", "Near-win failed: no unmatched pair found.");
                    show_debug_banner(state, "DEBUG | Near-win failed");
                }
            }
            true
        }
        _ => {
            let effects = state.borrow_mut().controller.debug_reshuffle_hidden();
            debug::log("Board", format!("Reshuffled {} hidden cards.", effects.len()));
            apply_effects(state, effects);
            show_debug_banner(state, "DEBUG | Hidden cards reshuffled");
            true
        }
    }
}

fn show_debug_banner(state: &Rc<RefCell<AppState>>, message: &str) {
    if let Some(title) = &state.borrow().window_title {
        title.set_subtitle(message);
    }
    let state_weak = Rc::downgrade(state);
    glib::timeout_add_local_once(std::time::Duration::from_millis(1200), move || {
        if let Some(state) = state_weak.upgrade()
            && let Some(title) = &state.borrow().window_title
        {
            title.set_subtitle("");
        }
    });
}
