use gtk4 as gtk;
use libadwaita as adw;

use crate::game::{CardFaces, GameConfig, GameController};

pub struct AppState {
    pub window: Option<adw::ApplicationWindow>,
    pub window_title: Option<adw::WindowTitle>,
    pub score_label: Option<gtk::Label>,
    pub timer_label: Option<gtk::Label>,
    pub dynamic_css_provider: Option<gtk::CssProvider>,
    pub grid_buttons: Vec<gtk::Button>,
    pub timer_handle: Option<glib::SourceId>,
    pub faces: CardFaces,

    pub controller: GameController,
}

impl AppState {
    pub fn new(config: GameConfig) -> Self {
        AppState {
            window: None,
            window_title: None,
            score_label: None,
            timer_label: None,
            dynamic_css_provider: None,
            grid_buttons: Vec::new(),
            timer_handle: None,
            faces: CardFaces::default(),
            controller: GameController::new(config),
        }
    }
}
