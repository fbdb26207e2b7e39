use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use gio::SimpleAction;
use gtk4 as gtk;
use gtk4::prelude::*;
use libadwaita as adw;
use adw::prelude::*;

use super::board::{CONTENT_MARGIN, build_board_grid};
use super::debug_tools;
use super::dialogs::{show_about_dialog, show_instructions_dialog};
use super::hud::{build_hud, start_new_game, stop_timer};
use super::state::AppState;
use crate::debug;
use crate::game::GameConfig;

const APP_ID: &str = "io.github.memoria.Memoria";

pub fn run() -> glib::ExitCode {
    glib::set_prgname(Some(APP_ID));
    let app = adw::Application::builder().application_id(APP_ID).build();

    app.connect_activate(move |app| {
        load_css();

        let config = GameConfig::from_env();
        match config.seed {
            Some(seed) => debug::log("Config", format!("Shuffle seed {seed}")),
            None => debug::log("Config", "Shuffle seed from thread rng"),
        }
        let state = Rc::new(RefCell::new(AppState::new(config)));

        install_actions(app, &state);

        let dynamic_css_provider = gtk::CssProvider::new();
        if let Some(display) = gtk::gdk::Display::default() {
            gtk::style_context_add_provider_for_display(
                &display,
                &dynamic_css_provider,
                gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }
        state.borrow_mut().dynamic_css_provider = Some(dynamic_css_provider);

        let window_title = adw::WindowTitle::new("Memoria", "");
        let header = adw::HeaderBar::builder()
            .title_widget(&window_title)
            .build();
        header.add_css_class("flat");

        let new_game_button = gtk::Button::with_label("New Game");
        new_game_button.set_tooltip_text(Some("Shuffle and start over"));
        new_game_button.set_action_name(Some("app.new-game"));
        header.pack_start(&new_game_button);

        let menu_model = gio::Menu::new();
        menu_model.append(Some("Instructions"), Some("app.instructions"));
        menu_model.append(Some("About Memoria"), Some("app.about"));
        menu_model.append(Some("Quit"), Some("app.quit"));
        let menu_button = gtk::MenuButton::builder()
            .icon_name("open-menu-symbolic")
            .menu_model(&menu_model)
            .build();
        header.pack_end(&menu_button);

        let game_view = build_game_view(&state);

        let toolbar = adw::ToolbarView::new();
        toolbar.add_top_bar(&header);
        toolbar.set_content(Some(&game_view));

        let win = adw::ApplicationWindow::builder()
            .application(app)
            .title("Memoria")
            .default_width(480)
            .default_height(580)
            .content(&toolbar)
            .build();
        win.set_size_request(320, 400);

        let style_manager = adw::StyleManager::default();
        apply_theme_class(&win, style_manager.is_dark());
        style_manager.connect_notify_local(Some("dark"), {
            let win = win.clone();
            move |manager, _| apply_theme_class(&win, manager.is_dark())
        });

        {
            let mut st = state.borrow_mut();
            st.window = Some(win.clone());
            st.window_title = Some(window_title);
        }

        let global_key = gtk::EventControllerKey::new();
        global_key.set_propagation_phase(gtk::PropagationPhase::Capture);
        global_key.connect_key_pressed({
            let state = state.clone();
            move |_, key, _, mods| {
                if debug_tools::handle_debug_shortcut(&state, key, mods) {
                    return glib::Propagation::Stop;
                }
                glib::Propagation::Proceed
            }
        });
        win.add_controller(global_key);

        win.connect_close_request({
            let state = state.clone();
            move |_| {
                stop_timer(&mut state.borrow_mut());
                glib::Propagation::Proceed
            }
        });

        win.present();
        start_new_game(&state);
    });

    app.run()
}

fn install_actions(app: &adw::Application, state: &Rc<RefCell<AppState>>) {
    let new_game_action = SimpleAction::new("new-game", None);
    new_game_action.connect_activate({
        let state = state.clone();
        move |_, _| start_new_game(&state)
    });
    app.add_action(&new_game_action);
    app.set_accels_for_action("app.new-game", &["<Control>r", "F5"]);

    let instructions_action = SimpleAction::new("instructions", None);
    instructions_action.connect_activate({
        let app = app.clone();
        move |_, _| {
            show_instructions_dialog(&app);
        }
    });
    app.add_action(&instructions_action);

    let about_action = SimpleAction::new("about", None);
    about_action.connect_activate({
        let app = app.clone();
        move |_, _| {
            show_about_dialog(&app);
        }
    });
    app.add_action(&about_action);

    let quit_action = SimpleAction::new("quit", None);
    quit_action.connect_activate({
        let app = app.clone();
        move |_, _| app.quit()
    });
    app.add_action(&quit_action);
    app.set_accels_for_action("app.quit", &["<Control>q"]);
}

fn apply_theme_class(win: &adw::ApplicationWindow, dark: bool) {
    if dark {
        win.remove_css_class("theme-light");
        win.add_css_class("theme-dark");
    } else {
        win.remove_css_class("theme-dark");
        win.add_css_class("theme-light");
    }
}

fn load_css() {
    static RESOURCES_INIT: Once = Once::new();
    RESOURCES_INIT.call_once(|| {
        gio::resources_register_include!("memoria.gresource")
            .expect("failed to register embedded resources");
    });

    let Some(display) = gtk::gdk::Display::default() else {
        return;
    };

    for resource_path in [
        "/io/github/memoria/Memoria/style.css",
        "/io/github/memoria/Memoria/style.dark.css",
    ] {
        let provider = gtk::CssProvider::new();
        provider.load_from_resource(resource_path);
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

fn build_game_view(state: &Rc<RefCell<AppState>>) -> gtk::Box {
    let content = gtk::Box::new(gtk::Orientation::Vertical, 12);
    content.set_hexpand(true);
    content.set_vexpand(true);
    content.set_margin_top(CONTENT_MARGIN);
    content.set_margin_bottom(CONTENT_MARGIN);
    content.set_margin_start(CONTENT_MARGIN);
    content.set_margin_end(CONTENT_MARGIN);

    let hud = build_hud(state);
    content.append(&hud);

    let board_grid = build_board_grid(state);
    let board_frame = gtk::AspectFrame::new(0.5, 0.5, 1.0, false);
    board_frame.set_halign(gtk::Align::Fill);
    board_frame.set_valign(gtk::Align::Fill);
    board_frame.set_hexpand(true);
    board_frame.set_vexpand(true);
    board_frame.set_child(Some(&board_grid));
    content.append(&board_frame);

    content
}
