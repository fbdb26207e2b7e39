fn main() -> glib::ExitCode {
    memoria::ui::app::run()
}
