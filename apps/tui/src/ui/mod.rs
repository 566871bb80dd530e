pub mod layout;
pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    if app.show_help {
        screens::help::render_help(f);
        return;
    }
    screens::compare::render_compare(app, f);
}
