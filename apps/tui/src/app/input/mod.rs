mod mouse;

use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub use mouse::handle_mouse;

pub fn handle_input(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.quit(),
            KeyCode::Char('u') => app.form.focused_mut().clear(),
            _ => {}
        }
        return;
    }

    if key.code == KeyCode::F(1) {
        app.show_help = !app.show_help;
        return;
    }

    // Help covers the whole screen; only closing keys reach it.
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.show_help = false;
        }
        return;
    }

    // The error popup blocks the form until dismissed.
    if app.error.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.dismiss_error();
        }
        return;
    }

    match key.code {
        KeyCode::Tab => app.form.focus_next(),
        KeyCode::BackTab => app.form.focus_prev(),
        KeyCode::Down => app.form.focused_mut().highlight_next(),
        KeyCode::Up => app.form.focused_mut().highlight_prev(),
        KeyCode::Enter => {
            if !app.form.focused_mut().accept_highlighted() {
                app.compare();
            }
        }
        KeyCode::Esc => {
            if app.form.any_open() {
                app.form.hide_suggestions();
            } else {
                app.quit();
            }
        }
        KeyCode::Backspace => app.form.backspace(&app.store),
        KeyCode::Char(ch) => app.form.insert_char(&app.store, ch),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::handle_input;
    use crate::app::App;
    use crate::config::AppConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use statradar_core::{ChartConfig, DatasetStore};
    use std::path::PathBuf;

    const DATASET: &str = include_str!("../../../../../data/pokemon.json");

    pub(super) fn app() -> App {
        let config = AppConfig {
            data_path: PathBuf::from("data/pokemon.json"),
            log_path: PathBuf::from("statradar.log"),
            chart: ChartConfig::default(),
            debug: false,
        };
        App::new(&config, DatasetStore::from_json(DATASET).unwrap(), None)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_input(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn typing_opens_suggestions_and_enter_accepts() {
        let mut app = app();

        type_text(&mut app, "char");
        assert!(app.form.focused().is_open());

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.form.focused().text(), "Charmeleon");
        assert!(!app.form.any_open());
        assert!(app.chart.is_empty());
    }

    #[test]
    fn enter_without_highlight_compares() {
        let mut app = app();

        type_text(&mut app, "Pikachu");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Bulbasaur");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.chart.datasets.len(), 2);
        assert!(app.error.is_none());
    }

    #[test]
    fn error_popup_swallows_keys_until_dismissed() {
        let mut app = app();

        type_text(&mut app, "Missingno");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Bulbasaur");
        press(&mut app, KeyCode::Enter);
        assert!(app.error.is_some());

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.form.focused().text(), "Bulbasaur");

        press(&mut app, KeyCode::Esc);
        assert!(app.error.is_none());
        assert!(app.running);
    }

    #[test]
    fn esc_closes_panel_before_quitting() {
        let mut app = app();

        type_text(&mut app, "sq");
        press(&mut app, KeyCode::Esc);
        assert!(app.running);
        assert!(!app.form.any_open());

        press(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }

    #[test]
    fn ctrl_shortcuts() {
        let mut app = app();
        type_text(&mut app, "Mew");

        handle_input(&mut app, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.form.focused().text(), "");

        handle_input(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn f1_toggles_help() {
        let mut app = app();

        press(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.form.focused().text(), "");
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(app.running);
    }
}
