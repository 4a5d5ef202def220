use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;
use crate::tui::effects::Effect;

use super::typed_char;

pub(super) fn handle_filter(app: &mut App, key: KeyEvent) -> Option<Effect> {
    match key.code {
        // Commit the selection and return to Browse
        KeyCode::Esc | KeyCode::Enter => app.reset_mode(),
        KeyCode::Backspace => {
            app.filter_query.pop();
            app.refilter();
        }
        KeyCode::Up => app.cursor_up(),
        KeyCode::Down => app.cursor_down(),
        _ => {
            let c = typed_char(&key)?;
            app.filter_query.push(c);
            app.refilter();
        }
    }
    Some(Effect::Render)
}

#[cfg(test)]
mod tests {
    use super::super::handle_key;
    use super::*;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    use crate::tui::app::Mode;
    use crate::tui::render::test_helpers::app_with;

    fn press(app: &mut App, code: KeyCode) -> Option<Effect> {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn filtered_names(app: &App) -> Vec<String> {
        app.filtered
            .iter()
            .map(|&i| app.catalog.get(i).unwrap().name.clone())
            .collect()
    }

    #[test]
    fn typing_refilters_and_resets_cursor() {
        let mut app = app_with(&["alpha", "beta", "alphabet"]);
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "al");
        assert_eq!(filtered_names(&app), vec!["alpha", "alphabet"]);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.filter_cursor, 1);
        assert_eq!(press(&mut app, KeyCode::Char('p')), Some(Effect::Render));
        assert_eq!(app.filter_query, "alp");
        assert_eq!(app.filter_cursor, 0);
    }

    #[test]
    fn q_is_text_not_quit() {
        let mut app = app_with(&["quartz", "beta"]);
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(press(&mut app, KeyCode::Char('q')), Some(Effect::Render));
        assert_eq!(app.mode, Mode::Filter);
        assert_eq!(filtered_names(&app), vec!["quartz"]);
    }

    #[test]
    fn backspace_to_empty_clears_filtered_list() {
        let mut app = app_with(&["alpha", "beta"]);
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "b");
        assert_eq!(filtered_names(&app), vec!["beta"]);

        press(&mut app, KeyCode::Backspace);
        assert!(app.filter_query.is_empty());
        assert!(app.filtered.is_empty());
        // Backspace on an empty query is harmless
        assert_eq!(press(&mut app, KeyCode::Backspace), Some(Effect::Render));
    }

    #[test]
    fn navigation_wraps_within_matches() {
        let mut app = app_with(&["alpha", "beta", "gamma"]);
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "a");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.filter_cursor, app.filtered.len() - 1);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.filter_cursor, 0);
    }

    #[test]
    fn enter_and_esc_carry_selection_to_browse() {
        for exit in [KeyCode::Enter, KeyCode::Esc] {
            let mut app = app_with(&["alpha", "beta", "gamma"]);
            press(&mut app, KeyCode::Char('/'));
            type_str(&mut app, "mm");
            assert_eq!(press(&mut app, exit), Some(Effect::Render));
            assert_eq!(app.mode, Mode::Browse);
            assert_eq!(app.selected_workspace().unwrap().name, "gamma");
            assert!(app.filter_query.is_empty());
        }
    }

    #[test]
    fn filtering_beta_from_scenario_catalog() {
        let mut app = app_with(&["beta", "alpha"]);
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "b");
        assert_eq!(filtered_names(&app), vec!["beta"]);
    }

    #[test]
    fn control_chars_are_not_typed() {
        let mut app = app_with(&["alpha"]);
        press(&mut app, KeyCode::Char('/'));
        let effect = handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT),
        );
        assert_eq!(effect, None);
        assert!(app.filter_query.is_empty());
    }
}
