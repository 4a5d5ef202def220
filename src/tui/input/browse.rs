use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};
use crate::tui::effects::{COPIED, Effect, OPENING, Task};

use super::typed_char;

pub(super) fn handle_browse(app: &mut App, key: KeyEvent) -> Option<Effect> {
    match key.code {
        KeyCode::Up => {
            app.cursor_up();
            return Some(Effect::Render);
        }
        KeyCode::Down => {
            app.cursor_down();
            return Some(Effect::Render);
        }
        _ => {}
    }

    match typed_char(&key)? {
        'q' => Some(Effect::Quit),
        'c' => {
            let path = app.selected_workspace()?.path();
            Some(Effect::Notify {
                notice: COPIED.to_string(),
                task: Task::CopyPath(path),
                reset_mode: false,
            })
        }
        'o' => {
            let path = app.selected_workspace()?.path();
            Some(Effect::Notify {
                notice: OPENING.to_string(),
                task: Task::OpenWorkspace(path),
                reset_mode: false,
            })
        }
        '/' => {
            app.start_mode(Mode::Filter);
            Some(Effect::Render)
        }
        ':' => {
            app.start_mode(Mode::CommandSelect);
            Some(Effect::Render)
        }
        _ => None,
    }
}
