mod browse;
mod command;
mod filter;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};
use super::effects::Effect;

use browse::handle_browse;
use command::handle_command;
use filter::handle_filter;

/// Handle a key event in the current mode, returning the effect it schedules
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Effect> {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return None;
    }

    // Ctrl-C quits from every mode
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Effect::Quit);
    }

    match app.mode {
        Mode::Browse => handle_browse(app, key),
        Mode::Filter => handle_filter(app, key),
        Mode::CommandSelect => handle_command(app, key),
    }
}

/// A printable character typed without Ctrl or Alt. Shift is allowed since
/// some terminals report it alongside symbols like `:`.
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}
