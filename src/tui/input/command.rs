use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, MenuCommand};
use crate::tui::effects::{Effect, NO_WORKSPACE, Task, VIEW_CHECKPOINTS_PLACEHOLDER};

pub(super) fn handle_command(app: &mut App, key: KeyEvent) -> Option<Effect> {
    match key.code {
        KeyCode::Esc => {
            app.reset_mode();
            Some(Effect::Render)
        }
        KeyCode::Up => {
            app.cursor_up();
            Some(Effect::Render)
        }
        KeyCode::Down => {
            app.cursor_down();
            Some(Effect::Render)
        }
        // The menu stays up until the command's effect settles
        KeyCode::Enter => app.selected_command().map(|cmd| execute(app, cmd)),
        _ => None,
    }
}

fn execute(app: &App, cmd: MenuCommand) -> Effect {
    match cmd {
        MenuCommand::AddCheckpoint => match app.selected_workspace() {
            Some(ws) => Effect::AddCheckpoint(ws.clone()),
            None => Effect::Notify {
                notice: NO_WORKSPACE.to_string(),
                task: Task::Hold,
                reset_mode: true,
            },
        },
        MenuCommand::ViewCheckpoints => Effect::Notify {
            notice: VIEW_CHECKPOINTS_PLACEHOLDER.to_string(),
            task: Task::Hold,
            reset_mode: true,
        },
    }
}
