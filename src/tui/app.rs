use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::text::Text;

use crate::io::catalog::{Catalog, load_catalog};
use crate::io::clipboard::SystemClipboard;
use crate::io::config_io::Settings;
use crate::io::editor::ExternalEditor;
use crate::io::process::TerminalLauncher;
use crate::io::store::Store;
use crate::model::Workspace;

use super::effects::{Effect, EffectError, EffectRunner, Message};
use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Filter,
    CommandSelect,
}

/// Entries of the command menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddCheckpoint,
    ViewCheckpoints,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 2] = [MenuCommand::AddCheckpoint, MenuCommand::ViewCheckpoints];

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::AddCheckpoint => "add checkpoint",
            MenuCommand::ViewCheckpoints => "view checkpoints",
        }
    }
}

/// The last rendered frame: main pane above the separator, footer below
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Panes {
    pub main: Text<'static>,
    pub footer: Text<'static>,
}

/// Main application state
pub struct App {
    pub catalog: Catalog,
    pub mode: Mode,
    /// Browse cursor (index into the catalog)
    pub cursor: usize,
    /// Filter cursor (index into `filtered`)
    pub filter_cursor: usize,
    pub command_cursor: usize,
    pub filter_query: String,
    /// Catalog indices matching `filter_query`; empty while the query is empty
    pub filtered: Vec<usize>,
    pub commands: Vec<MenuCommand>,
    pub panes: Panes,
    pub theme: Theme,
    /// Height of the main pane in rows
    pub max_rows: usize,
    /// Program named in the "open" hint
    pub ide: String,
    pub should_quit: bool,
    /// The runtime error that ended the session, if any
    pub failure: Option<EffectError>,
}

impl App {
    pub fn new(catalog: Catalog, theme: Theme, max_rows: usize, ide: impl Into<String>) -> Self {
        App {
            catalog,
            mode: Mode::Browse,
            cursor: 0,
            filter_cursor: 0,
            command_cursor: 0,
            filter_query: String::new(),
            filtered: Vec::new(),
            commands: MenuCommand::ALL.to_vec(),
            panes: Panes::default(),
            theme,
            max_rows: max_rows.max(1),
            ide: ide.into(),
            should_quit: false,
            failure: None,
        }
    }

    /// Apply a message to the state, returning the follow-up effect if any.
    pub fn update(&mut self, message: Message) -> Option<Effect> {
        match message {
            Message::Key(key) => input::handle_key(self, key),
            Message::Render(panes) => {
                self.panes = panes;
                None
            }
            Message::RenderThen { panes, then } => {
                self.panes = panes;
                Some(then)
            }
            Message::Settled { reset_mode } => {
                if reset_mode {
                    self.reset_mode();
                }
                Some(Effect::Render)
            }
            Message::Quit => {
                self.should_quit = true;
                None
            }
            Message::Failed(err) => {
                tracing::error!(error = %err, "runtime error, shutting down");
                self.panes.main = render::panes::error_text(self, &err);
                self.should_quit = true;
                self.failure = Some(err);
                None
            }
        }
    }

    pub fn start_mode(&mut self, mode: Mode) {
        match mode {
            Mode::Filter => {
                self.filter_cursor = 0;
                self.filter_query.clear();
                self.filtered.clear();
            }
            Mode::CommandSelect => self.command_cursor = 0,
            Mode::Browse => {}
        }
        self.mode = mode;
    }

    /// Return to Browse. Leaving Filter carries the selected match over to
    /// the browse cursor.
    pub fn reset_mode(&mut self) {
        match self.mode {
            Mode::Filter => {
                if let Some(&index) = self.filtered.get(self.filter_cursor) {
                    self.cursor = index;
                }
                self.filter_cursor = 0;
                self.filter_query.clear();
                self.filtered.clear();
            }
            Mode::CommandSelect => self.command_cursor = 0,
            Mode::Browse => {}
        }
        self.mode = Mode::Browse;
    }

    /// Recompute the filtered list after the query changed.
    pub fn refilter(&mut self) {
        self.filtered = self.catalog.filter(&self.filter_query);
        self.filter_cursor = 0;
    }

    pub fn cursor_up(&mut self) {
        match self.mode {
            Mode::Browse => self.cursor = wrap_up(self.cursor, self.catalog.len()),
            Mode::Filter => self.filter_cursor = wrap_up(self.filter_cursor, self.filtered.len()),
            Mode::CommandSelect => {
                self.command_cursor = wrap_up(self.command_cursor, self.commands.len())
            }
        }
    }

    pub fn cursor_down(&mut self) {
        match self.mode {
            Mode::Browse => self.cursor = wrap_down(self.cursor, self.catalog.len()),
            Mode::Filter => {
                self.filter_cursor = wrap_down(self.filter_cursor, self.filtered.len())
            }
            Mode::CommandSelect => {
                self.command_cursor = wrap_down(self.command_cursor, self.commands.len())
            }
        }
    }

    /// The workspace under the browse cursor
    pub fn selected_workspace(&self) -> Option<&Workspace> {
        self.catalog.get(self.cursor)
    }

    pub fn selected_command(&self) -> Option<MenuCommand> {
        self.commands.get(self.command_cursor).copied()
    }

    /// The list the main pane shows and the cursor within it.
    /// Filtering with an empty query shows the whole catalog at the browse
    /// cursor, which is the row kept on return.
    pub fn visible(&self) -> (Vec<&Workspace>, usize) {
        let all = || -> Vec<&Workspace> { self.catalog.workspaces().iter().collect() };
        match self.mode {
            Mode::Filter if !self.filter_query.is_empty() => (
                self.filtered
                    .iter()
                    .filter_map(|&i| self.catalog.get(i))
                    .collect(),
                self.filter_cursor,
            ),
            Mode::Browse | Mode::CommandSelect | Mode::Filter => (all(), self.cursor),
        }
    }
}

/// Step a cursor up, wrapping from the top to the last index.
pub fn wrap_up(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if cursor == 0 {
        len - 1
    } else {
        (cursor - 1).min(len - 1)
    }
}

/// Step a cursor down, wrapping past the last index to 0.
pub fn wrap_down(cursor: usize, len: usize) -> usize {
    if cursor + 1 >= len { 0 } else { cursor + 1 }
}

/// Run the TUI application
pub fn run(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(&settings.root)?;
    let mut store = Store::open(&settings.store)?;
    let editor = ExternalEditor::from_command_line(&settings.editor)
        .ok_or_else(|| format!("invalid editor command '{}'", settings.editor))?;
    tracing::info!(
        root = %settings.root.display(),
        workspaces = catalog.len(),
        "starting browser"
    );

    let theme = Theme::from_config(&settings.ui);
    let mut app = App::new(catalog, theme, settings.max_rows, settings.ide.clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = {
        let mut runner = EffectRunner {
            store: &mut store,
            editor: &editor,
            clipboard: &SystemClipboard,
            launcher: &TerminalLauncher,
            ide: &settings.ide,
            hold: settings.message_timeout,
        };
        run_event_loop(&mut terminal, &mut app, &mut runner)
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let closed = store.close();
    result?;
    closed?;
    match app.failure.take() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    runner: &mut EffectRunner,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut pending = Some(Effect::Render);
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if app.should_quit {
            break;
        }

        let message = match pending.take() {
            Some(effect) => {
                let hands_off_terminal = matches!(effect, Effect::AddCheckpoint(_));
                let message = runner.run(effect, app);
                if hands_off_terminal {
                    terminal.clear()?;
                }
                message
            }
            None => next_key()?,
        };

        if let Some(message) = message {
            pending = app.update(message);
        }
    }
    Ok(())
}

fn next_key() -> io::Result<Option<Message>> {
    if event::poll(Duration::from_millis(250))?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(Some(Message::Key(key)));
    }
    Ok(None)
}
