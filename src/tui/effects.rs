//! Effects: deferred work scheduled by a state transition.
//!
//! `App::update` consumes a [`Message`] and returns at most one [`Effect`].
//! The event loop hands that effect to an [`EffectRunner`], which performs it
//! (possibly blocking on a subprocess or a sleep) and produces the next
//! message. Only one effect is ever in flight.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::thread;
use std::time::Duration;

use crossterm::event::KeyEvent;

use crate::io::clipboard::Clipboard;
use crate::io::editor::Editor;
use crate::io::process::ProcessLauncher;
use crate::io::store::{CheckpointStore, StoreError};
use crate::model::Workspace;

use super::app::{App, Panes};
use super::render::panes;

pub const COPIED: &str = "📋 copied path to clipboard";
pub const OPENING: &str = "💻 opening workspace";
pub const NO_CHECKPOINT_DATA: &str = "❎ no checkpoint data received";
pub const CHECKPOINT_INSERTED: &str = "✅ checkpoint inserted";
pub const NO_WORKSPACE: &str = "❎ no workspace selected";
pub const VIEW_CHECKPOINTS_PLACEHOLDER: &str = "🚧 viewing checkpoints is not available yet";

/// Input to `App::update`
#[derive(Debug)]
pub enum Message {
    Key(KeyEvent),
    /// Replace both panes
    Render(Panes),
    /// Replace both panes, then run `then`
    RenderThen { panes: Panes, then: Effect },
    /// A transient message has been shown long enough
    Settled { reset_mode: bool },
    Quit,
    /// Unrecoverable error: show it and stop
    Failed(EffectError),
}

/// Deferred work returned by a state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Recompute both panes from the current state
    Render,
    /// Show `notice`, then perform `task` and hold the notice on screen
    Notify {
        notice: String,
        task: Task,
        reset_mode: bool,
    },
    /// Perform `task`, wait out the display duration, then settle
    Perform { task: Task, reset_mode: bool },
    /// Write a checkpoint for the workspace in an external editor
    AddCheckpoint(Workspace),
    Quit,
}

/// Blocking I/O done while a transient message is visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Hold,
    CopyPath(PathBuf),
    OpenWorkspace(PathBuf),
}

/// Error type for effects that end the session
#[derive(Debug, thiserror::Error)]
pub enum EffectError {
    #[error("could not create scratch file: {0}")]
    ScratchFile(#[source] io::Error),
    #[error("exec '{program}': {source}")]
    EditorLaunch {
        program: String,
        source: io::Error,
    },
    #[error("exec '{program}': {status}")]
    EditorExit { program: String, status: ExitStatus },
    #[error("could not read {path}: {source}")]
    ReadScratch { path: PathBuf, source: io::Error },
    #[error("could not save checkpoint: {0}")]
    Store(#[from] StoreError),
}

/// Performs effects against the outside world.
pub struct EffectRunner<'a> {
    pub store: &'a mut dyn CheckpointStore,
    pub editor: &'a dyn Editor,
    pub clipboard: &'a dyn Clipboard,
    pub launcher: &'a dyn ProcessLauncher,
    /// Program that opens a workspace directory
    pub ide: &'a str,
    /// How long a transient message stays up
    pub hold: Duration,
}

impl EffectRunner<'_> {
    /// Perform `effect`, returning the message it resolves to.
    pub fn run(&mut self, effect: Effect, app: &App) -> Option<Message> {
        match effect {
            Effect::Render => Some(Message::Render(panes::compose(app))),
            Effect::Notify {
                notice,
                task,
                reset_mode,
            } => Some(Message::RenderThen {
                panes: panes::notice(app, &notice),
                then: Effect::Perform { task, reset_mode },
            }),
            Effect::Perform { task, reset_mode } => {
                self.perform(task);
                Some(Message::Settled { reset_mode })
            }
            Effect::AddCheckpoint(workspace) => {
                Some(match self.add_checkpoint(&workspace, app) {
                    Ok(message) => message,
                    Err(err) => Message::Failed(err),
                })
            }
            Effect::Quit => Some(Message::Quit),
        }
    }

    /// Do the task, keeping the current frame up for at least `hold`.
    fn perform(&self, task: Task) {
        match task {
            Task::Hold => thread::sleep(self.hold),
            Task::CopyPath(path) => {
                if let Err(e) = self.clipboard.set_text(&path.display().to_string()) {
                    tracing::warn!(path = %path.display(), error = %e, "clipboard write failed");
                }
                thread::sleep(self.hold);
            }
            Task::OpenWorkspace(path) => {
                let args = vec![path.display().to_string()];
                tracing::info!(program = self.ide, path = %path.display(), "opening workspace");
                let (launcher, ide) = (self.launcher, self.ide);
                let status = thread::scope(|s| {
                    let launch = s.spawn(|| launcher.run_background(ide, &args));
                    thread::sleep(self.hold);
                    launch.join()
                });
                match status {
                    Ok(Ok(status)) if !status.success() => {
                        tracing::warn!(program = self.ide, %status, "workspace opener failed");
                    }
                    Ok(Err(e)) => {
                        tracing::warn!(program = self.ide, error = %e, "could not launch workspace opener");
                    }
                    Err(_) => tracing::warn!(program = self.ide, "workspace opener thread panicked"),
                    Ok(Ok(_)) => {}
                }
            }
        }
    }

    /// Editor round-trip: scratch file, editor in the foreground, then store
    /// whatever was written.
    fn add_checkpoint(&mut self, workspace: &Workspace, app: &App) -> Result<Message, EffectError> {
        let scratch = self
            .editor
            .create_temp_file()
            .map_err(EffectError::ScratchFile)?;
        let program = self.editor.command().to_string();
        let args = self.editor.open_args(&scratch);

        tracing::info!(program = %program, workspace = %workspace.name, "launching editor");
        let status = self
            .launcher
            .run_foreground(&program, &args)
            .map_err(|e| EffectError::EditorLaunch {
                program: program.clone(),
                source: e,
            })?;
        if !status.success() {
            return Err(EffectError::EditorExit { program, status });
        }

        let bytes = fs::read(&scratch).map_err(|e| EffectError::ReadScratch {
            path: scratch.to_path_buf(),
            source: e,
        })?;
        // Invalid UTF-8 is replaced, not rejected.
        let data = String::from_utf8_lossy(&bytes);
        let notice = if data.trim().is_empty() {
            tracing::info!(workspace = %workspace.name, "editor returned no checkpoint data");
            NO_CHECKPOINT_DATA
        } else {
            self.store.insert_checkpoint(workspace, &data)?;
            CHECKPOINT_INSERTED
        };

        Ok(Message::RenderThen {
            panes: panes::notice(app, notice),
            then: Effect::Perform {
                task: Task::Hold,
                reset_mode: true,
            },
        })
    }
}
