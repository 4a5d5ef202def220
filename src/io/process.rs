use std::io;
use std::process::{Command, ExitStatus, Stdio};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

/// Runs external programs on behalf of the browser.
pub trait ProcessLauncher: Sync {
    /// Hand the terminal to `program` and block until it exits.
    fn run_foreground(&self, program: &str, args: &[String]) -> io::Result<ExitStatus>;
    /// Run `program` detached from the terminal and block until it exits.
    fn run_background(&self, program: &str, args: &[String]) -> io::Result<ExitStatus>;
}

/// Launcher for a crossterm session in raw mode on the alternate screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalLauncher;

impl ProcessLauncher for TerminalLauncher {
    fn run_foreground(&self, program: &str, args: &[String]) -> io::Result<ExitStatus> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;

        let status = Command::new(program).args(args).status();

        // Restore the TUI even when the launch failed.
        execute!(io::stdout(), EnterAlternateScreen)?;
        enable_raw_mode()?;
        status
    }

    fn run_background(&self, program: &str, args: &[String]) -> io::Result<ExitStatus> {
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
    }
}
