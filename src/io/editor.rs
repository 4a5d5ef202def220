use std::io;
use std::path::Path;

use tempfile::TempPath;

/// An external editor the checkpoint flow can hand the terminal to.
pub trait Editor {
    /// Program to execute
    fn command(&self) -> &str;
    /// Create an empty scratch file. It is deleted when the handle drops.
    fn create_temp_file(&self) -> io::Result<TempPath>;
    /// Arguments that open `path` for editing
    fn open_args(&self, path: &Path) -> Vec<String>;
}

/// Any editor that takes the file to open as its last argument
/// (`hx`, `vim`, `nvim`, `nano`, `code --wait`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalEditor {
    program: String,
    args: Vec<String>,
}

impl ExternalEditor {
    /// Parse a command line such as `"code --wait"`. Returns `None` if it is blank.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(ExternalEditor {
            program,
            args: parts.collect(),
        })
    }
}

impl Editor for ExternalEditor {
    fn command(&self) -> &str {
        &self.program
    }

    fn create_temp_file(&self) -> io::Result<TempPath> {
        let file = tempfile::Builder::new()
            .prefix("checkpoint-")
            .suffix(".md")
            .tempfile()?;
        Ok(file.into_temp_path())
    }

    fn open_args(&self, path: &Path) -> Vec<String> {
        let mut args = self.args.clone();
        args.push(path.display().to_string());
        args
    }
}
