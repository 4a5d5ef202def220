use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Somewhere to put copied text
pub trait Clipboard {
    fn set_text(&self, text: &str) -> io::Result<()>;
}

/// The system clipboard, reached through the platform's copy utility.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> io::Result<()> {
        let (program, args) = copy_command()?;
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(text.as_bytes())?;
        }
        // Close stdin so the utility sees EOF.
        drop(child.stdin.take());
        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!("{} exited with {}", program, status)))
        }
    }
}

fn copy_command() -> io::Result<(&'static str, &'static [&'static str])> {
    #[cfg(target_os = "macos")]
    return Ok(("pbcopy", &[]));
    #[cfg(target_os = "linux")]
    return Ok(("xclip", &["-selection", "clipboard"]));
    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    return Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "no clipboard utility for this platform",
    ));
}
