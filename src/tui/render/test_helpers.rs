use chrono::{DateTime, TimeZone, Utc};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::text::Text;

use crate::io::catalog::Catalog;
use crate::model::Workspace;
use crate::tui::app::App;
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 100;
pub const TERM_H: u16 = 12;
pub const MAX_ROWS: usize = 5;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Plain text of each line, spans concatenated.
pub fn lines_of(text: &Text) -> Vec<String> {
    text.lines
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}

/// Fixed instant every fixture workspace was modified at.
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// An App over workspaces under `/dev/ws`, all modified at `fixture_now`.
pub fn app_with(names: &[&str]) -> App {
    let now = fixture_now();
    let catalog = Catalog::new(
        names
            .iter()
            .map(|n| Workspace::with_modified("/dev/ws", *n, now))
            .collect(),
    );
    App::new(catalog, Theme::default(), MAX_ROWS, "code")
}

/// The date column as rendered for a fixture workspace.
pub fn today() -> String {
    Workspace::with_modified("/dev/ws", "x", fixture_now()).modified_date()
}
