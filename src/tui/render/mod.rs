pub mod panes;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

const SEPARATOR: &str = "----------";

/// Draw the last composed frame: main pane, separator, footer.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let main_height = u16::try_from(app.max_rows).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(main_height),
            Constraint::Length(1), // separator
            Constraint::Min(1),    // footer
        ])
        .split(area);

    frame.render_widget(Paragraph::new(app.panes.main.clone()), chunks[0]);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            SEPARATOR,
            Style::default().fg(app.theme.dim),
        ))),
        chunks[1],
    );
    frame.render_widget(Paragraph::new(app.panes.footer.clone()), chunks[2]);
}
