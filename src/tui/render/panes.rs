//! Pane composition: pure functions from controller state to pane text.

use chrono::{DateTime, Utc};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::model::{Age, Workspace};
use crate::tui::app::{App, Mode, Panes};
use crate::tui::effects::EffectError;
use crate::util::unicode;

/// Widest the name column grows before names are truncated
const MAX_NAME_WIDTH: usize = 40;
/// Placeholder for rows past the end of the list
const FILLER: &str = ".";
const POINTER: &str = "\u{25B6}"; // ▶

/// Default frame for the current mode.
pub fn compose(app: &App) -> Panes {
    compose_at(app, Utc::now())
}

pub fn compose_at(app: &App, now: DateTime<Utc>) -> Panes {
    let main = match app.mode {
        Mode::Browse | Mode::Filter => workspace_rows(app, now),
        Mode::CommandSelect => filler(app.max_rows),
    };
    Panes {
        main,
        footer: footer(app),
    }
}

/// Frame for a transient message: the notice in place of the list.
pub fn notice(app: &App, notice: &str) -> Panes {
    let mut lines = vec![Line::from(Span::styled(
        format!("    {}", notice),
        Style::default()
            .fg(app.theme.text_bright)
            .add_modifier(Modifier::BOLD),
    ))];
    pad_lines(&mut lines, app.max_rows);
    Panes {
        main: Text::from(lines),
        footer: footer(app),
    }
}

/// Main pane shown when the session ends on an error.
pub fn error_text(app: &App, err: &EffectError) -> Text<'static> {
    let mut lines = vec![Line::from(Span::styled(
        format!("error: {}", err),
        Style::default().fg(app.theme.red).add_modifier(Modifier::BOLD),
    ))];
    pad_lines(&mut lines, app.max_rows);
    Text::from(lines)
}

/// Exactly `max_rows` lines, scrolled so the cursor row comes first.
fn workspace_rows(app: &App, now: DateTime<Utc>) -> Text<'static> {
    let (list, cursor) = app.visible();
    let name_width = list
        .iter()
        .map(|w| unicode::display_width(&w.name))
        .max()
        .unwrap_or(0)
        .min(MAX_NAME_WIDTH);

    let lines = (0..app.max_rows)
        .map(|row| match list.get(cursor + row) {
            Some(ws) => workspace_line(app, ws, cursor + row + 1, row == 0, name_width, now),
            None => filler_line(app),
        })
        .collect::<Vec<_>>();
    Text::from(lines)
}

fn workspace_line(
    app: &App,
    ws: &Workspace,
    position: usize,
    selected: bool,
    name_width: usize,
    now: DateTime<Utc>,
) -> Line<'static> {
    let theme = &app.theme;
    let age = Age::since(ws.modified(), now);
    let date_style = Style::default().fg(theme.age_color(age));
    let name = unicode::fit_to_width(&ws.name, name_width);

    let mut spans = Vec::with_capacity(8);
    if selected {
        let emphasis = Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD);
        spans.push(Span::styled(format!("{} ", POINTER), emphasis));
        spans.push(Span::styled(format!("{:<3}", position), emphasis));
        spans.push(Span::raw("   "));
        spans.push(Span::styled(name, emphasis));
        spans.push(Span::raw("   "));
        spans.push(Span::styled(ws.modified_date(), date_style));
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            ws.path().display().to_string(),
            Style::default().fg(theme.dim),
        ));
    } else {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{:<3}", position),
            Style::default().fg(theme.text),
        ));
        spans.push(Span::raw("   "));
        spans.push(Span::styled(name, Style::default().fg(theme.text)));
        spans.push(Span::raw("   "));
        spans.push(Span::styled(ws.modified_date(), date_style));
    }
    Line::from(spans)
}

fn footer(app: &App) -> Text<'static> {
    let theme = &app.theme;
    let hint = Style::default().fg(theme.dim);
    let lines = match app.mode {
        Mode::CommandSelect => app
            .commands
            .iter()
            .enumerate()
            .map(|(i, cmd)| {
                if i == app.command_cursor {
                    Line::from(Span::styled(
                        format!(" > {}", cmd.label()),
                        Style::default()
                            .fg(theme.highlight)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("   {}", cmd.label()),
                        Style::default().fg(theme.text),
                    ))
                }
            })
            .collect(),
        Mode::Filter => vec![
            Line::from(vec![
                Span::styled(
                    format!("\u{21B3} FILTER > {}", app.filter_query),
                    Style::default().fg(theme.yellow),
                ),
                Span::styled("\u{258C}", Style::default().fg(theme.highlight)), // ▌ cursor
            ]),
            Line::from(Span::styled(
                "   Enter/Esc to keep the selection and return",
                hint,
            )),
        ],
        Mode::Browse => vec![
            Line::from(Span::styled(
                "   type 'c' to copy selected path to clipboard",
                hint,
            )),
            Line::from(Span::styled(
                format!("   type 'o' to open selected workspace in {}", app.ide),
                hint,
            )),
            Line::from(Span::styled(
                "   '/' filter  ':' commands  'q' quit",
                hint,
            )),
        ],
    };
    Text::from(lines)
}

fn filler(rows: usize) -> Text<'static> {
    Text::from(vec![Line::from(FILLER); rows])
}

fn filler_line(app: &App) -> Line<'static> {
    Line::from(Span::styled(FILLER, Style::default().fg(app.theme.dim)))
}

fn pad_lines(lines: &mut Vec<Line<'static>>, rows: usize) {
    while lines.len() < rows {
        lines.push(Line::from(""));
    }
}
