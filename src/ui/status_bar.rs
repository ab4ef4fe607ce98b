use ratatui::{prelude::*, widgets::Paragraph};

use super::theme;
use crate::app::App;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new(status_line(app)).style(Style::default().bg(theme::SURFACE0));
    frame.render_widget(paragraph, area);
}

fn hint(key: &'static str, what: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().fg(theme::YELLOW)),
        Span::raw(what),
    ]
}

fn status_line(app: &App) -> Line<'static> {
    if app.filter_active {
        let mut spans = Vec::new();
        spans.extend(hint(" [esc]", " cancel  "));
        spans.extend(hint("[enter]", " apply"));
        return Line::from(spans);
    }

    let mut spans = Vec::new();
    spans.extend(hint(" [1-5]", " status  "));
    spans.extend(hint("[f]", " filter  "));
    if app.history.can_go_back() {
        spans.extend(hint("[⌫]", " back  "));
    }
    spans.extend(hint("[r]", " reload  "));
    spans.extend(hint("[q]", " quit"));

    spans.push(Span::styled(
        format!("  {}", app.history.current().hash()),
        Style::default().fg(theme::TEAL),
    ));

    if app.loading {
        let spinner = SPINNER_FRAMES[app.spinner_tick % SPINNER_FRAMES.len()];
        spans.push(Span::styled(
            format!("  {} loading...", spinner),
            Style::default().fg(theme::YELLOW),
        ));
    } else if let Some(report) = &app.report {
        let stats = &report.stats;
        let (mark, color) = if stats.ok {
            ("✔ ok", theme::GREEN)
        } else {
            ("✘ failed", theme::RED)
        };
        spans.push(Span::styled(format!("  {}", mark), Style::default().fg(color)));
        spans.push(Span::styled(
            format!("  {}", stats.duration_display()),
            Style::default().fg(theme::MAUVE),
        ));
    }

    Line::from(spans)
}
