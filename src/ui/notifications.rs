use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{App, NotificationKind};

use super::theme;

pub fn draw(frame: &mut Frame, app: &App) {
    let Some(notification) = app.notifier.recent() else {
        return;
    };

    let (icon, color) = match notification.kind {
        NotificationKind::Info => ("ℹ", theme::BLUE),
        NotificationKind::Error => ("✗", theme::RED),
    };

    let text = format!("{} {}", icon, notification.message);
    let area = toast_area(frame.area(), text.chars().count());

    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(text.as_str())
        .block(block)
        .style(Style::default().fg(color).bg(theme::SURFACE0));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// One-row box in the bottom-right corner, just above the status bar.
fn toast_area(screen: Rect, text_width: usize) -> Rect {
    let max_inner = (screen.width / 2) as usize;
    let width = text_width.min(max_inner) as u16 + 1;
    Rect {
        x: screen.width.saturating_sub(width + 1),
        y: screen.height.saturating_sub(3),
        width,
        height: 1,
    }
}
