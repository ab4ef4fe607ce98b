use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use tui_input::Input;

use super::theme;

pub fn draw(frame: &mut Frame, input: &Input, active: bool, area: Rect) {
    let (border_color, text_style) = if active {
        (theme::BLUE, Style::default().fg(theme::TEXT))
    } else {
        (theme::SURFACE2, Style::default().fg(theme::OVERLAY0))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Filter ");
    let paragraph = Paragraph::new(format!("/ {}", input.value()))
        .style(text_style)
        .block(block);
    frame.render_widget(paragraph, area);

    if active {
        // "/ " prefix plus the left border
        let x = area.x + 3 + input.visual_cursor() as u16;
        frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}
