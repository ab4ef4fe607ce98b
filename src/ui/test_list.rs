use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

use super::theme;
use crate::app::App;

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(format!(" Tests — {} ", app.source_name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BLUE));

    let inner_height = block.inner(area).height as usize;
    app.list_viewport_height = inner_height;

    let visible = app.visible_tests();
    let start = app.scroll_offset.min(visible.len());
    let end = (start + inner_height).min(visible.len());

    let items: Vec<ListItem> = visible[start..end]
        .iter()
        .enumerate()
        .map(|(view_i, (file, test))| {
            let selected = view_i + start == app.selected_index;
            let outcome = test.outcome;

            let mut spans = vec![
                Span::styled(format!("{} ", outcome.icon()), Style::default().fg(outcome.color())),
                Span::raw(test.full_title()),
                Span::styled(
                    format!("  {}", file.file_name),
                    Style::default().fg(theme::OVERLAY0),
                ),
            ];
            if !test.project_name.is_empty() {
                spans.push(Span::styled(
                    format!(" [{}]", test.project_name),
                    Style::default().fg(theme::MAUVE),
                ));
            }
            spans.push(Span::styled(
                format!("  {}ms", test.duration),
                Style::default().fg(theme::OVERLAY0),
            ));

            let item = ListItem::new(Line::from(spans));
            if selected {
                item.style(Style::default().bg(theme::SURFACE1))
            } else {
                item
            }
        })
        .collect();

    if items.is_empty() {
        let message = if app.loading {
            "Loading report..."
        } else {
            "No tests match the current filter"
        };
        let list = List::new(vec![ListItem::new(Span::styled(
            message,
            Style::default().fg(theme::OVERLAY0),
        ))])
        .block(block);
        frame.render_widget(list, area);
        return;
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
