use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::theme;
use crate::app::App;
use crate::models::{FileReport, TestCaseSummary};

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Detail ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::SURFACE2));

    let lines = match app.selected_test() {
        Some((file, test)) => detail_lines(file, test),
        None => vec![Line::styled(
            "Nothing selected",
            Style::default().fg(theme::OVERLAY0),
        )],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn detail_lines<'a>(file: &'a FileReport, test: &'a TestCaseSummary) -> Vec<Line<'a>> {
    let label = Style::default().fg(theme::OVERLAY0);
    let outcome = test.outcome;

    let mut lines = vec![
        Line::from(Span::styled(test.full_title(), Style::default().bold())),
        Line::from(""),
        Line::from(vec![
            Span::styled("status   ", label),
            Span::styled(
                format!("{} {}", outcome.icon(), outcome.label()),
                Style::default().fg(outcome.color()),
            ),
        ]),
    ];

    let location = match &test.location {
        Some(loc) => format!("{}:{}:{}", loc.file, loc.line, loc.column),
        None => file.file_name.clone(),
    };
    lines.push(Line::from(vec![
        Span::styled("location ", label),
        Span::raw(location),
    ]));

    if !test.project_name.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("project  ", label),
            Span::styled(test.project_name.as_str(), Style::default().fg(theme::MAUVE)),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled("duration ", label),
        Span::raw(format!("{}ms", test.duration)),
    ]));

    if !test.tags.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("tags     ", label),
            Span::styled(test.tags.join(" "), Style::default().fg(theme::TEAL)),
        ]));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TestOutcome, report::Location};

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn lists_known_fields() {
        let file = FileReport {
            file_name: "auth.spec.ts".into(),
            ..Default::default()
        };
        let test = TestCaseSummary {
            title: "logs in".into(),
            path: vec!["auth".into()],
            project_name: "firefox".into(),
            location: Some(Location {
                file: "auth.spec.ts".into(),
                line: 12,
                column: 5,
            }),
            outcome: TestOutcome::Flaky,
            duration: 340,
            tags: vec!["@smoke".into()],
            ..Default::default()
        };

        let text: Vec<String> = detail_lines(&file, &test).iter().map(line_text).collect();
        assert_eq!(text[0], "auth › logs in");
        assert!(text.contains(&"status   ⟳ flaky".to_string()));
        assert!(text.contains(&"location auth.spec.ts:12:5".to_string()));
        assert!(text.contains(&"project  firefox".to_string()));
        assert!(text.contains(&"duration 340ms".to_string()));
        assert!(text.contains(&"tags     @smoke".to_string()));
    }

    #[test]
    fn falls_back_to_file_name_without_location() {
        let file = FileReport {
            file_name: "auth.spec.ts".into(),
            ..Default::default()
        };
        let test = TestCaseSummary::default();
        let text: Vec<String> = detail_lines(&file, &test).iter().map(line_text).collect();
        assert!(text.contains(&"location auth.spec.ts".to_string()));
        assert!(!text.iter().any(|l| l.starts_with("project")));
    }
}
