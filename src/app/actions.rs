use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tui_input::InputRequest;

use crate::{
    app::App,
    filter::{Filter, StatusFilter},
    ui::header::HeaderView,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NavigateUp,
    NavigateDown,
    ScrollUp,
    ScrollDown,
    JumpToStart,
    JumpToEnd,
    SelectTab(StatusFilter),
    NextTab,
    PreviousTab,
    FilterEnter,
    FilterInput(char),
    FilterBackspace,
    FilterExit,
    FilterApply,
    Back,
    Reload,
}

/// Process a keyboard action.
pub fn handle_action(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,

        Action::NavigateUp => {
            app.selected_index = app.selected_index.saturating_sub(1);
            app.adjust_scroll();
        }

        Action::NavigateDown => {
            let max = app.visible_tests().len().saturating_sub(1);
            app.selected_index = (app.selected_index + 1).min(max);
            app.adjust_scroll();
        }

        Action::ScrollUp => {
            let half = (app.list_viewport_height / 2).max(1);
            app.selected_index = app.selected_index.saturating_sub(half);
            app.adjust_scroll();
        }

        Action::ScrollDown => {
            let half = (app.list_viewport_height / 2).max(1);
            let max = app.visible_tests().len().saturating_sub(1);
            app.selected_index = (app.selected_index + half).min(max);
            app.adjust_scroll();
        }

        Action::JumpToStart => {
            app.selected_index = 0;
            app.adjust_scroll();
        }

        Action::JumpToEnd => {
            app.selected_index = app.visible_tests().len().saturating_sub(1);
            app.adjust_scroll();
        }

        Action::SelectTab(tab) => select_tab(app, tab),

        Action::NextTab => {
            let current = Filter::parse(app.filter_text())
                .active_tab()
                .unwrap_or(StatusFilter::All);
            select_tab(app, current.next());
        }

        Action::PreviousTab => {
            let current = Filter::parse(app.filter_text())
                .active_tab()
                .unwrap_or(StatusFilter::All);
            select_tab(app, current.previous());
        }

        Action::FilterEnter => app.filter_active = true,

        Action::FilterInput(c) => {
            app.filter.handle(InputRequest::InsertChar(c));
            app.reset_selection();
        }

        Action::FilterBackspace => {
            app.filter.handle(InputRequest::DeletePrevChar);
            app.reset_selection();
        }

        Action::FilterExit => {
            app.filter_active = false;
            app.restore_filter();
            app.clamp_selection();
        }

        Action::FilterApply => {
            app.filter_active = false;
            let text = app.filter_text().trim().to_string();
            app.set_filter_text(text);
        }

        Action::Back => {
            app.go_back();
        }

        Action::Reload => {
            if !app.loading {
                app.loading = true;
                app.reload_requested = true;
            }
        }
    }
}

/// Activate a header tab the same way a click would.
fn select_tab(app: &mut App, tab: StatusFilter) {
    let stats = app.stats();
    let mut requested = None;
    HeaderView::new(&stats, app.filter_text()).select(tab, &mut |text| requested = Some(text));
    if let Some(text) = requested {
        app.set_filter_text(text);
    }
}

/// Process a mouse event. Left clicks on the header change the filter; the
/// wheel moves the selection.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let stats = app.stats();
            let mut requested = None;
            HeaderView::new(&stats, app.filter_text()).click(
                app.header_area,
                mouse.column,
                mouse.row,
                &mut |text| requested = Some(text),
            );
            if let Some(text) = requested {
                app.filter_active = false;
                app.set_filter_text(text);
            }
        }
        MouseEventKind::ScrollUp => handle_action(app, Action::NavigateUp),
        MouseEventKind::ScrollDown => handle_action(app, Action::NavigateDown),
        _ => {}
    }
}

pub fn trigger_action(key: KeyEvent, filter_active: bool) -> Option<Action> {
    if filter_active {
        match key.code {
            KeyCode::Esc => Some(Action::FilterExit),
            KeyCode::Enter => Some(Action::FilterApply),
            KeyCode::Backspace => Some(Action::FilterBackspace),
            KeyCode::Up => Some(Action::NavigateUp),
            KeyCode::Down => Some(Action::NavigateDown),
            KeyCode::Char(c) => Some(Action::FilterInput(c)),
            _ => None,
        }
    } else {
        map_key(key)
    }
}

fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('u') => Some(Action::ScrollUp),
            KeyCode::Char('d') => Some(Action::ScrollDown),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::NavigateUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::NavigateDown),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::JumpToStart),
        KeyCode::Char('G') | KeyCode::End => Some(Action::JumpToEnd),
        KeyCode::Char(c @ '1'..='5') => {
            let i = c as usize - '1' as usize;
            Some(Action::SelectTab(StatusFilter::TABS[i]))
        }
        KeyCode::Char(']') | KeyCode::Tab => Some(Action::NextTab),
        KeyCode::Char('[') | KeyCode::BackTab => Some(Action::PreviousTab),
        KeyCode::Char('f') | KeyCode::Char('/') => Some(Action::FilterEnter),
        KeyCode::Backspace => Some(Action::Back),
        KeyCode::Char('r') => Some(Action::Reload),
        KeyCode::PageUp => Some(Action::ScrollUp),
        KeyCode::PageDown => Some(Action::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::loaded_app;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn click_tab(app: &mut App, label: &str) {
        let stats = app.stats();
        let rect = HeaderView::new(&stats, app.filter_text())
            .tab_areas(app.header_area)
            .into_iter()
            .find(|(tab, _)| tab.label() == label)
            .map(|(_, rect)| rect)
            .unwrap();
        handle_mouse(app, left_click(rect.x + 1, rect.y));
    }

    #[test]
    fn header_clicks_update_location() {
        let mut app = loaded_app();
        app.header_area = Rect::new(0, 0, 80, 1);
        let mut hashes = Vec::new();

        for label in ["All", "Passed", "Failed", "Flaky", "Skipped"] {
            click_tab(&mut app, label);
            hashes.push(app.history.current().hash());
        }

        assert_eq!(
            hashes,
            vec!["#", "#?q=s:passed", "#?q=s:failed", "#?q=s:flaky", "#?q=s:skipped"]
        );
        assert_eq!(app.filter_text(), "s:skipped");
    }

    #[test]
    fn click_outside_header_keeps_filter() {
        let mut app = loaded_app();
        app.header_area = Rect::new(0, 0, 80, 1);
        app.set_filter_text("s:failed".into());
        handle_mouse(&mut app, left_click(5, 10));
        assert_eq!(app.filter_text(), "s:failed");
    }

    #[test]
    fn number_keys_select_tabs() {
        assert_eq!(
            trigger_action(key(KeyCode::Char('1')), false),
            Some(Action::SelectTab(StatusFilter::All))
        );
        assert_eq!(
            trigger_action(key(KeyCode::Char('5')), false),
            Some(Action::SelectTab(StatusFilter::Skipped))
        );
        assert_eq!(trigger_action(key(KeyCode::Char('6')), false), None);
        assert_eq!(
            trigger_action(key(KeyCode::Char('1')), true),
            Some(Action::FilterInput('1'))
        );
    }

    #[test]
    fn tab_cycling_follows_active_filter() {
        let mut app = loaded_app();
        handle_action(&mut app, Action::NextTab);
        assert_eq!(app.filter_text(), "s:passed");
        handle_action(&mut app, Action::PreviousTab);
        handle_action(&mut app, Action::PreviousTab);
        assert_eq!(app.filter_text(), "s:skipped");
    }

    #[test]
    fn typing_filters_live_and_escape_restores() {
        let mut app = loaded_app();
        handle_action(&mut app, Action::SelectTab(StatusFilter::Failed));
        handle_action(&mut app, Action::FilterEnter);
        for c in " coupon".chars() {
            handle_action(&mut app, Action::FilterInput(c));
        }
        assert_eq!(app.filter_text(), "s:failed coupon");
        assert!(app.visible_tests().is_empty());

        handle_action(&mut app, Action::FilterExit);
        assert!(!app.filter_active);
        assert_eq!(app.filter_text(), "s:failed");
    }

    #[test]
    fn apply_commits_trimmed_filter() {
        let mut app = loaded_app();
        handle_action(&mut app, Action::FilterEnter);
        for c in "item ".chars() {
            handle_action(&mut app, Action::FilterInput(c));
        }
        handle_action(&mut app, Action::FilterApply);
        assert_eq!(app.history.current().hash(), "#?q=item");
        assert_eq!(app.visible_tests().len(), 2);

        handle_action(&mut app, Action::Back);
        assert_eq!(app.filter_text(), "");
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut app = loaded_app();
        app.list_viewport_height = 2;
        handle_action(&mut app, Action::NavigateUp);
        assert_eq!(app.selected_index, 0);

        handle_action(&mut app, Action::JumpToEnd);
        assert_eq!(app.selected_index, 4);
        assert_eq!(app.scroll_offset, 3);

        handle_action(&mut app, Action::NavigateDown);
        assert_eq!(app.selected_index, 4);

        handle_action(&mut app, Action::JumpToStart);
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn reload_is_requested_once() {
        let mut app = loaded_app();
        handle_action(&mut app, Action::Reload);
        assert!(app.reload_requested);
        assert!(app.loading);

        app.reload_requested = false;
        handle_action(&mut app, Action::Reload);
        assert!(!app.reload_requested);
    }
}
