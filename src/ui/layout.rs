use ratatui::prelude::*;

use crate::app::App;

use super::detail_panel;
use super::header::HeaderView;
use super::notifications;
use super::search_box;
use super::status_bar;
use super::test_list;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let [header_area, main_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let stats = app.stats();
    frame.render_widget(&HeaderView::new(&stats, app.filter_text()), header_area);
    app.header_area = header_area;

    let body_area = if app.filter_active || !app.filter_text().is_empty() {
        let [search_area, rest] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(main_area);
        search_box::draw(frame, &app.filter, app.filter_active, search_area);
        rest
    } else {
        main_area
    };

    let [list_area, detail_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(body_area);

    test_list::draw(frame, app, list_area);
    detail_panel::draw(frame, app, detail_area);
    status_bar::draw(frame, app, status_area);
    notifications::draw(frame, app);
}
