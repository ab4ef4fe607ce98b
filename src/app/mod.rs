use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tui_input::Input;

use crate::{
    app::notifier::Notifier,
    filter::Filter,
    models::{FileReport, Report, RunStats, TestCaseSummary},
};

pub mod actions;
pub mod events;
pub mod location;
pub mod notifier;

pub use actions::{handle_action, handle_mouse, trigger_action};
pub use events::{ReportEvent, handle_report_event};
pub use location::{History, Location};
pub use notifier::NotificationKind;

pub struct App {
    pub report: Option<Report>,
    pub source_name: String,
    /// Filter text as shown in the filter box. Follows `history` except while
    /// the user is typing.
    pub filter: Input,
    pub filter_active: bool,
    pub history: History,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub list_viewport_height: usize,
    /// Where the header was drawn last frame, for mouse hit-testing.
    pub header_area: Rect,
    pub loading: bool,
    pub reload_requested: bool,
    pub spinner_tick: usize,
    pub should_quit: bool,
    pub event_tx: mpsc::UnboundedSender<ReportEvent>,
    pub notifier: Notifier,
}

impl App {
    pub fn new(
        source_name: String,
        initial_filter: String,
    ) -> (Self, mpsc::UnboundedReceiver<ReportEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let app = Self {
            report: None,
            source_name,
            filter: Input::new(initial_filter.clone()),
            filter_active: false,
            history: History::new(Location::new(initial_filter)),
            selected_index: 0,
            scroll_offset: 0,
            list_viewport_height: 0,
            header_area: Rect::default(),
            loading: true,
            reload_requested: false,
            spinner_tick: 0,
            should_quit: false,
            event_tx,
            notifier: Notifier::new(),
        };
        (app, event_rx)
    }

    /// Stats for the header; zeros until a report has loaded.
    pub fn stats(&self) -> RunStats {
        self.report
            .as_ref()
            .map(|r| r.stats.clone())
            .unwrap_or_default()
    }

    pub fn filter_text(&self) -> &str {
        self.filter.value()
    }

    /// React to a filter change requested by the header or the filter box:
    /// replace the filter, record the location and reset the selection.
    pub fn set_filter_text(&mut self, text: String) {
        tracing::debug!(filter = %text, "filter changed");
        self.filter = Input::new(text.clone());
        self.history.navigate(Location::new(text));
        self.reset_selection();
    }

    /// Go back to the previous location. Returns false at the start of history.
    pub fn go_back(&mut self) -> bool {
        let Some(location) = self.history.back() else {
            return false;
        };
        let query = location.query.clone();
        self.filter = Input::new(query);
        self.reset_selection();
        true
    }

    /// Drop uncommitted edits and show the current location's filter again.
    pub fn restore_filter(&mut self) {
        self.filter = Input::new(self.history.current().query.clone());
    }

    /// Tests matching the current filter, in report order.
    pub fn visible_tests(&self) -> Vec<(&FileReport, &TestCaseSummary)> {
        let Some(report) = &self.report else {
            return Vec::new();
        };
        let filter = Filter::parse(self.filter.value());
        report
            .tests()
            .filter(|(file, test)| filter.is_empty() || filter.matches(file, test))
            .collect()
    }

    pub fn selected_test(&self) -> Option<(&FileReport, &TestCaseSummary)> {
        self.visible_tests().get(self.selected_index).copied()
    }

    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// Keep the selection inside the visible list after it shrinks.
    pub fn clamp_selection(&mut self) {
        let max = self.visible_tests().len().saturating_sub(1);
        self.selected_index = self.selected_index.min(max);
        self.adjust_scroll();
    }

    fn adjust_scroll(&mut self) {
        if self.list_viewport_height == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + self.list_viewport_height {
            self.scroll_offset = self.selected_index - self.list_viewport_height + 1;
        }
    }
}
