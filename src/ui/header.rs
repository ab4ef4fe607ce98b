//! Stats header with one clickable tab per status filter.
//!
//! The widget only renders counters and reports which filter text a tab
//! stands for. Whoever owns the filter text decides what to do with it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::theme;
use crate::filter::{Filter, StatusFilter};
use crate::models::RunStats;

/// Blank cells between the last tab and the run duration.
const TAB_GAP: u16 = 1;

/// Padding inside each tab and blank cells between tabs, roomiest first.
/// The first spacing whose five tabs fit the area is used.
const SPACINGS: [Spacing; 3] = [
    Spacing { pad: 1, gap: 1 },
    Spacing { pad: 0, gap: 1 },
    Spacing { pad: 0, gap: 0 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Spacing {
    pad: u16,
    gap: u16,
}

pub struct HeaderView<'a> {
    stats: &'a RunStats,
    filter_text: &'a str,
}

impl<'a> HeaderView<'a> {
    pub fn new(stats: &'a RunStats, filter_text: &'a str) -> Self {
        Self { stats, filter_text }
    }

    fn tab_text(&self, tab: StatusFilter) -> (String, String) {
        (tab.label().to_string(), tab.count(self.stats).to_string())
    }

    fn tab_width(&self, tab: StatusFilter, spacing: Spacing) -> u16 {
        let (label, counter) = self.tab_text(tab);
        // "{pad}{label} {counter}{pad}"
        (label.len() + counter.len() + 1) as u16 + 2 * spacing.pad
    }

    fn spacing(&self, width: u16) -> Spacing {
        let needed = |spacing: Spacing| -> u32 {
            let tabs: u32 = StatusFilter::TABS
                .iter()
                .map(|&tab| u32::from(self.tab_width(tab, spacing)))
                .sum();
            tabs + u32::from(spacing.gap) * (StatusFilter::TABS.len() as u32 - 1)
        };
        SPACINGS
            .into_iter()
            .find(|&spacing| needed(spacing) <= u32::from(width))
            .unwrap_or(SPACINGS[SPACINGS.len() - 1])
    }

    /// Hit regions of each tab inside `area`, in display order.
    /// Spacing shrinks before any tab is clipped or left out.
    pub fn tab_areas(&self, area: Rect) -> Vec<(StatusFilter, Rect)> {
        self.layout(area).1
    }

    fn layout(&self, area: Rect) -> (Spacing, Vec<(StatusFilter, Rect)>) {
        let spacing = self.spacing(area.width);
        let mut regions = Vec::with_capacity(StatusFilter::TABS.len());
        if area.height == 0 {
            return (spacing, regions);
        }

        let mut x = area.x;
        for tab in StatusFilter::TABS {
            if x >= area.right() {
                break;
            }
            let width = self.tab_width(tab, spacing).min(area.right() - x);
            regions.push((tab, Rect::new(x, area.y, width, 1)));
            x = x.saturating_add(width).saturating_add(spacing.gap);
        }
        (spacing, regions)
    }

    /// Route a click at (`column`, `row`) to the tab under it. Returns whether
    /// a tab was hit.
    pub fn click(
        &self,
        area: Rect,
        column: u16,
        row: u16,
        set_filter_text: &mut impl FnMut(String),
    ) -> bool {
        let hit = self.tab_areas(area).into_iter().find(|(_, rect)| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        });
        match hit {
            Some((tab, _)) => {
                self.select(tab, set_filter_text);
                true
            }
            None => false,
        }
    }

    /// Activate a tab without a pointer.
    pub fn select(&self, tab: StatusFilter, set_filter_text: &mut impl FnMut(String)) {
        set_filter_text(tab.token().to_string());
    }

    fn counter_style(tab: StatusFilter) -> Style {
        match tab.outcome() {
            Some(outcome) => Style::default().fg(outcome.color()),
            None => Style::default().fg(theme::BLUE),
        }
    }
}

impl Widget for &HeaderView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(theme::MANTLE));

        let active = Filter::parse(self.filter_text).active_tab();
        let (spacing, regions) = self.layout(area);
        let pad = " ".repeat(spacing.pad as usize);

        for &(tab, rect) in &regions {
            let (label, counter) = self.tab_text(tab);
            let selected = active == Some(tab);

            let base = if selected {
                Style::default()
                    .fg(theme::TEXT)
                    .bg(theme::SURFACE1)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::SUBTEXT0).bg(theme::MANTLE)
            };

            let line = Line::from(vec![
                Span::styled(format!("{}{} ", pad, label), base),
                Span::styled(counter, base.patch(HeaderView::counter_style(tab))),
                Span::styled(pad.clone(), base),
            ]);
            line.render(rect, buf);
        }

        // Run duration on the right when there is room after the tabs.
        let tabs_end = regions.last().map_or(area.x, |(_, r)| r.right());
        let duration = format!("Total time: {} ", self.stats.duration_display());
        let width = duration.len() as u16;
        if tabs_end + TAB_GAP + width <= area.right() {
            let rect = Rect::new(area.right() - width, area.y, width, 1);
            Line::styled(duration, Style::default().fg(theme::OVERLAY0)).render(rect, buf);
        }
    }
}
