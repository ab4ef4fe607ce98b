use crate::{app::App, models::Report};

/// Events sent from background loader tasks into the app.
#[derive(Debug)]
pub enum ReportEvent {
    Loaded(Box<Report>),
    LoadFailed { message: String },
}

pub fn handle_report_event(app: &mut App, event: ReportEvent) {
    match event {
        ReportEvent::Loaded(report) => {
            let reloaded = app.report.is_some();
            app.report = Some(*report);
            app.loading = false;
            app.clamp_selection();
            if reloaded {
                app.notifier.info("Report reloaded", 2);
            }
        }

        ReportEvent::LoadFailed { message } => {
            app.loading = false;
            app.notifier.error(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{NotificationKind, tests::sample_report};

    #[test]
    fn first_load_is_silent() {
        let (mut app, _rx) = App::new("report.json".into(), String::new());
        handle_report_event(&mut app, ReportEvent::Loaded(Box::new(sample_report())));
        assert!(!app.loading);
        assert_eq!(app.stats().total, 100);
        assert!(app.notifier.recent().is_none());
    }

    #[test]
    fn reload_notifies_and_keeps_selection_in_range() {
        let (mut app, _rx) = App::new("report.json".into(), String::new());
        handle_report_event(&mut app, ReportEvent::Loaded(Box::new(sample_report())));
        app.selected_index = 4;

        let mut smaller = sample_report();
        smaller.files[0].tests.truncate(2);
        handle_report_event(&mut app, ReportEvent::Loaded(Box::new(smaller)));

        assert_eq!(app.selected_index, 1);
        let note = app.notifier.recent().unwrap();
        assert_eq!(note.kind, NotificationKind::Info);
    }

    #[test]
    fn load_failure_surfaces_error() {
        let (mut app, _rx) = App::new("report.json".into(), String::new());
        handle_report_event(
            &mut app,
            ReportEvent::LoadFailed {
                message: "failed to read report.json".into(),
            },
        );
        assert!(!app.loading);
        assert!(app.report.is_none());
        let note = app.notifier.recent().unwrap();
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.message, "failed to read report.json");
    }
}
