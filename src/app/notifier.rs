use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Info,
}

#[derive(Debug)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: Instant,
}

/// Short-lived toasts shown above the status bar.
pub struct Notifier {
    queue: VecDeque<Notification>,
}

impl Notifier {
    const ERROR_TTL: Duration = Duration::from_secs(4);
    const MAX_QUEUED: usize = 8;

    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn info(&mut self, message: impl Into<String>, secs: u64) {
        self.push(message.into(), NotificationKind::Info, Duration::from_secs(secs));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message.into(), NotificationKind::Error, Self::ERROR_TTL);
    }

    pub fn recent(&self) -> Option<&Notification> {
        self.queue.back()
    }

    pub fn prune_expired(&mut self) {
        self.prune_at(Instant::now());
    }

    fn prune_at(&mut self, now: Instant) {
        self.queue.retain(|n| n.expires_at > now);
    }

    fn push(&mut self, message: String, kind: NotificationKind, ttl: Duration) {
        tracing::debug!(?kind, %message, "notification");
        if self.queue.len() == Self::MAX_QUEUED {
            self.queue.pop_front();
        }
        self.queue.push_back(Notification {
            message,
            kind,
            expires_at: Instant::now() + ttl,
        });
    }
}
