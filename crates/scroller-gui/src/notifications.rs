use scroller_application::{Notice, NoticeLevel};
use std::time::Duration;

const INFO_TIMEOUT: Duration = Duration::from_secs(3);
const ERROR_TIMEOUT: Duration = Duration::from_secs(8);
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub kind: NotificationKind,
    remaining: Duration,
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    next_id: u64,
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) -> u64 {
        let (kind, timeout) = match notice.level {
            NoticeLevel::Info => (NotificationKind::Info, INFO_TIMEOUT),
            NoticeLevel::Error => (NotificationKind::Error, ERROR_TIMEOUT),
        };

        let id = self.allocate_id();
        self.notifications.push(Notification {
            id,
            title: notice.message,
            kind,
            remaining: timeout,
        });

        if self.notifications.len() > MAX_VISIBLE {
            let overflow = self.notifications.len() - MAX_VISIBLE;
            self.notifications.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notifications.retain(|notification| notification.id != id);
    }

    pub fn tick(&mut self, delta: Duration) {
        if delta.is_zero() {
            return;
        }

        for notification in &mut self.notifications {
            notification.remaining = notification.remaining.saturating_sub(delta);
        }
        self.notifications
            .retain(|notification| !notification.remaining.is_zero());
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn has_active(&self) -> bool {
        !self.notifications.is_empty()
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_expires_before_error() {
        let mut center = NotificationCenter::new();
        center.push(Notice::info("Loaded speech.txt"));
        center.push(Notice::error("Failed to read missing.txt: file not found"));

        center.tick(Duration::from_secs(4));
        assert_eq!(center.notifications().len(), 1);
        assert_eq!(center.notifications()[0].kind, NotificationKind::Error);

        center.tick(Duration::from_secs(5));
        assert!(!center.has_active());
    }

    #[test]
    fn dismiss_removes_by_id() {
        let mut center = NotificationCenter::new();
        let first = center.push(Notice::info("one"));
        center.push(Notice::info("two"));

        center.dismiss(first);
        assert_eq!(center.notifications().len(), 1);
        assert_eq!(center.notifications()[0].title, "two");
    }

    #[test]
    fn oldest_notifications_are_dropped_past_the_limit() {
        let mut center = NotificationCenter::new();
        for n in 0..6 {
            center.push(Notice::info(format!("notice {n}")));
        }
        assert_eq!(center.notifications().len(), MAX_VISIBLE);
        assert_eq!(center.notifications()[0].title, "notice 2");
    }
}
