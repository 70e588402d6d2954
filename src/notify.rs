//! Queue of user-facing notifications.
//!
//! Operations push notifications here instead of talking to the chat
//! directly; the bot layer drains the queue and renders each entry.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Info => "ℹ️",
            NotificationKind::Success => "✅",
            NotificationKind::Warning => "⚠️",
            NotificationKind::Error => "❌",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn render(&self) -> String {
        format!("{} {}", self.kind.icon(), self.message)
    }
}

#[derive(Debug, Default)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) {
        let message = message.into();
        tracing::trace!(?kind, %message, "Queued notification");
        self.items.push_back(Notification { kind, message });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(NotificationKind::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(NotificationKind::Success, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.show(NotificationKind::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes and returns everything queued, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.items.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_order() {
        let mut queue = NotificationQueue::new();
        queue.success("saved");
        queue.error("failed");
        assert_eq!(queue.len(), 2);
        let drained = queue.drain();
        assert_eq!(drained[0].render(), "✅ saved");
        assert_eq!(drained[1].kind, NotificationKind::Error);
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_discards() {
        let mut queue = NotificationQueue::new();
        queue.info("a");
        queue.warning("b");
        queue.clear();
        assert!(queue.drain().is_empty());
    }
}
