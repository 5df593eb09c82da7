//! Notices raised by the wizard and the port they are delivered through

use std::collections::VecDeque;

/// Severity of a notice, picks the dialog's icon and color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Success,
    Error,
}

impl NoticeKind {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Warning => "⚠",
            Self::Success => "✔",
            Self::Error => "✖",
        }
    }
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

/// Presentation service for notices. The wizard never renders dialogs itself.
pub trait NotificationPort {
    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str);
}

/// Queue notices to be shown one at a time
impl NotificationPort for VecDeque<Notice> {
    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str) {
        self.push_back(Notice {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_order() {
        let mut queue = VecDeque::new();
        queue.notify(NoticeKind::Warning, "First", "a");
        queue.notify(NoticeKind::Error, "Second", "b");

        assert_eq!(queue.len(), 2);
        assert_eq!(queue[0].title, "First");
        assert_eq!(queue[1].kind, NoticeKind::Error);
        assert_eq!(queue[1].message, "b");
    }

    #[test]
    fn test_icons_differ() {
        assert_ne!(NoticeKind::Warning.icon(), NoticeKind::Success.icon());
        assert_ne!(NoticeKind::Success.icon(), NoticeKind::Error.icon());
    }
}
