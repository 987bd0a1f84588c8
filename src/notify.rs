use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// How long a notification of this kind stays up.
    pub fn lifetime(&self) -> Duration {
        match self {
            Self::Success => Duration::from_millis(4000),
            Self::Error => Duration::from_millis(6000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
}

/// Transient toasts. Only the newest notification is ever on screen.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    next_id: u64,
    active: Vec<Notification>,
}

impl NotificationCenter {
    /// Dismisses everything currently shown and shows `text`.
    pub fn show(&mut self, kind: NotificationKind, text: impl Into<String>) -> Notification {
        self.next_id += 1;
        let notification = Notification {
            id: self.next_id,
            kind,
            text: text.into(),
        };
        self.active.clear();
        self.active.push(notification.clone());
        notification
    }

    pub fn dismiss(&mut self, id: u64) {
        self.active.retain(|n| n.id != id);
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_previous() {
        let mut center = NotificationCenter::default();
        let first = center.show(NotificationKind::Error, "nope");
        let second = center.show(NotificationKind::Success, "sent");
        assert_ne!(first.id, second.id);
        assert_eq!(center.active(), &[second]);
    }

    #[test]
    fn test_dismiss_stale_id_is_noop() {
        let mut center = NotificationCenter::default();
        let first = center.show(NotificationKind::Error, "nope");
        let second = center.show(NotificationKind::Error, "still nope");
        center.dismiss(first.id);
        assert_eq!(center.active().len(), 1);
        center.dismiss(second.id);
        assert!(center.active().is_empty());
    }

    #[test]
    fn test_lifetimes() {
        assert_eq!(NotificationKind::Success.lifetime(), Duration::from_secs(4));
        assert_eq!(NotificationKind::Error.lifetime(), Duration::from_secs(6));
    }
}
