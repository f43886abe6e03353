//! Single-slot, self-clearing status messages.
//!
//! [`Notifier::show`] replaces whatever is displayed and hands back a [`Ticket`].
//! The caller sleeps for [`Ticket::after`] and then calls [`Notifier::expire`].
//! Showing another message supersedes every earlier ticket, so a stale timer can
//! never clear a newer message before its own delay has elapsed.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS class of the banner.
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// Handle for the scheduled clear of one shown notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    after: Duration,
}

impl Ticket {
    /// Delay before [`Notifier::expire`] should be called.
    pub fn after(&self) -> Duration {
        self.after
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notifier {
    current: Option<Notification>,
    generation: u64,
    duration: Duration,
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            generation: 0,
            duration,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> Ticket {
        self.show_for(message, kind, self.duration)
    }

    pub fn show_for(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration: Duration,
    ) -> Ticket {
        self.generation += 1;
        self.current = Some(Notification {
            message: message.into(),
            kind,
        });
        Ticket {
            generation: self.generation,
            after: duration,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) -> Ticket {
        self.show(message, NotificationKind::Success)
    }

    pub fn error(&mut self, message: impl Into<String>) -> Ticket {
        self.show(message, NotificationKind::Error)
    }

    /// Clear the notification if `ticket` is still the latest one.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if ticket.generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_expire() {
        let mut notifier = Notifier::new(Duration::from_secs(5));
        assert!(notifier.current().is_none());

        let ticket = notifier.error("Wrong credentials");
        assert_eq!(ticket.after(), Duration::from_secs(5));
        assert_eq!(
            notifier.current(),
            Some(&Notification {
                message: "Wrong credentials".to_string(),
                kind: NotificationKind::Error,
            })
        );

        assert!(notifier.expire(ticket));
        assert!(notifier.current().is_none());
        assert!(!notifier.expire(ticket));
    }

    #[test]
    fn test_superseded_ticket_does_not_clear_newer_message() {
        let mut notifier = Notifier::new(Duration::from_secs(5));
        let first = notifier.success("Blog added successfully");
        let second = notifier.error("Error liking blog");

        assert!(!notifier.expire(first));
        assert_eq!(
            notifier.current().map(|n| n.message.as_str()),
            Some("Error liking blog")
        );

        assert!(notifier.expire(second));
        assert!(notifier.current().is_none());
    }

    #[test]
    fn test_show_for_overrides_duration() {
        let mut notifier = Notifier::new(Duration::from_secs(5));
        let ticket = notifier.show_for("x", NotificationKind::Success, Duration::from_millis(10));
        assert_eq!(ticket.after(), Duration::from_millis(10));
        assert_eq!(NotificationKind::Success.class(), "success");
    }
}
