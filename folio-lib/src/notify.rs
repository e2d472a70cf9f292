//! Transient notifications.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Default duration for notifications.
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(4);

/// What a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Neutral message.
    Info,
    /// An operation has started and not finished yet.
    Pending,
    /// An operation finished successfully.
    Success,
    /// An operation failed.
    Failure,
}

/// A notification shown briefly by the presentation layer.
///
/// # Example
///
/// ```
/// use folio_lib::notify::{Notification, NotificationKind};
///
/// let note = Notification::pending("Saving Cover page");
/// assert_eq!(note.kind, NotificationKind::Pending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    /// How long to show the notification.
    pub duration: Duration,
}

impl Notification {
    fn with_kind(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }

    /// Create an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_kind(NotificationKind::Info, message)
    }

    /// Create a pending notification.
    pub fn pending(message: impl Into<String>) -> Self {
        Self::with_kind(NotificationKind::Pending, message)
    }

    /// Create a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::with_kind(NotificationKind::Success, message)
    }

    /// Create a failure notification.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::with_kind(NotificationKind::Failure, message)
    }
}

/// Sink for notifications.
///
/// Implemented for any `Fn(Notification)` closure.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<F> Notifier for F
where
    F: Fn(Notification) + Send + Sync,
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}

/// Notifier that records everything it receives.
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: Mutex<Vec<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of every notification so far, oldest first.
    pub fn entries(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get the kinds of every notification so far, oldest first.
    pub fn kinds(&self) -> Vec<NotificationKind> {
        self.entries().into_iter().map(|n| n.kind).collect()
    }

    /// Remove and return every notification.
    pub fn drain(&self) -> Vec<Notification> {
        let mut guard = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *guard)
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_records_in_order() {
        let log = NotificationLog::new();
        log.notify(Notification::pending("Saving"));
        log.notify(Notification::success("Done"));
        assert_eq!(
            log.kinds(),
            vec![NotificationKind::Pending, NotificationKind::Success]
        );

        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_log_survives_poisoned_lock() {
        let log = std::sync::Arc::new(NotificationLog::new());
        let poisoner = std::sync::Arc::clone(&log);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.entries.lock().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(log.entries.is_poisoned());

        log.notify(Notification::failure("Error"));
        assert_eq!(log.kinds(), vec![NotificationKind::Failure]);
        assert_eq!(log.drain().len(), 1);
    }

    #[test]
    fn test_closure_notifier() {
        let log = NotificationLog::new();
        let forward = |n: Notification| log.notify(n);
        forward.notify(Notification::info("hello"));
        assert_eq!(log.entries()[0].kind, NotificationKind::Info);
        assert_eq!(log.entries()[0].duration, DEFAULT_NOTIFICATION_DURATION);
    }
}
