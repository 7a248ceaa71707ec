//! User-facing notices.

use super::ArcadeConfig;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::{error, info, instrument, warn};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
    /// Neutral information.
    Info,
    /// Something went right.
    Success,
    /// Rejected input.
    Warning,
    /// Failed request.
    Error,
}

/// Sink for messages meant for the player.
///
/// Sessions hold one of these instead of reaching for a global.
pub trait Notifier: Send + Sync {
    /// Shows `message` at `level`.
    fn notify(&self, level: NoticeLevel, message: &str);
}

/// Writes notices to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info | NoticeLevel::Success => info!(%level, "{}", message),
            NoticeLevel::Warning => warn!("{}", message),
            NoticeLevel::Error => error!("{}", message),
        }
    }
}

/// A queued notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id, used to dismiss.
    pub id: u64,
    /// Severity.
    pub level: NoticeLevel,
    /// Text.
    pub message: String,
    /// Visible lifetime.
    pub duration: Duration,
    /// When it was queued.
    pub created: Instant,
}

impl Toast {
    /// Whether the toast has outlived its duration at `now`.
    pub fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created) >= self.duration
    }
}

/// Stack of transient notices, newest last.
#[derive(Debug)]
pub struct ToastQueue {
    toasts: Mutex<Vec<Toast>>,
    next_id: AtomicU64,
    duration: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(ArcadeConfig::default().toast_duration())
    }
}

impl ToastQueue {
    /// Queue whose toasts live for `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            duration,
        }
    }

    /// Queue using the configured toast lifetime.
    pub fn from_config(config: &ArcadeConfig) -> Self {
        Self::new(config.toast_duration())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Toast>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds a toast and returns its id.
    #[instrument(skip(self, message))]
    pub fn push(&self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().push(Toast {
            id,
            level,
            message: message.into(),
            duration: self.duration,
            created: Instant::now(),
        });
        id
    }

    /// Removes a toast. Returns whether it was present.
    pub fn dismiss(&self, id: u64) -> bool {
        let mut toasts = self.lock();
        let before = toasts.len();
        toasts.retain(|t| t.id != id);
        toasts.len() != before
    }

    /// Drops toasts expired at `now`. Returns how many went.
    pub fn expire(&self, now: Instant) -> usize {
        let mut toasts = self.lock();
        let before = toasts.len();
        toasts.retain(|t| !t.expired(now));
        before - toasts.len()
    }

    /// Snapshot of the queued toasts, oldest first.
    pub fn active(&self) -> Vec<Toast> {
        self.lock().clone()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.push(level, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase_and_dismiss() {
        let queue = ToastQueue::default();
        let a = queue.push(NoticeLevel::Info, "one");
        let b = queue.push(NoticeLevel::Error, "two");
        assert!(b > a);
        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        let active = queue.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "two");
        assert_eq!(active[0].duration, Duration::from_millis(3000));
    }

    #[test]
    fn test_expire() {
        let queue = ToastQueue::new(Duration::from_millis(50));
        queue.notify(NoticeLevel::Warning, "soon gone");
        let later = Instant::now() + Duration::from_secs(1);
        assert_eq!(queue.expire(later), 1);
        assert!(queue.active().is_empty());
    }

    #[test]
    fn test_level_names() {
        assert_eq!(NoticeLevel::Warning.to_string(), "warning");
    }
}
