//! Transient toast notifications

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Visual weight of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Destructive,
}

/// A single notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
}

impl Toast {
    /// How long a toast stays on screen
    pub const TTL: Duration = Duration::from_secs(4);

    fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= Self::TTL
    }
}

/// Queue of active toasts, newest last
#[derive(Debug, Default)]
pub struct Notifications {
    toasts: VecDeque<Toast>,
}

impl Notifications {
    /// Keep at most this many toasts around
    const MAX_TOASTS: usize = 3;

    pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), ToastVariant::Success);
    }

    pub fn destructive(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), ToastVariant::Destructive);
    }

    fn push(&mut self, title: String, description: String, variant: ToastVariant) {
        if self.toasts.len() == Self::MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            title,
            description,
            variant,
            created_at: Instant::now(),
        });
    }

    /// Drop expired toasts
    pub fn prune(&mut self) {
        let now = Instant::now();
        self.toasts.retain(|t| !t.is_expired_at(now));
    }

    /// Most recent toast, if any
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_newest() {
        let mut n = Notifications::default();
        n.success("Link copied!", "Share this link");
        n.destructive("Error", "Failed");
        let latest = n.latest().unwrap();
        assert_eq!(latest.title, "Error");
        assert_eq!(latest.variant, ToastVariant::Destructive);
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut n = Notifications::default();
        for i in 0..5 {
            n.success(format!("t{i}"), "");
        }
        assert_eq!(n.toasts.len(), Notifications::MAX_TOASTS);
        assert_eq!(n.latest().unwrap().title, "t4");
    }

    #[test]
    fn test_prune_keeps_fresh_toasts() {
        let mut n = Notifications::default();
        n.success("fresh", "");
        n.prune();
        assert_eq!(n.toasts.len(), 1);
    }

    #[test]
    fn test_expiry() {
        let toast = Toast {
            title: String::new(),
            description: String::new(),
            variant: ToastVariant::Success,
            created_at: Instant::now(),
        };
        assert!(!toast.is_expired_at(toast.created_at));
        assert!(toast.is_expired_at(toast.created_at + Toast::TTL));
    }

    #[test]
    fn test_dismiss_all() {
        let mut n = Notifications::default();
        n.success("a", "");
        n.destructive("b", "");
        n.dismiss_all();
        assert!(n.is_empty());
        assert!(n.latest().is_none());
    }
}
