//! User-visible notifications
//!
//! Short transient toasts for recoverable errors and a single blocking
//! alert for login outcomes.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Lifetime of a short toast
pub const TOAST_SHORT: Duration = Duration::from_secs(2);

const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

/// Modal dialog; blocks interaction until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Default)]
pub struct Notifications {
    toasts: VecDeque<Toast>,
    alert: Option<Alert>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toast(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "Toast");
        self.toasts.push_back(Toast {
            message,
            expires_at: Instant::now() + TOAST_SHORT,
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }

    /// Show an alert, replacing any alert still open
    pub fn alert(&mut self, title: impl Into<String>, body: impl Into<String>) {
        let alert = Alert {
            title: title.into(),
            body: body.into(),
        };
        tracing::debug!(title = %alert.title, "Alert");
        self.alert = Some(alert);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn current_alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Drop toasts whose time is up
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn latest_toast(&self) -> Option<&str> {
        self.toasts.back().map(|t| t.message.as_str())
    }

    pub fn toast_messages(&self) -> Vec<String> {
        self.toasts.iter().map(|t| t.message.clone()).collect()
    }
}
