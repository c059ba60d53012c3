//! Toast notifications.
//!
//! [`ToastStack`] is the plain state: toasts stack in arrival order, each with its own
//! lifetime, and are removed by expiry or manual dismissal. [`Notifier`] wraps it in a signal
//! and sweeps expired toasts when each one's timer fires.

use std::time::Duration;

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::client::util::sleep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
    Warn,
}

impl ToastLevel {
    /// daisyUI alert class for this level.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
            Self::Info => "alert-info",
            Self::Warn => "alert-warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub duration: Duration,
}

impl Toast {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + chrono::Duration::milliseconds(self.duration.as_millis() as i64)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    /// Add a toast on top of the existing ones and return its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>, duration: Duration) -> u64 {
        self.push_at(level, message, duration, Utc::now())
    }

    pub fn push_at(
        &mut self,
        level: ToastLevel,
        message: impl Into<String>,
        duration: Duration,
        now: DateTime<Utc>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
            created_at: now,
            duration,
        });

        id
    }

    /// Remove a toast; returns false when it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);

        self.toasts.len() != before
    }

    /// Remove every toast whose lifetime has elapsed at `now`, returning how many were removed.
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at() > now);

        before - self.toasts.len()
    }

    /// Run when the timer of toast `id` fires: sweep everything expired at `now`, `id` included
    /// even if the timer fired a tick before the clock passed its `expires_at`.
    pub fn settle(&mut self, id: u64, now: DateTime<Utc>) -> usize {
        self.expire(now) + usize::from(self.dismiss(id))
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

/// Context handle for showing toasts.
#[derive(Clone, Copy, PartialEq)]
pub struct Notifier {
    stack: Signal<ToastStack>,
    default_duration: Duration,
}

impl Notifier {
    pub fn new(stack: Signal<ToastStack>, default_duration: Duration) -> Self {
        Self {
            stack,
            default_duration,
        }
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(ToastLevel::Success, message, self.default_duration)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(ToastLevel::Error, message, self.default_duration)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.show(ToastLevel::Info, message, self.default_duration)
    }

    pub fn warn(&self, message: impl Into<String>) -> u64 {
        self.show(ToastLevel::Warn, message, self.default_duration)
    }

    /// Show a toast with a custom lifetime.
    ///
    /// Must be called from within the Dioxus runtime, as the dismissal timer is spawned on it.
    pub fn show(&self, level: ToastLevel, message: impl Into<String>, duration: Duration) -> u64 {
        let mut stack = self.stack;
        let id = stack.write().push(level, message, duration);

        spawn(async move {
            sleep(duration).await;
            stack.write().settle(id, Utc::now());
        });

        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut stack = self.stack;
        stack.write().dismiss(id);
    }

    pub fn stack(&self) -> Signal<ToastStack> {
        self.stack
    }
}

/// Notifier provided by [`crate::client::App`].
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}
