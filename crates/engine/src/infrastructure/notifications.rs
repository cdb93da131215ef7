//! Notification adapter that routes toasts into the tracing pipeline.

use crate::infrastructure::ports::{NotificationLevel, NotificationPort};

/// Writes user notifications as log events under the `notifications` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationPort for TracingNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Info => tracing::info!(target: "notifications", "{}", message),
            NotificationLevel::Warning => tracing::warn!(target: "notifications", "{}", message),
            NotificationLevel::Error => tracing::error!(target: "notifications", "{}", message),
        }
    }
}
