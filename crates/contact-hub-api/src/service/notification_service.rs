use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use contact_hub_core::constants::{NOTIFICATION_DISPLAY_DURATION_MS, NOTIFICATION_FADE_OUT_MS};
use contact_hub_core::notification::Notification;
use tokio::sync::RwLock;

#[cfg(test)]
use mockall::automock;

/// Transient user feedback.
///
/// Notifications are a side effect only: services push messages, the
/// presentation layer polls the active set, and no other component reads
/// notification state.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationServiceApi: Send + Sync {
    /// Enqueues a transient message and starts its auto-dismiss timer.
    /// Messages stack; each one dismisses itself independently.
    async fn notify(&self, message: &str) -> Notification;

    /// The currently displayed notifications, oldest first. Entries that
    /// are no longer `active` are in their fade-out transition.
    async fn active_notifications(&self) -> Vec<Notification>;
}

/// A default implementation of the NotificationServiceApi that keeps the
/// displayed set in memory and dismisses every entry from its own spawned
/// timer.
#[derive(Default)]
pub struct DefaultNotificationService {
    active: Arc<RwLock<Vec<Notification>>>,
}

impl DefaultNotificationService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationServiceApi for DefaultNotificationService {
    async fn notify(&self, message: &str) -> Notification {
        let notification = Notification::new(message);
        self.active.write().await.push(notification.clone());

        // fire-and-forget; the timer only ever touches the displayed set
        // and never re-enters any store logic
        let active = self.active.clone();
        let id = notification.id.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(NOTIFICATION_DISPLAY_DURATION_MS)).await;
            if let Some(entry) = active.write().await.iter_mut().find(|n| n.id == id) {
                entry.active = false;
            }
            tokio::time::sleep(Duration::from_millis(NOTIFICATION_FADE_OUT_MS)).await;
            active.write().await.retain(|n| n.id != id);
        });

        notification
    }

    async fn active_notifications(&self) -> Vec<Notification> {
        self.active.read().await.clone()
    }
}
