//! Notification dispatch boundary.
//!
//! Delivery itself (mail transport etc.) lives outside this crate; the
//! dispatcher trait is the seam. [`RecordingDispatcher`] is the test-time
//! substitute that records attempted sends for assertion.

use std::sync::Arc;

use slipway_config::NotificationConfig;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::entities::{Notification, User};
use crate::types::{NotificationResult, UserId};

/// Delivers a typed notification to a specific recipient.
pub trait NotificationDispatcher: Send + Sync {
    async fn dispatch(
        &self,
        recipient: &User,
        notification: Notification,
    ) -> NotificationResult<()>;
}

/// Production dispatcher that hands notifications to the logging pipeline.
///
/// The real delivery channel is wired up by the surrounding application;
/// this one records the send in the structured log so operators can trace
/// outbound notifications.
#[derive(Debug, Clone)]
pub struct TracingDispatcher {
    config: NotificationConfig,
}

impl TracingDispatcher {
    pub fn new(config: NotificationConfig) -> Self {
        Self { config }
    }
}

impl NotificationDispatcher for TracingDispatcher {
    async fn dispatch(
        &self,
        recipient: &User,
        notification: Notification,
    ) -> NotificationResult<()> {
        if !self.config.enabled {
            debug!(
                recipient = %recipient.email,
                kind = ?notification.kind,
                "notifications disabled, dropping"
            );
            return Ok(());
        }

        info!(
            from = %self.config.from_address,
            recipient = %recipient.email,
            kind = ?notification.kind,
            subject = %notification.subject,
            "notification dispatched"
        );
        Ok(())
    }
}

/// A send captured by [`RecordingDispatcher`].
#[derive(Debug, Clone)]
pub struct SentNotification {
    pub recipient_id: UserId,
    pub recipient_email: String,
    pub notification: Notification,
}

/// Test dispatcher that records every send instead of delivering.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    sent: Arc<RwLock<Vec<SentNotification>>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send recorded so far.
    pub async fn sent(&self) -> Vec<SentNotification> {
        self.sent.read().await.clone()
    }

    /// Notifications recorded for a given recipient.
    pub async fn sent_to(&self, user: &User) -> Vec<Notification> {
        self.sent
            .read()
            .await
            .iter()
            .filter(|entry| entry.recipient_email == user.email)
            .map(|entry| entry.notification.clone())
            .collect()
    }
}

impl NotificationDispatcher for RecordingDispatcher {
    async fn dispatch(
        &self,
        recipient: &User,
        notification: Notification,
    ) -> NotificationResult<()> {
        self.sent.write().await.push(SentNotification {
            recipient_id: recipient.id,
            recipient_email: recipient.email.clone(),
            notification,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn recording_dispatcher_captures_sends() {
        let dispatcher = RecordingDispatcher::new();
        let user = User::new("Admin", "admin@example.com");

        dispatcher
            .dispatch(&user, Notification::password_reset("an-email-token"))
            .await
            .unwrap();

        let sent = dispatcher.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient_email, "admin@example.com");
        assert_eq!(
            sent[0].notification.token.as_deref(),
            Some("an-email-token")
        );
    }

    #[tokio::test]
    async fn sent_to_filters_by_recipient() {
        let dispatcher = RecordingDispatcher::new();
        let alice = User::new("Alice", "alice@example.com");
        let bob = User::new("Bob", "bob@example.com");

        dispatcher
            .dispatch(&alice, Notification::password_reset("alice-token"))
            .await
            .unwrap();
        dispatcher
            .dispatch(&bob, Notification::email_verification("bob-token"))
            .await
            .unwrap();

        let to_alice = dispatcher.sent_to(&alice).await;
        assert_eq!(to_alice.len(), 1);
        assert_eq!(to_alice[0].token.as_deref(), Some("alice-token"));
    }

    #[tokio::test]
    async fn disabled_tracing_dispatcher_still_succeeds() {
        let config = NotificationConfig {
            from_address: "slipway@localhost".to_string(),
            enabled: false,
        };
        let dispatcher = TracingDispatcher::new(config);
        let user = User::new("Admin", "admin@example.com");

        let result = dispatcher
            .dispatch(&user, Notification::password_reset("an-email-token"))
            .await;
        assert!(result.is_ok());
    }
}
