//! Notifier port - out-of-band delivery hooks.
//!
//! Real delivery (email, analytics) is out of scope; implementations may
//! log instead. Failures must not abort the triggering operation.

use async_trait::async_trait;
use uuid::Uuid;

/// Notification delivery abstraction.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a verification link for a freshly registered account.
    async fn verification_requested(&self, email: &str, token: &str) -> Result<(), NotifyError>;

    /// Announce a newly created post to downstream consumers.
    async fn post_created(&self, post_id: Uuid) -> Result<(), NotifyError>;
}

/// Notifier errors.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Delivery failed: {0}")]
    Delivery(String),
}
