//! Notifier implementations.
//!
//! Real email delivery and analytics ingestion are out of scope; the log
//! notifier writes both through `tracing` so operators can see the mocked
//! traffic.

use async_trait::async_trait;
use uuid::Uuid;

use ripple_core::ports::{Notifier, NotifyError};

/// Notifier that logs instead of delivering.
pub struct LogNotifier {
    base_url: String,
}

impl LogNotifier {
    /// `base_url` is the public address used to build verification links.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn verification_requested(&self, email: &str, token: &str) -> Result<(), NotifyError> {
        tracing::info!(
            recipient = %email,
            "[EMAIL MOCK] verification link: {}/api/auth/verify?token={}",
            self.base_url,
            token
        );
        Ok(())
    }

    async fn post_created(&self, post_id: Uuid) -> Result<(), NotifyError> {
        tracing::info!(%post_id, "[ANALYTICS MOCK] new post notification");
        Ok(())
    }
}
