//! Trait abstraction for the email provider to enable mocking in tests

use super::ProviderError;
use crate::config::ProviderConfig;
use crate::state::SubmissionPayload;
use async_trait::async_trait;

/// Delivers a contact form submission to a transactional email service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Send one message. Returns the provider's response body on success.
    async fn send(
        &self,
        config: &ProviderConfig,
        payload: &SubmissionPayload,
    ) -> Result<String, ProviderError>;
}
