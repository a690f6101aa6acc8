//! Email provider trait and error types

use crate::domain::EmailMessage;
use async_trait::async_trait;
use thiserror::Error;

/// Email provider error types
#[derive(Error, Debug)]
pub enum EmailProviderError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid mailbox: {0}")]
    InvalidMailbox(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Send failed: {0}")]
    SendFailed(String),
}

/// Acknowledgement returned once a provider has handed a message off.
#[derive(Debug, Clone, Default)]
pub struct SendReceipt {
    /// Server-assigned identifier, when the transport exposes one
    pub message_id: Option<String>,
}

/// Trait for email providers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Send an email message
    async fn send(&self, message: &EmailMessage) -> Result<SendReceipt, EmailProviderError>;
}
