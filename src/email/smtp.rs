//! SMTP email provider implementation using lettre

use super::provider::{EmailProvider, EmailProviderError, SendReceipt};
use crate::config::SmtpConfig;
use crate::domain::EmailMessage;
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// SMTP email provider speaking SMTPS (TLS from the first byte, port 465)
pub struct SmtpEmailProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_email: String,
    from_name: Option<String>,
}

impl SmtpEmailProvider {
    /// Create a new SMTP provider from configuration
    pub fn from_config(config: &SmtpConfig) -> Result<Self, EmailProviderError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| EmailProviderError::InvalidConfiguration(e.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from_email: config.from_email.clone(),
            from_name: config.from_name.clone(),
        })
    }

    fn build_from_mailbox(&self) -> Result<Mailbox, EmailProviderError> {
        let mailbox = if let Some(name) = &self.from_name {
            format!("{} <{}>", name, self.from_email)
        } else {
            self.from_email.clone()
        };

        mailbox.parse().map_err(|e| {
            EmailProviderError::InvalidConfiguration(format!("Invalid from address: {}", e))
        })
    }
}

#[async_trait]
impl EmailProvider for SmtpEmailProvider {
    async fn send(&self, message: &EmailMessage) -> Result<SendReceipt, EmailProviderError> {
        let from = self.build_from_mailbox()?;

        let to: Mailbox = message
            .to
            .as_str()
            .parse()
            .map_err(|e| EmailProviderError::InvalidMailbox(format!("{}: {}", message.to, e)))?;

        // HTML-only message, still wrapped in multipart/alternative
        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(&message.subject)
            .multipart(
                MultiPart::alternative().singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(message.html_body.clone()),
                ),
            )
            .map_err(|e| EmailProviderError::SendFailed(e.to_string()))?;

        match self.transport.send(email).await {
            Ok(response) => {
                // First line of the server reply doubles as a receipt
                let message_id = response.message().next().map(|s| s.to_string());
                Ok(SendReceipt { message_id })
            }
            Err(e) => {
                let error_msg = e.to_string();
                if error_msg.contains("authentication") || error_msg.contains("AUTH") {
                    Err(EmailProviderError::AuthenticationFailed(error_msg))
                } else if error_msg.contains("connection") || error_msg.contains("timeout") {
                    Err(EmailProviderError::ConnectionError(error_msg))
                } else {
                    Err(EmailProviderError::SendFailed(error_msg))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_smtp_config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 465,
            username: "mailer@example.com".to_string(),
            password: "password".to_string(),
            from_email: "noreply@example.com".to_string(),
            from_name: Some("NestChat".to_string()),
        }
    }

    #[test]
    fn test_smtp_provider_creation() {
        let provider = SmtpEmailProvider::from_config(&test_smtp_config());
        assert!(provider.is_ok());
    }

    #[test]
    fn test_build_from_mailbox() {
        let provider = SmtpEmailProvider::from_config(&test_smtp_config()).unwrap();

        let mailbox = provider.build_from_mailbox().unwrap();
        assert_eq!(mailbox.email.to_string(), "noreply@example.com");
        assert_eq!(mailbox.name.as_deref(), Some("NestChat"));
    }

    #[test]
    fn test_build_from_mailbox_without_name() {
        let config = SmtpConfig {
            from_name: None,
            ..test_smtp_config()
        };
        let provider = SmtpEmailProvider::from_config(&config).unwrap();

        let mailbox = provider.build_from_mailbox().unwrap();
        assert_eq!(mailbox.email.to_string(), "noreply@example.com");
        assert!(mailbox.name.is_none());
    }
}
