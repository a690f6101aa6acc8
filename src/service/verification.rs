//! Verification-code email delivery

use crate::domain::{EmailAddress, EmailMessage, SendReport};
use crate::email::{EmailProvider, EmailTemplate, TemplateEngine, CODE_TTL_MINUTES};

/// Service that renders and sends the verification-code email
///
/// Every outcome of [`send_code`](VerificationMailer::send_code) is folded
/// into a [`SendReport`]; provider errors are logged to stderr and never
/// propagate.
pub struct VerificationMailer {
    provider: Box<dyn EmailProvider>,
    app_name: String,
}

impl VerificationMailer {
    pub fn new(provider: Box<dyn EmailProvider>, app_name: impl Into<String>) -> Self {
        Self {
            provider,
            app_name: app_name.into(),
        }
    }

    /// Render the verification email for `code` and send it to `to`
    pub async fn send_code(&self, to: &EmailAddress, code: &str) -> SendReport {
        let message = self.build_message(to, code);

        match self.provider.send(&message).await {
            Ok(receipt) => {
                tracing::debug!(
                    to = %message.to,
                    message_id = receipt.message_id.as_deref().unwrap_or(""),
                    "verification email accepted by relay"
                );
                SendReport::success("verification email sent")
            }
            Err(e) => {
                tracing::error!("Failed to send verification email: {}", e);
                SendReport::failure("failed to send verification email")
            }
        }
    }

    fn build_message(&self, to: &EmailAddress, code: &str) -> EmailMessage {
        let mut engine = TemplateEngine::new();
        engine
            .set("app_name", &self.app_name)
            .set("code", code)
            .set("expires_in_minutes", CODE_TTL_MINUTES.to_string());

        let rendered = engine.render_template(EmailTemplate::VerificationCode);

        EmailMessage::new(to.clone(), rendered.subject, rendered.html_body)
    }
}
