//! Configuration management
//!
//! Every SMTP setting comes from the environment (or a local `.env` file);
//! no credential is compiled into the binary.

use crate::error::Result;
use anyhow::Context;
use std::env;
use validator::Validate;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SMTP relay configuration
    pub smtp: SmtpConfig,
    /// Product name rendered into the email template
    pub app_name: String,
}

/// SMTP relay configuration (SMTPS, implicit TLS)
#[derive(Debug, Clone, Validate)]
pub struct SmtpConfig {
    /// Relay hostname
    #[validate(length(min = 1, message = "relay host must not be empty"))]
    pub host: String,
    /// Relay port
    pub port: u16,
    /// Relay account
    pub username: String,
    /// Relay credential
    pub password: String,
    /// Sender address
    #[validate(email(message = "sender address must be a valid email"))]
    pub from_email: String,
    /// Sender display name
    pub from_name: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let smtp = SmtpConfig {
            host: env::var("MAILER_SMTP_HOST").context("MAILER_SMTP_HOST is required")?,
            port: env::var("MAILER_SMTP_PORT")
                .unwrap_or_else(|_| "465".to_string())
                .parse()
                .context("Invalid MAILER_SMTP_PORT")?,
            username: env::var("MAILER_SMTP_USERNAME")
                .context("MAILER_SMTP_USERNAME is required")?,
            password: env::var("MAILER_SMTP_PASSWORD")
                .context("MAILER_SMTP_PASSWORD is required")?,
            from_email: env::var("MAILER_FROM_EMAIL").context("MAILER_FROM_EMAIL is required")?,
            from_name: env::var("MAILER_FROM_NAME").ok(),
        };

        smtp.validate()?;

        Ok(Self {
            smtp,
            app_name: env::var("MAILER_APP_NAME").unwrap_or_else(|_| "NestChat".to_string()),
        })
    }
}
