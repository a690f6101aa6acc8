//! Email sending functionality
//!
//! Providers implement the [`EmailProvider`] trait; the only shipped
//! implementation talks SMTPS through lettre. Message bodies come from the
//! templates submodule.

pub mod provider;
pub mod smtp;
pub mod templates;

pub use provider::{EmailProvider, EmailProviderError, SendReceipt};
pub use smtp::SmtpEmailProvider;
pub use templates::{EmailTemplate, RenderedEmail, TemplateEngine, CODE_TTL_MINUTES};
