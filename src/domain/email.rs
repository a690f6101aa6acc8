//! Recipient and message domain types

use std::fmt;

use crate::error::{AppError, Result};

// Shallow shape gate: non-whitespace, non-'@' runs either side of a single
// '@', with at least one '.' in the domain part. Anything stricter is the
// relay's job to reject.
lazy_static::lazy_static! {
    pub static ref EMAIL_REGEX: regex::Regex =
        regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// A recipient address that passed the shallow format gate.
///
/// [`EmailAddress::parse`] is the only constructor, so holding the type means
/// the shape check already ran. The inner string is stored as given; no
/// normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Check the `local@domain.tld` shape and wrap the address.
    pub fn parse(raw: &str) -> Result<Self> {
        if EMAIL_REGEX.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(AppError::Validation(format!(
                "invalid recipient address '{raw}'"
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email message to be sent
///
/// Exactly one recipient per message; the tool has no multi-recipient or
/// partial-success concept.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: EmailAddress,
    pub subject: String,
    pub html_body: String,
}

impl EmailMessage {
    pub fn new(to: EmailAddress, subject: impl Into<String>, html_body: impl Into<String>) -> Self {
        Self {
            to,
            subject: subject.into(),
            html_body: html_body.into(),
        }
    }
}
