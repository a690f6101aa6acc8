//! Vericode Mailer - Transactional verification-code email sender
//!
//! One-shot CLI invoked by a backend service: it validates a recipient
//! address, renders the verification-code email, submits it over SMTPS, and
//! reports the outcome as a single JSON line on stdout.

pub mod cli;
pub mod config;
pub mod domain;
pub mod email;
pub mod error;
pub mod service;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
