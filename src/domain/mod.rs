//! Domain models for the mailer CLI

pub mod email;
pub mod report;

pub use email::*;
pub use report::*;
