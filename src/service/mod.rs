//! Business logic layer

pub mod verification;

pub use verification::VerificationMailer;
