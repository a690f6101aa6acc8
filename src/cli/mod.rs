//! Command-line surface
//!
//! The invoking backend reads stdout, so the contract is narrow: exactly one
//! JSON line on every path, logging on stderr, exit code mirroring the
//! `success` flag. clap's own help/version output is tooling surface and is
//! exempt from the one-line rule.

use clap::error::ErrorKind;
use clap::Parser;

use crate::domain::{EmailAddress, SendReport};
use crate::error::AppError;
use crate::service::VerificationMailer;

/// Hint carried in the JSON `error` field for any malformed invocation.
pub const USAGE_HINT: &str = "expected exactly two arguments: <EMAIL> <CODE>";

/// Send a verification-code email to one recipient
#[derive(Debug, Parser)]
#[command(
    name = "vericode-mailer",
    about = "Send a verification-code email to one recipient",
    version
)]
pub struct Cli {
    /// Recipient email address
    pub email: String,

    /// Verification code interpolated into the message body
    pub code: String,
}

/// Outcome of argument parsing
pub enum ParseOutcome {
    /// Arguments are well-formed; run the pipeline
    Run(Cli),
    /// clap handled `--help`/`--version`; exit 0
    Exit,
    /// Malformed invocation; print the report and exit 1
    Usage(SendReport),
}

/// Parse an argument vector without letting clap write the error itself
pub fn parse_args<I, T>(args: I) -> ParseOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => ParseOutcome::Run(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            ParseOutcome::Exit
        }
        Err(_) => ParseOutcome::Usage(SendReport::from(AppError::Usage(USAGE_HINT.to_string()))),
    }
}

/// Run the validate-and-send pipeline
///
/// Total: every failure becomes a failure report, nothing panics or
/// propagates. The recipient is validated before the provider is touched.
pub async fn run(cli: &Cli, mailer: &VerificationMailer) -> SendReport {
    let to = match EmailAddress::parse(&cli.email) {
        Ok(address) => address,
        Err(e) => return SendReport::from(e),
    };

    mailer.send_code(&to, &cli.code).await
}
