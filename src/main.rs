use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vericode_mailer::cli::{self, ParseOutcome};
use vericode_mailer::config::Config;
use vericode_mailer::domain::SendReport;
use vericode_mailer::email::SmtpEmailProvider;
use vericode_mailer::service::VerificationMailer;

#[tokio::main]
async fn main() {
    // Logging goes to stderr; stdout carries only the JSON report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vericode_mailer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = match cli::parse_args(std::env::args_os()) {
        ParseOutcome::Run(cli) => cli,
        ParseOutcome::Exit => return,
        ParseOutcome::Usage(report) => emit(&report),
    };

    dotenvy::dotenv().ok();

    let report = match build_mailer() {
        Ok(mailer) => cli::run(&cli, &mailer).await,
        Err(e) => {
            tracing::error!("Startup failed: {}", e);
            SendReport::from(e)
        }
    };

    emit(&report)
}

/// Load configuration and assemble the service around the SMTP provider.
///
/// Building the transport opens no connection; the relay is first contacted
/// inside `send`, after the recipient has passed validation.
fn build_mailer() -> vericode_mailer::Result<VerificationMailer> {
    let config = Config::from_env()?;
    let provider = SmtpEmailProvider::from_config(&config.smtp)?;

    Ok(VerificationMailer::new(Box::new(provider), config.app_name))
}

/// Print the report as one JSON line and exit with the matching code.
fn emit(report: &SendReport) -> ! {
    println!("{}", report.to_json_line());
    std::process::exit(report.exit_code())
}
