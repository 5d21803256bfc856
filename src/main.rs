use clap::Parser;
use koyeb_touch::utils::{logger, validation::Validate};
use koyeb_touch::{CliConfig, KoyebClient, TouchEngine};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    let ctx = config.context();
    tracing::debug!("Run context: {:?}", ctx);

    if let Err(e) = ctx.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    let engine = TouchEngine::new(KoyebClient::new(), ctx);

    match engine.run().await {
        Ok(report) => {
            tracing::info!(
                "Touch of '{}' finished with HTTP {}",
                report.service_name,
                report.status
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Touch failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }
}
