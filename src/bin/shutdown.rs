use clap::Parser;
use probe_fixtures::utils::logger;
use probe_fixtures::{DelayedExit, OsSignals, ShutdownCli};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = ShutdownCli::parse();

    logger::init_cli_logger(cli.verbose);

    let signals = match OsSignals::install() {
        Ok(signals) => signals,
        Err(e) => {
            tracing::error!("❌ {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let responder = DelayedExit::new(signals);
    tracing::info!(
        "Listening for SIGINT and SIGTERM (grace period {:?})",
        responder.config().grace_period
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match responder.run(&mut out).await {
        // Forced exit: nothing else gets a chance to run.
        Ok(report) => std::process::exit(report.exit_code),
        Err(e) => {
            tracing::error!("❌ Delayed exit failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
