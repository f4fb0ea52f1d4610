use probe_fixtures::utils::logger;
use probe_fixtures::ArgumentReporter;

// Every token is echoed, including ones that look like flags, so the
// arguments are taken as-is instead of going through a parser.
fn main() {
    logger::init_cli_logger(false);

    let reporter = ArgumentReporter::from_os_args(std::env::args_os().skip(1));
    tracing::debug!("Arguments: {:?}", reporter.args());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = reporter.report(&mut out) {
        tracing::error!("❌ Failed to report arguments: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
