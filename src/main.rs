//! Month calendar CLI application.
//!
//! # Usage
//! ```ignore
//! monthcal            // Current month
//! monthcal 2 2026     // February 2026, Monday first
//! monthcal 2 2026 7   // February 2026, Sunday first
//! ```

use monthcal::args::Args;
use monthcal::error::CalError;
use monthcal::formatter::write_month;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = run(&args) {
        debug!(user_error = e.is_user_error(), exit_code = e.exit_code(), "run failed");
        eprintln!("monthcal: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<(), CalError> {
    let spec = args.month_spec()?;
    let stdout = std::io::stdout();
    write_month(&mut stdout.lock(), &spec)
}
