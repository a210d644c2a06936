use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use uct_cli::Cli;

/// Exit status for configuration, catalog and I/O failures
const ERROR_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    // Initialize tracing based on RUST_LOG env var; stdout is reserved for reports
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!("Running command: {:?}", cli.command);

    match cli.command.execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ Error: {e:#}");
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}
