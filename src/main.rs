use digital_bank::run::run;

use std::process::ExitCode;
use tracing::Level;

fn main() -> ExitCode {
    // Logs go to stderr so they never mix with the session output.
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    match run(stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "demonstration failed");
            ExitCode::FAILURE
        }
    }
}
