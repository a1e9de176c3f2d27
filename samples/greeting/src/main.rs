//! greeting
//!
//! Asks for a name on standard input and greets it on standard output.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin greeting
//!
//! # with interpreter events on stderr
//! RUST_LOG=inert=trace cargo run --bin greeting
//! ```

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeting_sample::persistent_greeting;

const ATTEMPTS: usize = 3;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greeting=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Only a description so far; run_unsafe performs it.
    let program = persistent_greeting(ATTEMPTS);

    match program.run_unsafe() {
        Ok(Some(message)) => {
            tracing::info!(%message, "greeted");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            tracing::info!(attempts = ATTEMPTS, "no name given");
            ExitCode::FAILURE
        }
        Err(error) => {
            tracing::error!(%error, "console failed");
            ExitCode::FAILURE
        }
    }
}
