//! Structured logging setup.
//!
//! Logs go to stderr, stdout carries only the results.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "STRIDER_LOG";

/// Initialize structured logging based on CLI arguments.
///
/// The level is `warn` by default and `debug` with `verbose`. An explicit
/// `log_level` takes precedence, either a bare level or a full filter
/// directive. `RUST_LOG` or `STRIDER_LOG` override both.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let directive = match (verbose, log_level) {
        (_, Some(level)) => filter_directive(level),
        (true, None) => filter_directive("debug"),
        (false, None) => filter_directive("warn"),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(fmt::format::FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("strider={level}")
    }
}
