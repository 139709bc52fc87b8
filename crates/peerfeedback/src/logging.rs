//! Logging configuration for peerfeedback.
//!
//! Events go to stderr so they never interleave with session output, which
//! is written to stdout and may be piped.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Suppress all output except errors.
    Quiet,
    /// Normal output level (info and above).
    #[default]
    Normal,
    /// Verbose output (debug and above).
    Verbose,
    /// Very verbose output (trace level).
    Trace,
}

impl Verbosity {
    /// Convert verbosity to tracing level filter.
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// The default `EnvFilter` directive for this verbosity.
    #[must_use]
    pub fn directive(&self) -> String {
        format!("peerfeedback={}", self.to_level_filter())
    }
}

/// Initialize the logging system.
///
/// Call once at startup. `RUST_LOG`, when set, takes precedence over
/// `verbosity`.
///
/// # Examples
///
/// ```no_run
/// use peerfeedback::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false),
    );

    // Ignore the error if a subscriber is already installed
    let _ = subscriber.try_init();
}

/// Initialize logging for tests.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Verbosity; 4] = [
        Verbosity::Quiet,
        Verbosity::Normal,
        Verbosity::Verbose,
        Verbosity::Trace,
    ];

    #[test]
    fn test_directive_targets_this_crate() {
        let directives: Vec<String> = ALL.iter().map(Verbosity::directive).collect();
        assert_eq!(
            directives,
            vec![
                "peerfeedback=ERROR",
                "peerfeedback=INFO",
                "peerfeedback=DEBUG",
                "peerfeedback=TRACE",
            ]
        );
    }

    #[test]
    fn test_directive_is_a_valid_env_filter() {
        for verbosity in ALL {
            assert!(
                EnvFilter::try_new(verbosity.directive()).is_ok(),
                "{verbosity:?} produced an unparseable filter"
            );
        }
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(Verbosity::Quiet);
        init_logging(Verbosity::Trace);
    }
}
