//! Subscriber setup for hosts and tests that want to watch cache activity.
//!
//! The library itself only emits `tracing` events: `debug` when selectors and
//! memoizers are built, `trace` for every cache hit, miss and eviction.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    fn filter(self) -> String {
        let level = self.level();
        format!("memo_select={level}")
    }
}

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `verbosity`. Returns an error when a
/// global subscriber is already set, so tests may call this repeatedly.
pub fn init(verbosity: Verbosity) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(verbosity >= Verbosity::Debug)
        .with_line_number(verbosity >= Verbosity::Debug)
        .compact();

    let installed = match verbosity {
        Verbosity::Quiet => subscriber.with_writer(std::io::sink).try_init(),
        Verbosity::Normal => subscriber.without_time().try_init(),
        _ => subscriber.with_test_writer().try_init(),
    };

    installed.map_err(|e| Error::Logging(e.to_string()))
}
