//! Verbosity selected by `--debug` / `--trace`

use std::io::Write;

use log::LevelFilter;

/// Console verbosity. Ordered: each level shows everything the previous one does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    #[default]
    Default,
    /// Request URLs, response status and body
    Debug,
    /// Debug output plus request headers (credential redacted)
    Trace,
}

impl LogLevel {
    /// `--trace` wins over `--debug`.
    pub fn from_flags(debug: bool, trace: bool) -> Self {
        if trace {
            LogLevel::Trace
        } else if debug {
            LogLevel::Debug
        } else {
            LogLevel::Default
        }
    }

    pub fn filter(&self) -> LevelFilter {
        match self {
            LogLevel::Default => LevelFilter::Warn,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Install the stderr logger.
///
/// Dependencies stay at `warn`; `RUST_LOG` applies on top, and `--debug` /
/// `--trace` raise this crate's level last so they always take effect.
pub fn init_logger(level: LogLevel) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));

    if level > LogLevel::Default {
        builder.filter_module(env!("CARGO_CRATE_NAME"), level.filter());
    }

    // A second init (e.g. from tests) keeps the first logger
    let _ = builder.try_init();
}
