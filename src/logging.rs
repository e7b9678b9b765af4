//! Stderr logging for the diagram generator.
//!
//! Level is controlled by the `PEERWIRE_DIAGRAMS_LOG` environment variable
//! (`off`, `error`, `warn`, `info`, `debug`, `trace`). Defaults to `warn`,
//! so a normal run prints nothing beyond the final success line on stdout.

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{:<5}] [{}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

fn level_from_env() -> LevelFilter {
    match std::env::var("PEERWIRE_DIAGRAMS_LOG") {
        Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Warn,
        },
        Err(_) => LevelFilter::Warn,
    }
}

/// Install the stderr logger. Safe to call more than once; only the first
/// call wins (matters for tests that exercise the binary path).
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_from_env());
    }
}
