//! `env_logger` setup shared by the binaries

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

/// Guards the one-time logger installation
static INIT: Once = Once::new();

/// Installs the global logger at `level`, letting `RUST_LOG` override it.
///
/// Calling this more than once is harmless; only the first call takes effect.
pub fn initialize_logger(level: LevelFilter) {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(level)
            .filter_module("wordtable", level)
            .format_timestamp_millis()
            .parse_default_env();

        // another logger may already be installed, e.g. by a test harness
        builder.try_init().ok();
    });
}

/// Maps a `-v` count onto a level filter, starting from warnings
#[must_use]
pub fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
