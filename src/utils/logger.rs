//! Logging setup and print macros
//!
//! Everything goes through the `log` facade, so library callers pick their own
//! logger. The binary installs `env_logger` through [`init_debug_logging`].
use env_logger::Env;

/// Initialize logging to stderr. `verbose` lowers the default level to debug;
/// `RUST_LOG` still wins when set.
pub fn init_debug_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
    log::debug!("🐛 Debug logging enabled");
}

/// Debug print macro - only shows when debug logging is enabled
#[macro_export]
macro_rules! debug_print {
    ($($arg:tt)*) => {
        $crate::log::debug!($($arg)*)
    };
}

/// Debug error print macro - recoverable problems worth a warning
#[macro_export]
macro_rules! debug_eprint {
    ($($arg:tt)*) => {
        $crate::log::warn!($($arg)*)
    };
}

/// Program output on stdout, independent of the log level
#[macro_export]
macro_rules! always_print {
    ($($arg:tt)*) => {
        println!($($arg)*)
    };
}

/// User-facing failures on stderr, independent of the log level
#[macro_export]
macro_rules! always_eprint {
    ($($arg:tt)*) => {
        eprintln!($($arg)*)
    };
}
