use std::{
    fmt::Arguments,
    io::{LineWriter, Stderr, Write, stderr},
    sync::{
        LazyLock, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

static SINK: LazyLock<Mutex<LineWriter<Stderr>>> =
    LazyLock::new(|| Mutex::new(LineWriter::new(stderr())));

static LOG_ENABLED: AtomicBool = AtomicBool::new(true);

/// Silence all logging, for hosts that want the terminal to themselves
pub fn disable_logging() {
    LOG_ENABLED.store(false, Ordering::Release);
}

/// Returns whether or not logging is on
pub fn logging_enabled() -> bool {
    LOG_ENABLED.load(Ordering::Acquire)
}

#[doc(hidden)]
pub fn _write_log(args: Arguments) {
    SINK.lock()
        .expect("failed to acquire lock on the log sink")
        .write_fmt(args)
        .expect("failed to write to the log sink");
}

/// Generic log something attributing it to Garnet
#[macro_export]
macro_rules! generic_log {
    ($($arg: tt)*) => {{
        if $crate::logging::logging_enabled() {
            $crate::logging::_write_log(format_args!("[ \x1b[97mGarnet\x1b[0m ] {}\n", format_args!($($arg)*)));
        }
    }};
}

/// Log information about an event that isn't a debug event
#[macro_export]
macro_rules! log {
    ($($arg: tt)*) => ($crate::generic_log!("[  \x1b[32mInfo\x1b[0m  ]\x1b[90m:\x1b[0m {}", format_args!($($arg)*)));
}

/// Log debug information
#[macro_export]
macro_rules! dlog {
    ($($arg: tt)*) => ($crate::generic_log!("[  \x1b[91mDebug\x1b[0m  ]\x1b[90m:\x1b[0m {}", format_args!($($arg)*)));
}
