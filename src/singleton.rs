// Singleton Pattern
// One process-wide `Logger`, created on first access through a `OnceLock` guard.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use crate::sink::Sink;

pub struct Logger {
    messages: AtomicUsize,
}

impl Logger {
    /// Returns the shared logger, initialising it exactly once even under concurrent first access.
    pub fn instance() -> &'static Logger {
        static INSTANCE: OnceLock<Logger> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            tracing::debug!("logger singleton initialised");
            Logger {
                messages: AtomicUsize::new(0),
            }
        })
    }

    pub fn log(&self, out: &mut dyn Sink, message: &str) {
        self.messages.fetch_add(1, Ordering::Relaxed);
        out.write(&format!("Log: {message}"));
    }

    /// Total messages logged through the shared instance since process start.
    pub fn messages_logged(&self) -> usize {
        self.messages.load(Ordering::Relaxed)
    }
}

pub fn demo(out: &mut dyn Sink) {
    let logger1 = Logger::instance();
    logger1.log(out, "This is the first log message.");

    let logger2 = Logger::instance();
    logger2.log(out, "This is the second log message.");

    out.write(&format!(
        "Are both instances the same? {}",
        std::ptr::eq(logger1, logger2)
    ));
}
