//! Process-wide logger behind the [`log`] facade.
//!
//! Records go to stderr, except while the terminal interface owns the screen: then they are held
//! back and written out once the terminal has been restored.

use std::{
    fmt, io,
    io::Write as _,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, MutexGuard, OnceLock, PoisonError,
    },
};

use color_eyre::eyre::Result;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// The installed logger.
static LOGGER: OnceLock<AppLogger> = OnceLock::new();

/// A formatted log record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Message {
    /// Severity of the record.
    pub(crate) level: Level,
    /// Module the record came from.
    pub(crate) target: String,
    /// Formatted record text.
    pub(crate) text: String,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:<5}] {}: {}", self.level, self.target, self.text)
    }
}

/// Logger writing to stderr, with an optional hold-back buffer.
#[derive(Debug)]
pub(crate) struct AppLogger {
    /// Most verbose level let through.
    level: LevelFilter,
    /// Whether records are currently held back instead of written.
    buffered: AtomicBool,
    /// Records held back while buffering.
    pending: Mutex<Vec<Message>>,
}

impl AppLogger {
    /// Creates a logger letting through records up to `level`.
    pub(crate) const fn new(level: LevelFilter) -> Self {
        Self {
            level,
            buffered: AtomicBool::new(false),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Locks the pending records, recovering them if a panicking thread poisoned the lock.
    fn pending(&self) -> MutexGuard<'_, Vec<Message>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts holding records back.
    pub(crate) fn hold(&self) {
        self.buffered.store(true, Ordering::Release);
    }

    /// Stops holding records back and returns the ones collected meanwhile.
    pub(crate) fn release(&self) -> Vec<Message> {
        self.buffered.store(false, Ordering::Release);
        self.pending().drain(..).collect()
    }

    /// Stops holding records back and writes the collected ones to stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if stderr cannot be written to.
    pub(crate) fn release_to_stderr(&self) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        for message in self.release() {
            writeln!(stderr, "{message}")?;
        }

        Ok(())
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = Message {
            level: record.level(),
            target: record.target().to_owned(),
            text: record.args().to_string(),
        };

        if self.buffered.load(Ordering::Acquire) {
            self.pending().push(message);
        } else {
            // A logger has nowhere to report its own write failures.
            writeln!(io::stderr().lock(), "{message}").unwrap_or_default();
        }
    }

    fn flush(&self) {
        io::stderr().flush().unwrap_or_default();
    }
}

/// Maps the number of `-v` flags to a level filter.
pub(crate) const fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the process-wide logger and sets the maximum level.
///
/// # Errors
///
/// Returns an error if another logger has already been installed.
pub(crate) fn init(level: LevelFilter) -> Result<&'static AppLogger> {
    let logger = LOGGER.get_or_init(|| AppLogger::new(level));
    log::set_logger(logger)?;
    log::set_max_level(level);

    Ok(logger)
}
