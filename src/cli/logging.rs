//! Diagnostic stream setup.
//!
//! Diagnostics go to stderr (warnings by default) and, with `--log-file`,
//! to a file at debug level. While the TUI owns the terminal, stderr output
//! is held back and written out once the terminal is restored.

use super::CliError;
use log::LevelFilter;
use simplelog::{CombinedLogger, ConfigBuilder, SharedLogger, WriteLogger};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

static HOLDING: AtomicBool = AtomicBool::new(false);
static HELD: Mutex<Vec<u8>> = Mutex::new(Vec::new());

/// Initialize the global logger.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a logger is
/// already installed.
pub(crate) fn init(log_file: Option<&Path>, verbose: bool) -> Result<(), CliError> {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    let stderr_level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> =
        vec![WriteLogger::new(stderr_level, config.clone(), DiagnosticStream)];

    if let Some(path) = log_file {
        let file = File::create(path).map_err(|e| {
            CliError::new(format!("Failed to create log file {}: {e}", path.display()))
        })?;
        loggers.push(WriteLogger::new(LevelFilter::Debug, config, file));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}

/// Guard that holds stderr diagnostics until dropped.
#[derive(Debug)]
pub(crate) struct HoldDiagnostics {
    _private: (),
}

/// Start holding stderr diagnostics.
pub(crate) fn hold() -> HoldDiagnostics {
    HOLDING.store(true, Ordering::Release);
    HoldDiagnostics { _private: () }
}

impl Drop for HoldDiagnostics {
    fn drop(&mut self) {
        HOLDING.store(false, Ordering::Release);
        let held = HELD.lock().map(|mut held| std::mem::take(&mut *held));
        if let Ok(bytes) = held
            && !bytes.is_empty()
        {
            let mut stderr = io::stderr();
            let _ = stderr.write_all(&bytes);
            let _ = stderr.flush();
        }
    }
}

/// Stderr, unless diagnostics are being held.
struct DiagnosticStream;

impl Write for DiagnosticStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if HOLDING.load(Ordering::Acquire) {
            let mut held = HELD
                .lock()
                .map_err(|_| io::Error::other("diagnostic buffer poisoned"))?;
            held.extend_from_slice(buf);
            Ok(buf.len())
        } else {
            io::stderr().write(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if HOLDING.load(Ordering::Acquire) {
            Ok(())
        } else {
            io::stderr().flush()
        }
    }
}
