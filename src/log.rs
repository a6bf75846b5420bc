// src/log.rs
//
// Thin wrapper around `tracing`. The GUI writes to `.store/debug.log`,
// the CLI to stderr. Call sites use the short logf!/logd!/logw!/loge! macros.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_ENV, LOG_FILE, STORE_DIR};

static INIT: OnceLock<()> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sink {
    File,
    Stderr,
}

fn filter_for(verbosity: u8) -> EnvFilter {
    let default = match verbosity {
        0 => "drug_finder=info",
        1 => "drug_finder=debug",
        _ => "drug_finder=trace",
    };
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Open (append) the log file under `dir`, creating `dir` first.
fn open_log_file(dir: &Path) -> io::Result<File> {
    fs::create_dir_all(dir)?;
    OpenOptions::new().create(true).append(true).open(dir.join(LOG_FILE))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(sink: Sink, verbosity: u8) {
    INIT.get_or_init(|| {
        let filter = filter_for(verbosity);
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false);

        let installed = match sink {
            Sink::Stderr => builder.with_writer(std::io::stderr).try_init(),
            Sink::File => match open_log_file(Path::new(STORE_DIR)) {
                Ok(file) => builder
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init(),
                Err(e) => {
                    eprintln!("Log: cannot open {}/{}: {}; logging to stderr", STORE_DIR, LOG_FILE, e);
                    builder.with_writer(std::io::stderr).try_init()
                }
            },
        };
        if let Err(e) = installed {
            eprintln!("Log: subscriber not installed: {}", e);
        }
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warning-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_creates_its_directory() {
        let dir = std::env::temp_dir().join("drug_finder_log_dir").join("nested");
        let _ = fs::remove_dir_all(&dir);
        open_log_file(&dir).unwrap();
        assert!(dir.join(LOG_FILE).is_file());
    }

    #[test]
    fn log_file_under_a_plain_file_fails() {
        let blocker = std::env::temp_dir().join("drug_finder_log_blocker");
        let _ = fs::remove_dir_all(&blocker);
        fs::write(&blocker, "x").unwrap();
        assert!(open_log_file(&blocker).is_err());
    }
}
