use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{LevelFilter, Log, Metadata, Record};

enum LogTarget {
    Stderr,
    File(File),
}

struct LineLogger {
    target: Mutex<LogTarget>,
    level: LevelFilter,
}

impl LineLogger {
    fn stderr(level: LevelFilter) -> Self {
        LineLogger {
            target: Mutex::new(LogTarget::Stderr),
            level,
        }
    }

    fn file(file_path: &Path, level: LevelFilter) -> io::Result<Self> {
        // Create parent directories if they don't exist
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(file_path)?;

        Ok(LineLogger {
            target: Mutex::new(LogTarget::File(file)),
            level,
        })
    }
}

impl Log for LineLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Keep dependency chatter (hyper, tower) out of the output
        metadata.level() <= self.level && metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if let Ok(mut target) = self.target.lock() {
            let line = format!(
                "[{}] [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.args()
            );
            match &mut *target {
                LogTarget::Stderr => {
                    let _ = writeln!(io::stderr(), "{}", line);
                }
                LogTarget::File(file) => {
                    let _ = writeln!(file, "{}", line);
                    let _ = file.flush();
                }
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut target) = self.target.lock() {
            if let LogTarget::File(file) = &mut *target {
                let _ = file.flush();
            }
        }
    }
}

/// Initialize the logger, writing to `log_file` (overwriting previous logs) or to stderr
pub fn init_logger(log_file: Option<&Path>, level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    let logger = match log_file {
        Some(path) => LineLogger::file(path, level)?,
        None => LineLogger::stderr(level),
    };

    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(level))?;

    Ok(())
}
