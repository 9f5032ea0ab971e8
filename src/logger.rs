use log::{Level, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;

pub enum LogOutput {
    Stdout,
    Stderr,
}

pub struct Logger {
    pub write_to_std: Option<LogOutput>,
    pub severity: Level,
    pub file: Option<Arc<Mutex<File>>>,
    pub enable_colors: bool,
}

impl Logger {
    /// Create a new logger; `file_path` enables appending to that file
    pub fn new(
        file_path: Option<PathBuf>,
        severity: Option<Level>,
        write_to_std: Option<LogOutput>,
        enable_colors: bool,
    ) -> Self {
        let file = file_path.and_then(|path| {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .ok()
                .map(|f| Arc::new(Mutex::new(f)))
        });

        Logger {
            write_to_std,
            severity: severity.unwrap_or(Level::Info),
            file,
            enable_colors,
        }
    }

    /// Current UTC time as HH:MM:SS
    fn get_timestamp() -> String {
        let now = OffsetDateTime::now_utc();
        format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second())
    }

    fn get_color(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1b[31m",
            Level::Warn => "\x1b[33m",
            Level::Info => "\x1b[36m",
            Level::Debug => "\x1b[35m",
            Level::Trace => "\x1b[37m",
        }
    }

    fn get_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Parse a level name, defaulting to info
    pub fn parse_level(raw: Option<&str>) -> Level {
        raw.and_then(|s| s.trim().parse::<Level>().ok())
            .unwrap_or(Level::Info)
    }

    /// Initialize logger with environment variables
    pub fn init() -> Result<(), log::SetLoggerError> {
        let level_var = std::env::var("ENCYCLOPEDIA_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();
        let severity = Self::parse_level(level_var.as_deref());

        let file_path = std::env::var("ENCYCLOPEDIA_LOG_FILE").ok().map(PathBuf::from);
        let enable_colors = std::env::var("NO_COLOR").is_err();

        let logger = Logger::new(file_path, Some(severity), Some(LogOutput::Stderr), enable_colors);
        log::set_max_level(severity.to_level_filter());
        log::set_logger(Box::leak(Box::new(logger)))?;
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.severity
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Self::get_timestamp();
        let level_str = record.level().as_str();
        let args = record.args();

        let formatted_message = if self.enable_colors {
            let color = Self::get_color(record.level());
            let reset = Self::get_reset();
            format!("{color}[{timestamp}] {level_str}{reset} {args}\n")
        } else {
            format!("[{timestamp}] {level_str} {args}\n")
        };

        match &self.write_to_std {
            Some(LogOutput::Stdout) => {
                let _ = std::io::stdout().write_all(formatted_message.as_bytes());
            }
            Some(LogOutput::Stderr) => {
                let _ = std::io::stderr().write_all(formatted_message.as_bytes());
            }
            None => {}
        }

        // File output never carries colour codes
        if let Some(file) = &self.file {
            if let Ok(mut file_guard) = file.lock() {
                let _ = writeln!(file_guard, "[{timestamp}] {level_str} {args}");
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
        if let Some(file) = &self.file {
            if let Ok(mut file_guard) = file.lock() {
                let _ = file_guard.flush();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing_falls_back_to_info() {
        assert_eq!(Logger::parse_level(Some("debug")), Level::Debug);
        assert_eq!(Logger::parse_level(Some("WARN")), Level::Warn);
        assert_eq!(Logger::parse_level(Some("chatty")), Level::Info);
        assert_eq!(Logger::parse_level(None), Level::Info);
    }

    #[test]
    fn file_output_is_plain_text() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logs").join("encyclopedia.log");
        let logger = Logger::new(Some(path.clone()), Some(Level::Debug), None, true);

        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .args(format_args!("entry missing"))
                .build(),
        );
        logger.flush();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("WARN entry missing"));
        assert!(!written.contains("\x1b["));
    }

    #[test]
    fn records_above_severity_are_dropped() {
        let logger = Logger::new(None, Some(Level::Warn), None, false);
        assert!(!logger.enabled(&Metadata::builder().level(Level::Info).build()));
        assert!(logger.enabled(&Metadata::builder().level(Level::Error).build()));
    }
}
