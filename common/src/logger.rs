use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();
static MISSING_LOGGER_REPORTED: AtomicBool = AtomicBool::new(false);

/// Timestamped line logger. Writes to stderr so the console board on stdout stays clean.
pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => {
                format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
            }
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        eprintln!("{}", self.format_line(file, line, message));
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else if !MISSING_LOGGER_REPORTED.swap(true, Ordering::Relaxed) {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories_from_file_name() {
        let logger = Logger::new(None);
        let line = logger.format_line("common/src/games/tictactoe/game.rs", 42, "hello");
        assert!(line.ends_with("[game.rs:42] hello"));
    }

    #[test]
    fn test_format_line_includes_prefix() {
        let logger = Logger::new(Some("Client".to_string()));
        let line = logger.format_line("C:\\src\\main.rs", 7, "started");
        assert!(line.contains("[Client][main.rs:7] started"));
    }

    #[test]
    fn test_log_without_init_does_not_panic() {
        log(file!(), line!(), "dropped");
        crate::log!("dropped {}", 2);
    }
}
