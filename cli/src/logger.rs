use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    /// Goes to stderr so it never interleaves with the board on stdout.
    pub fn log(&self, message: &str) {
        eprintln!("{}", self.format(message));
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_includes_prefix() {
        let logger = Logger::new(Some("Engine".to_string()));
        let line = logger.format("thinking");
        assert!(line.ends_with("][Engine] thinking"));
        assert!(line.starts_with('['));
    }

    #[test]
    fn test_format_without_prefix() {
        let logger = Logger::new(None);
        let line = logger.format("ready");
        assert!(line.ends_with("] ready"));
        assert!(!line.contains("]["));
    }
}
