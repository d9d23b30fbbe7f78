use chrono::Local;
use log::{LevelFilter, Metadata, Record};
use std::io::Write;

/// Writes log records to stderr so stdout stays clean for command output
pub struct CliLogger {
    level: LevelFilter,
}

impl CliLogger {
    /// Level from the number of `-v` flags
    pub fn new(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        Self { level }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut stderr = std::io::stderr().lock();
        // Nowhere left to report a failed write
        let _ = writeln!(
            stderr,
            "{} {:<5} {}: {}",
            Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn verbosity_selects_level() {
        assert_eq!(CliLogger::new(0).level, LevelFilter::Warn);
        assert_eq!(CliLogger::new(1).level, LevelFilter::Info);
        assert_eq!(CliLogger::new(2).level, LevelFilter::Debug);
        assert_eq!(CliLogger::new(9).level, LevelFilter::Trace);
    }

    #[test]
    fn installs_as_global_logger() {
        CliLogger::new(2).init().unwrap();
        assert_eq!(log::max_level(), LevelFilter::Debug);
        assert!(log::logger().enabled(&Metadata::builder().level(log::Level::Debug).build()));
        log::debug!("logger installed");
    }
}
