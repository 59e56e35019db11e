//! Minimal stderr logger behind the `log` facade.
//!
//! Results go to stdout through [`crate::output`]; this logger only carries
//! diagnostics such as images that had to be replaced by a placeholder.

use log::{Level, LevelFilter, Metadata, Record};

pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(verbose: bool) -> Self {
        Self {
            level: if verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }

    /// Install as the global logger.
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    /// Render a record as a single line.
    fn format(record: &Record) -> String {
        let level = match record.level() {
            Level::Error => "error",
            Level::Warn => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        };
        format!("{level}: {}", record.args())
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", Self::format(record));
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    fn metadata(level: Level) -> Metadata<'static> {
        Metadata::builder().level(level).target("weekly_grid").build()
    }

    #[test]
    fn default_level_hides_debug() {
        let logger = StderrLogger::new(false);
        assert!(logger.enabled(&metadata(Level::Warn)));
        assert!(logger.enabled(&metadata(Level::Info)));
        assert!(!logger.enabled(&metadata(Level::Debug)));
    }

    #[test]
    fn verbose_shows_debug() {
        let logger = StderrLogger::new(true);
        assert!(logger.enabled(&metadata(Level::Debug)));
        assert!(!logger.enabled(&metadata(Level::Trace)));
    }

    #[test]
    fn format_prefixes_level() {
        let line = StderrLogger::format(
            &Record::builder()
                .level(Level::Warn)
                .args(format_args!("image not found: a.jpg"))
                .build(),
        );
        assert_eq!(line, "warning: image not found: a.jpg");
    }
}
