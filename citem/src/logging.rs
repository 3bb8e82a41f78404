use citem_config::LoggingConfig;
use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// The level configured in `config`, `Info` when it cannot be parsed.
#[must_use]
pub fn level_filter(config: &LoggingConfig) -> LevelFilter {
    config.level.parse().unwrap_or(LevelFilter::Info)
}

fn build_config(config: &LoggingConfig) -> simplelog::Config {
    let mut builder = ConfigBuilder::new();

    if config.timestamp {
        builder.set_time_format_rfc3339();
        builder.set_time_level(LevelFilter::Error);
    } else {
        builder.set_time_level(LevelFilter::Off);
    }

    if config.threads {
        builder.set_thread_level(LevelFilter::Info);
    } else {
        builder.set_thread_level(LevelFilter::Off);
    }

    builder.set_target_level(LevelFilter::Off);
    builder.build()
}

/// Installs the terminal logger described by `config`. Does nothing when
/// logging is disabled.
///
/// Fails if another logger has already been set.
pub fn init_logger(config: &LoggingConfig) -> Result<(), SetLoggerError> {
    if !config.enabled {
        return Ok(());
    }

    let color = if config.color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    TermLogger::init(
        level_filter(config),
        build_config(config),
        TerminalMode::Mixed,
        color,
    )
}

#[cfg(test)]
mod test {
    use citem_config::LoggingConfig;
    use log::LevelFilter;

    use super::{init_logger, level_filter};

    fn with_level(level: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            ..LoggingConfig::default()
        }
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(&LoggingConfig::default()), LevelFilter::Info);
        assert_eq!(level_filter(&with_level("debug")), LevelFilter::Debug);
        assert_eq!(level_filter(&with_level("WARN")), LevelFilter::Warn);
        assert_eq!(level_filter(&with_level("off")), LevelFilter::Off);
        assert_eq!(level_filter(&with_level("loud")), LevelFilter::Info);
    }

    #[test]
    fn test_disabled_logger_is_not_installed() {
        let config = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        assert!(init_logger(&config).is_ok());
        assert!(init_logger(&config).is_ok());
    }

    #[test]
    fn test_logger_installs_once() {
        let config = LoggingConfig {
            color: false,
            timestamp: false,
            ..LoggingConfig::default()
        };
        assert!(init_logger(&config).is_ok());
        assert!(init_logger(&config).is_err());
    }
}
