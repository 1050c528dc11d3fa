//! log4rs setup.
//!
//! Results own stdout, so every appender here writes to stderr.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Config file picked up from the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

const PATTERN: &str = "{l} {m}{n}";

/// Start logging from [`LOG_CONFIG_FILE`] when present, else warnings to stderr.
pub fn init() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {LOG_CONFIG_FILE}: {e}"))?;
        return Ok(());
    }
    log4rs::init_config(default_config(LevelFilter::Warn)?)?;
    Ok(())
}

/// Single stderr appender at `level`.
pub fn default_config(level: LevelFilter) -> Result<LogConfig, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
