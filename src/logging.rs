//! File logging through log4rs.
//!
//! The terminal is in raw mode on the alternate screen while the game runs,
//! so log records only ever go to a file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// Initialise the global logger. `LevelFilter::Off` installs nothing.
pub fn init_log(level: LevelFilter, file_path: &Path) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    if let Some(dir) = file_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
    }

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(file_path)
        .with_context(|| format!("opening log file {}", file_path.display()))?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("building log config")?;

    log4rs::init_config(config).context("installing logger")?;
    Ok(())
}
