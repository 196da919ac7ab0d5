// NeonArcade
// copyright agam 2024~2025

//! Log module provides log setup, reference
//! https://docs.rs/log4rs

use crate::util::get_abs_path;
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

/// init logs system
///
/// Writes to a file appender so log lines never race the terminal
/// renderer for stdout. Calling it twice is a no-op: log4rs refuses a
/// second global config, which only happens in tests.
pub fn init_log(level: LevelFilter, file_path: &str) {
    let fpstr = get_abs_path(file_path);
    let logfile = match FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
        )))
        .build(fpstr)
    {
        Ok(f) => f,
        Err(_) => return,
    };
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level));
    if let Ok(config) = config {
        let _ = log4rs::init_config(config);
    }
}
