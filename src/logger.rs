use std::sync::Arc;
use std::time::Duration;

use spdlog::sink::{RotatingFileSink, RotationPolicy, Sink, StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger};

use crate::config::{Config, Log, LogLevel};

fn to_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Critical => Level::Critical,
        LogLevel::Error => Level::Error,
        LogLevel::Warn => Level::Warn,
        LogLevel::Info => Level::Info,
        LogLevel::Debug => Level::Debug,
        LogLevel::Trace => Level::Trace,
    }
}

fn console_sink(stream: StdStream, filter: LevelFilter) -> spdlog::Result<Arc<dyn Sink>> {
    let sink = StdStreamSink::builder()
        .std_stream(stream)
        .level_filter(filter)
        .build()?;
    Ok(Arc::new(sink))
}

fn build_logger(log: &Log) -> spdlog::Result<Arc<Logger>> {
    let mut sinks: Vec<Arc<dyn Sink>> = Vec::new();

    if let Some(ref location) = log.location {
        let daily_sink = RotatingFileSink::builder()
            .base_path(location)
            .rotation_policy(RotationPolicy::Daily { hour: 0, minute: 0 })
            .max_files(60)
            .rotate_on_open(false)
            .build()?;
        sinks.push(Arc::new(daily_sink));
    }

    if log.log_to_console {
        let split = to_level(log.stderr_level.unwrap_or(LogLevel::Warn));
        sinks.push(console_sink(StdStream::Stdout, LevelFilter::MoreVerbose(split))?);
        sinks.push(console_sink(StdStream::Stderr, LevelFilter::MoreSevereEqual(split))?);
    }

    let logger = Arc::new(Logger::builder().sinks(sinks).build()?);
    logger.set_flush_level_filter(LevelFilter::MoreSevereEqual(Level::Info));
    logger.set_flush_period(Some(Duration::from_secs(2)));
    logger.set_level_filter(LevelFilter::MoreSevereEqual(to_level(log.level)));

    Ok(logger)
}

/// Without a `[log]` section spdlog's default logger is kept.
pub fn configure_logger(config: &Config) -> spdlog::Result<()> {
    if let Some(ref log) = config.log {
        spdlog::set_default_logger(build_logger(log)?);
    }

    Ok(())
}
