use env_logger::fmt::Color;
use log::{debug, Level, LevelFilter};
use std::io::Write;

/// Parses a level name, falling back to `warn` for anything unknown.
pub fn level(level: &str) -> LevelFilter {
    match level {
        "info" | "INFO" => LevelFilter::Info,
        "debug" | "DEBUG" => LevelFilter::Debug,
        "trace" | "TRACE" => LevelFilter::Trace,
        "error" | "ERROR" => LevelFilter::Error,
        "warn" | "WARN" => LevelFilter::Warn,
        "off" | "OFF" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}

/// Logs to stderr with colored levels. Only the first call installs the logger.
pub fn init(level: &str) {
    let result = env_logger::builder()
        .filter_level(self::level(level))
        .format(|buf, record| {
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Rgb(100, 200, 255)),
                Level::Trace => style.set_color(Color::Rgb(255, 100, 255)),
            };

            writeln!(
                buf,
                "{} | {} | {} | {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                format_args!("{:^5}", style.value(record.level())),
                format_args!("{:^20}", record.target()),
                record.args(),
            )
        })
        .try_init();

    if let Err(e) = result {
        debug!("Logger already initialised: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels() {
        assert_eq!(level("debug"), LevelFilter::Debug);
        assert_eq!(level("OFF"), LevelFilter::Off);
        assert_eq!(level("loud"), LevelFilter::Warn);
    }

    #[test]
    fn init_twice() {
        init("debug");
        init("trace");
        assert!(log::max_level() >= LevelFilter::Debug);
    }
}
